//! User roster store: persisted cache first, network second.
//!
//! `UserStore` resolves one load intent into a short stream of results:
//! `Loading` immediately, then exactly one of `Success` or `Error`. On a
//! network success the persisted roster is replaced in the background; the
//! emission never waits on persistence, so callers must not assume the
//! cache is consistent the moment they see `Success`.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::DirectoryService;
use crate::cache::RecordCache;
use crate::models::UserRecord;

/// How many users to request per fetch.
pub const NUM_USERS_TO_REQUEST: u32 = 500;

/// One emission on the load result stream.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadResult {
    Loading,
    Success(Vec<UserRecord>),
    /// Failure with the underlying message, if one exists. The message is
    /// for logging only; the UI shows its own generic text.
    Error(Option<String>),
}

/// Source of dashboard load streams. `UserStore` is the real one;
/// controller tests substitute a scripted fake.
pub trait LoadSource: Send + Sync {
    fn load(&self, use_cache: bool) -> mpsc::UnboundedReceiver<LoadResult>;
}

pub struct UserStore {
    directory: Arc<dyn DirectoryService>,
    cache: Arc<dyn RecordCache>,
}

impl UserStore {
    pub fn new(directory: Arc<dyn DirectoryService>, cache: Arc<dyn RecordCache>) -> Self {
        Self { directory, cache }
    }

    async fn load_from_network(
        directory: Arc<dyn DirectoryService>,
        cache: Arc<dyn RecordCache>,
        tx: mpsc::UnboundedSender<LoadResult>,
    ) {
        match directory.fetch_users(NUM_USERS_TO_REQUEST).await {
            Ok(users) if !users.is_empty() => {
                // Fire-and-forget: replace the persisted roster off the hot
                // path. File I/O goes to the blocking pool.
                let snapshot = users.clone();
                tokio::task::spawn_blocking(move || {
                    if let Err(e) = cache.replace_all(&snapshot) {
                        warn!(error = %e, "Failed to replace persisted roster");
                    }
                });

                let _ = tx.send(LoadResult::Success(users));
            }
            Ok(_) => {
                // A successful transfer of nothing is still a bad response.
                let _ = tx.send(LoadResult::Error(Some(
                    crate::api::ApiError::UnsuccessfulResponse.to_string(),
                )));
            }
            Err(e) => {
                let _ = tx.send(LoadResult::Error(Some(e.to_string())));
            }
        }
    }
}

impl LoadSource for UserStore {
    /// Resolve one load intent.
    ///
    /// With `use_cache`, the persisted roster is consulted first via a
    /// one-shot read: the subscription is dropped after its first
    /// notification, whatever the outcome, so a later persisted-store write
    /// can never race a network result onto this stream.
    fn load(&self, use_cache: bool) -> mpsc::UnboundedReceiver<LoadResult> {
        let (tx, rx) = mpsc::unbounded_channel();
        // Loading is emitted before the task is spawned, so it is always
        // observed ahead of any terminal result.
        let _ = tx.send(LoadResult::Loading);

        let directory = Arc::clone(&self.directory);
        let cache = Arc::clone(&self.cache);
        tokio::spawn(async move {
            if use_cache {
                let persisted = {
                    // One-shot read; the receiver is dropped at end of scope.
                    let rx = cache.read_all();
                    let roster = rx.borrow().clone();
                    roster
                };
                if !persisted.is_empty() {
                    debug!(count = persisted.len(), "Serving roster from persisted cache");
                    let _ = tx.send(LoadResult::Success(persisted));
                    return;
                }
                debug!("Persisted cache empty, falling back to network");
            }

            Self::load_from_network(directory, cache, tx).await;
        });

        rx
    }
}
