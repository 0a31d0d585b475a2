//! JSON-file backed record cache with a live change stream.
//!
//! Readers subscribe to a `watch` channel: subscription immediately yields
//! the current roster (possibly empty), and later `replace_all` calls are
//! pushed to any receiver still attached. The user store only ever takes the
//! first notification and drops its receiver, but the stream interface keeps
//! the cache usable as a live source too.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tracing::debug;

use crate::models::UserRecord;

/// Cache file name within the cache directory.
const RECORDS_FILE: &str = "users.json";

/// Durable store of the user roster. Replacement is all-or-nothing; there is
/// no incremental merge.
pub trait RecordCache: Send + Sync {
    /// Subscribe to the roster. The receiver's current value is the roster
    /// as of subscription; an empty list means nothing has been persisted.
    fn read_all(&self) -> watch::Receiver<Vec<UserRecord>>;

    /// Replace the entire persisted roster and notify subscribers.
    fn replace_all(&self, records: &[UserRecord]) -> Result<()>;
}

/// `RecordCache` persisted as a JSON file under the platform cache dir.
pub struct JsonRecordCache {
    path: PathBuf,
    roster: watch::Sender<Vec<UserRecord>>,
}

impl JsonRecordCache {
    /// Open (or create) the cache under `cache_dir`, loading any roster
    /// persisted by a previous session.
    pub fn open(cache_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&cache_dir)
            .with_context(|| format!("Failed to create cache dir: {}", cache_dir.display()))?;
        let path = cache_dir.join(RECORDS_FILE);

        let records = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read cache file: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse cache file: {}", path.display()))?
        } else {
            Vec::new()
        };

        debug!(count = records.len(), path = %path.display(), "Opened record cache");
        Ok(Self {
            path,
            roster: watch::Sender::new(records),
        })
    }
}

impl RecordCache for JsonRecordCache {
    fn read_all(&self) -> watch::Receiver<Vec<UserRecord>> {
        self.roster.subscribe()
    }

    fn replace_all(&self, records: &[UserRecord]) -> Result<()> {
        let contents = serde_json::to_string_pretty(records)?;

        // Write-then-rename so a crash mid-replace leaves the previous
        // roster intact rather than a truncated file.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, contents)
            .with_context(|| format!("Failed to write cache file: {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace cache file: {}", self.path.display()))?;

        self.roster.send_replace(records.to_vec());
        debug!(count = records.len(), "Replaced persisted roster");
        Ok(())
    }
}
