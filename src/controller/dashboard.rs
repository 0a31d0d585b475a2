//! Dashboard controller: the user-loading state machine.
//!
//! Owns the in-memory roster cache and drives `Idle -> Loading ->
//! {Displayed, Errored}`; refresh re-enters `Loading`. New data is only
//! pulled from the network when there is nothing in the persisted cache or
//! a refresh is triggered explicitly.

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use crate::controller::Navigator;
use crate::event::EventCell;
use crate::models::UserRecord;
use crate::store::{LoadResult, LoadSource};
use crate::utils::{calculate_age, Strings};

/// Observable UI channels of the dashboard. The attached view drains these;
/// single-delivery semantics mean a view that re-attaches never replays a
/// spinner change, an error banner, or a roster update it already handled.
#[derive(Default)]
pub struct DashboardEvents {
    pub show_spinner: EventCell<()>,
    pub hide_spinner: EventCell<()>,
    /// Dismiss any visible error banner.
    pub dismiss_error: EventCell<()>,
    /// Replace the rendered roster.
    pub update_users: EventCell<Vec<UserRecord>>,
    /// Show an error banner with this (generic, localized) message. The
    /// banner's retry affordance should call [`DashboardController::on_refresh`].
    pub show_error: EventCell<String>,
    /// Diagnostic line for the host's error log.
    pub log_error: EventCell<String>,
}

pub struct DashboardController {
    store: Arc<dyn LoadSource>,
    navigator: Arc<dyn Navigator>,
    strings: Arc<dyn Strings>,
    /// In-memory roster cache. `None` means no successful load this session;
    /// once set, loads short-circuit here until an explicit refresh. Session
    /// scoped - there is no invalidation besides process restart.
    users: Option<Vec<UserRecord>>,
    pub events: DashboardEvents,
}

impl DashboardController {
    pub fn new(
        store: Arc<dyn LoadSource>,
        navigator: Arc<dyn Navigator>,
        strings: Arc<dyn Strings>,
    ) -> Self {
        Self {
            store,
            navigator,
            strings,
            users: None,
            events: DashboardEvents::default(),
        }
    }

    /// Host attachment hook. The host retains one controller per screen
    /// lifetime, so this runs a load exactly once even across view
    /// re-attachment.
    pub async fn attach(&mut self) {
        self.load_users().await;
    }

    /// Serve the in-memory roster if there is one; otherwise go through the
    /// store (persisted cache first).
    pub async fn load_users(&mut self) {
        match self.users.clone() {
            Some(users) => {
                self.events.hide_spinner.call();
                self.events.dismiss_error.call();
                self.events.update_users.set(users);
            }
            None => self.load_from_store(true).await,
        }
    }

    /// Consume one load stream from the store to completion.
    ///
    /// Overlapping invocations (rapid refresh taps) are not coalesced or
    /// cancelled; each runs its own load and the last writer wins on the
    /// event cells.
    async fn load_from_store(&mut self, use_cache: bool) {
        let mut results = self.store.load(use_cache);
        while let Some(result) = results.recv().await {
            self.handle_result(result);
        }
    }

    fn handle_result(&mut self, result: LoadResult) {
        match result {
            LoadResult::Success(users) if !users.is_empty() => self.on_success(users),
            // An empty successful roster changes nothing on screen.
            LoadResult::Success(_) => {}
            LoadResult::Loading => self.events.show_spinner.call(),
            LoadResult::Error(message) => self.on_error(message),
        }
    }

    fn on_success(&mut self, mut users: Vec<UserRecord>) {
        self.events.hide_spinner.call();
        self.events.dismiss_error.call();
        self.attach_display_ages(&mut users);
        self.users = Some(users.clone());
        self.events.update_users.set(users);
    }

    fn on_error(&mut self, message: Option<String>) {
        self.events.hide_spinner.call();
        self.events.show_error.set(self.strings.error_message());
        let detail = message.as_deref().unwrap_or("");
        warn!(error = detail, "Dashboard load failed");
        self.events
            .log_error
            .set(format!("Error loading users: {}", detail));
    }

    /// Attach a formatted age to every record that does not have one yet.
    /// Records arriving from the in-memory or persisted cache keep the age
    /// they were given on their original load.
    fn attach_display_ages(&self, users: &mut [UserRecord]) {
        let now = Utc::now();
        for user in users.iter_mut().filter(|u| u.needs_display_age()) {
            let age = calculate_age(user.birthday.raw, now);
            user.display_age = Some(self.strings.age_string(age));
        }
    }

    pub fn on_click(&self, user: &UserRecord) {
        self.navigator.go_to_detail(user);
    }

    /// Explicit refresh: always bypasses the persisted cache and forces a
    /// network fetch, clearing any visible error first.
    pub async fn on_refresh(&mut self) {
        self.events.dismiss_error.call();
        self.load_from_store(false).await;
    }

    /// Current in-memory roster, if a load has succeeded this session.
    pub fn users(&self) -> Option<&[UserRecord]> {
        self.users.as_deref()
    }
}
