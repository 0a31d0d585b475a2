//! Detail controller for a single user profile.
//!
//! A much simpler sibling of the dashboard controller: it receives its
//! record fully loaded, fills in the display age if the dashboard has not
//! already, and turns a fling gesture into a back navigation.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;

use crate::controller::Navigator;
use crate::models::UserRecord;
use crate::utils::{calculate_age, Strings};

/// Minimum downward fling velocity that dismisses the view. Strictly
/// greater-than; a fling at exactly the threshold stays put.
pub const GO_BACK_MIN_VELOCITY: f32 = 1000.0;

pub struct DetailController {
    navigator: Arc<dyn Navigator>,
    strings: Arc<dyn Strings>,
    user: watch::Sender<Option<UserRecord>>,
}

impl DetailController {
    pub fn new(navigator: Arc<dyn Navigator>, strings: Arc<dyn Strings>) -> Self {
        Self {
            navigator,
            strings,
            user: watch::Sender::new(None),
        }
    }

    /// Publish the record to the view, computing its display age first if
    /// the dashboard never did (e.g. deep link straight to detail).
    pub fn set_user(&self, mut user: UserRecord) {
        if user.needs_display_age() {
            let age = calculate_age(user.birthday.raw, Utc::now());
            user.display_age = Some(self.strings.age_string(age));
        }
        self.user.send_replace(Some(user));
    }

    /// The published record. Retained state, not an event: a late
    /// subscriber sees the current user immediately.
    pub fn user(&self) -> watch::Receiver<Option<UserRecord>> {
        self.user.subscribe()
    }

    pub fn on_gesture_velocity_y(&self, velocity: f32) {
        if velocity > GO_BACK_MIN_VELOCITY {
            self.navigator.go_back();
        }
    }
}
