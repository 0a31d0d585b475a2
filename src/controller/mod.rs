//! Screen controllers.
//!
//! Each controller owns the load/display/error lifecycle of one screen and
//! publishes UI intent through observable channels; the presentation layer
//! decides how to render them. Controllers never render and never fail -
//! they only react to results.

pub mod dashboard;
pub mod detail;
pub mod shell;

pub use dashboard::DashboardController;
pub use detail::DetailController;
pub use shell::ShellController;

use crate::models::UserRecord;

/// Screen navigation, pure control transfer. The host owns the actual
/// screen stack.
pub trait Navigator: Send + Sync {
    fn go_to_dashboard(&self);
    fn go_to_detail(&self, user: &UserRecord);
    fn go_back(&self);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Navigator;
    use crate::models::{Birthday, UserRecord};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum NavEvent {
        Dashboard,
        Detail(String),
        Back,
    }

    /// Navigator fake recording every control transfer.
    #[derive(Default)]
    pub struct RecordingNavigator {
        pub events: Mutex<Vec<NavEvent>>,
    }

    impl RecordingNavigator {
        pub fn recorded(&self) -> Vec<NavEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn go_to_dashboard(&self) {
            self.events.lock().unwrap().push(NavEvent::Dashboard);
        }

        fn go_to_detail(&self, user: &UserRecord) {
            self.events
                .lock()
                .unwrap()
                .push(NavEvent::Detail(user.name.clone()));
        }

        fn go_back(&self) {
            self.events.lock().unwrap().push(NavEvent::Back);
        }
    }

    pub fn sample_user(name: &str) -> UserRecord {
        UserRecord {
            name: name.to_string(),
            photo_url: format!("https://example.com/{}.jpg", name),
            region: "Testland".to_string(),
            birthday: Birthday { raw: 551062610 },
            display_age: None,
        }
    }
}
