//! Shell controller for the hosting screen.
//!
//! Sparse on purpose: its one job is routing the first attachment to the
//! dashboard, and doing so only once even if the host re-attaches after a
//! configuration change.

use std::sync::Arc;

use crate::controller::Navigator;

pub struct ShellController {
    navigator: Arc<dyn Navigator>,
    initial_navigation: bool,
}

impl ShellController {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            navigator,
            initial_navigation: false,
        }
    }

    pub fn attach(&mut self) {
        if !self.initial_navigation {
            self.navigator.go_to_dashboard();
            self.initial_navigation = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::testing::{NavEvent, RecordingNavigator};

    #[test]
    fn test_first_attach_navigates_to_dashboard() {
        let navigator = Arc::new(RecordingNavigator::default());
        let mut shell = ShellController::new(Arc::clone(&navigator) as _);
        shell.attach();
        assert_eq!(navigator.recorded(), vec![NavEvent::Dashboard]);
    }

    #[test]
    fn test_reattach_does_not_navigate_again() {
        let navigator = Arc::new(RecordingNavigator::default());
        let mut shell = ShellController::new(Arc::clone(&navigator) as _);
        shell.attach();
        shell.attach();
        assert_eq!(navigator.recorded(), vec![NavEvent::Dashboard]);
    }
}
