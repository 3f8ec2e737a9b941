//! Activity Panel
//!
//! State rendered by the sign-up page and the controller that drives it.
//!
//! The controller never touches a DOM or terminal directly. Hosts implement
//! [`PanelHost`] to own the [`PanelState`], answer confirmation prompts, and
//! run the cancelable hide timer for notices.

mod controller;

pub use controller::{
    ActivityPanelController, LOAD_FAILURE_TEXT, REMOVE_FALLBACK, SIGNUP_FALLBACK,
    SIGNUP_TRANSPORT_FALLBACK,
};

use std::time::Duration;

use crate::model::ActivityCard;
use crate::notice::{NoticeSlot, NoticeTicket};

/// Label of the select control's first, non-removable option
pub const PLACEHOLDER_OPTION: &str = "-- Select an activity --";

/// Default time a notice stays on screen
pub const DEFAULT_NOTICE_HIDE_MS: u64 = 5000;

/// What the activity list area currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// Initial state before the first load completes
    Loading,
    Ready(Vec<ActivityCard>),
    /// Static failure text replacing the list
    Failed(String),
}

impl Default for ListView {
    fn default() -> Self {
        ListView::Loading
    }
}

/// Values of the signup form inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub email: String,
    /// Selected activity; empty means the placeholder is selected
    pub activity: String,
}

impl SignupForm {
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }
}

/// Everything the page renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    pub list: ListView,
    /// Dynamic select options, placeholder excluded
    pub options: Vec<String>,
    pub notice: NoticeSlot,
    pub form: SignupForm,
}

impl PanelState {
    /// Options in the select control, placeholder included
    pub fn option_count(&self) -> usize {
        1 + self.options.len()
    }
}

/// Panel tuning
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub notice_hide_after: Duration,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            notice_hide_after: Duration::from_millis(DEFAULT_NOTICE_HIDE_MS),
        }
    }
}

/// Platform side of the panel
pub trait PanelHost {
    /// Mutate the rendered state
    fn update_panel(&self, f: impl FnOnce(&mut PanelState));

    /// Ask the user a yes/no question, blocking until answered
    fn confirm(&self, prompt: &str) -> bool;

    /// Arrange for `NoticeSlot::expire(ticket)` to run after `after`,
    /// cancelling any hide scheduled for an earlier notice
    fn schedule_hide(&self, ticket: NoticeTicket, after: Duration);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = PanelState::default();
        assert_eq!(state.list, ListView::Loading);
        assert_eq!(state.option_count(), 1);
        assert!(!state.notice.is_visible());
    }

    #[test]
    fn test_form_reset() {
        let mut form = SignupForm {
            email: "a@x.com".to_string(),
            activity: "Chess Club".to_string(),
        };
        form.reset();
        assert_eq!(form, SignupForm::default());
    }

    #[test]
    fn test_default_hide_delay() {
        assert_eq!(PanelConfig::default().notice_hide_after, Duration::from_secs(5));
    }
}
