//! Panel Controller
//!
//! Drives the fetch → render → act → mutate → re-fetch cycle of the sign-up
//! page.

use crate::api::ActivityApi;
use crate::notice::Notice;

use super::{ListView, PanelConfig, PanelHost};

/// Replaces the activity list when loading fails
pub const LOAD_FAILURE_TEXT: &str = "Failed to load activities. Please try again later.";

/// Signup rejected without a usable detail
pub const SIGNUP_FALLBACK: &str = "An error occurred";

/// Signup never got a readable response
pub const SIGNUP_TRANSPORT_FALLBACK: &str = "Failed to sign up. Please try again.";

/// Removal failed for any reason without a usable detail
pub const REMOVE_FALLBACK: &str = "Failed to remove participant";

/// Controller for the activity panel.
///
/// Constructed once per page; holds the backend client and the host that
/// owns the rendered state.
pub struct ActivityPanelController<A, H> {
    api: A,
    host: H,
    config: PanelConfig,
}

impl<A: ActivityApi, H: PanelHost> ActivityPanelController<A, H> {
    pub fn new(api: A, host: H, config: PanelConfig) -> Self {
        Self { api, host, config }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Fetch all activities and redraw the list and the select options.
    ///
    /// On failure only the list is replaced; the select keeps whatever
    /// options it had.
    pub async fn load_activities(&self) {
        match self.api.list_activities().await {
            Ok(board) => {
                tracing::info!(activities = board.len(), "Loaded activities");
                let cards = board.cards();
                let names = board.names();
                self.host.update_panel(move |panel| {
                    panel.list = ListView::Ready(cards);
                    panel.options = names;
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching activities");
                self.host.update_panel(|panel| {
                    panel.list = ListView::Failed(LOAD_FAILURE_TEXT.to_string());
                });
            }
        }
    }

    /// Unregister `email` from `activity` after the user confirms
    pub async fn remove_participant(&self, activity: &str, email: &str) {
        let prompt = format!("Remove {} from {}?", email, activity);
        if !self.host.confirm(&prompt) {
            tracing::debug!(activity, email, "Removal declined");
            return;
        }

        match self.api.unregister(activity, email).await {
            Ok(()) => {
                self.load_activities().await;
                self.show_notice(Notice::success(format!("{} removed from {}", email, activity)));
            }
            Err(e) if e.is_transport() => {
                tracing::error!(error = %e, "Error removing participant");
                self.show_notice(Notice::error(REMOVE_FALLBACK));
            }
            Err(e) => {
                tracing::warn!(error = %e, activity, email, "Unregister rejected");
                self.show_notice(Notice::error(e.detail().unwrap_or(REMOVE_FALLBACK)));
            }
        }
    }

    /// Sign `email` up for `activity`.
    ///
    /// The form is only reset when the backend accepts the signup.
    pub async fn submit_signup(&self, email: &str, activity: &str) {
        match self.api.signup(activity, email).await {
            Ok(receipt) => {
                self.show_notice(Notice::success(receipt.message));
                self.host.update_panel(|panel| panel.form.reset());
                self.load_activities().await;
            }
            Err(e) if e.is_transport() => {
                tracing::error!(error = %e, "Error signing up");
                self.show_notice(Notice::error(SIGNUP_TRANSPORT_FALLBACK));
            }
            Err(e) => {
                tracing::warn!(error = %e, activity, email, "Signup rejected");
                self.show_notice(Notice::error(e.detail().unwrap_or(SIGNUP_FALLBACK)));
            }
        }
    }

    /// Replace the current notice and schedule it to hide
    pub fn show_notice(&self, notice: Notice) {
        let mut ticket = None;
        self.host.update_panel(|panel| ticket = Some(panel.notice.show(notice)));

        if let Some(ticket) = ticket {
            self.host.schedule_hide(ticket, self.config.notice_hide_after);
        }
    }
}
