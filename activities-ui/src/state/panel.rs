//! Panel Store
//!
//! Leptos implementation of [`PanelHost`]: the rendered state lives in one
//! `RwSignal`, confirmations use `window.confirm`, and the notice hide timer
//! is a `gloo_timers` timeout that is dropped (and so cleared) whenever a
//! newer notice takes over.

use gloo_timers::callback::Timeout;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use mergington_activities::{
    ActivityPanelController, NoticeTicket, PanelConfig, PanelHost, PanelState,
};

use crate::api::GlooActivityApi;

/// The page's controller type
pub type PanelController = ActivityPanelController<GlooActivityApi, PanelStore>;

/// Signal-backed panel state plus the pending hide timer
#[derive(Clone)]
pub struct PanelStore {
    pub panel: RwSignal<PanelState>,
    hide_timer: Rc<RefCell<Option<Timeout>>>,
}

impl PanelStore {
    pub fn new() -> Self {
        Self {
            panel: create_rw_signal(PanelState::default()),
            hide_timer: Rc::new(RefCell::new(None)),
        }
    }
}

impl Default for PanelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelHost for PanelStore {
    fn update_panel(&self, f: impl FnOnce(&mut PanelState)) {
        self.panel.update(f);
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn schedule_hide(&self, ticket: NoticeTicket, after: Duration) {
        let panel = self.panel;
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);

        let timeout = Timeout::new(millis, move || {
            let _ = panel.try_update(|state| state.notice.expire(ticket));
        });

        // Dropping the previous timeout clears it
        self.hide_timer.borrow_mut().replace(timeout);
    }
}

/// Build the page controller once and provide it to the component tree
pub fn provide_panel_controller() -> Rc<PanelController> {
    let controller = Rc::new(ActivityPanelController::new(
        GlooActivityApi::same_origin(),
        PanelStore::new(),
        PanelConfig::default(),
    ));

    provide_context(Rc::clone(&controller));
    controller
}

/// Fetch the page controller from context
pub fn use_panel() -> Rc<PanelController> {
    use_context::<Rc<PanelController>>().expect("PanelController not found")
}
