//! # Mergington Activities
//!
//! Sign-up panel for the Mergington extracurricular activities backend.
//!
//! The crate holds everything that does not depend on where the panel runs:
//! the activity model, endpoint paths, response classification, the notice
//! slot, and [`ActivityPanelController`]. The Leptos page in `activities-ui`
//! and the `activities` terminal client plug in their own [`ActivityApi`]
//! and [`PanelHost`].
//!
//! ## Modules
//!
//! - [`model`]: activities as served by the backend, and the cards built from them
//! - [`api`]: the backend seam and shared response decoding
//! - [`panel`]: panel state and the controller
//! - [`notice`]: the transient success/error message
//! - [`config`], [`logging`], [`terminal`]: native-only client support

pub mod api;
pub mod endpoints;
pub mod error;
pub mod model;
pub mod notice;
pub mod panel;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

pub use api::ActivityApi;
pub use endpoints::ActivityEndpoints;
pub use error::{ApiError, ApiResult};
pub use model::{Activity, ActivityBoard, ActivityCard, ParticipantRow, RemovalTarget, SignupReceipt};
pub use notice::{Notice, NoticeKind, NoticeSlot, NoticeTicket};
pub use panel::{
    ActivityPanelController, ListView, PanelConfig, PanelHost, PanelState, SignupForm,
    PLACEHOLDER_OPTION,
};

#[cfg(not(target_arch = "wasm32"))]
pub use api::HttpActivityApi;
#[cfg(not(target_arch = "wasm32"))]
pub use config::{Config, ConfigError};
