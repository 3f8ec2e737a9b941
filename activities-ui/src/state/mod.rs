//! State Management
//!
//! The page's single panel controller and the signal-backed host it drives.

pub mod panel;

pub use panel::{provide_panel_controller, use_panel, PanelController, PanelStore};
