//! UI Components
//!
//! Leptos components for the sign-up page.

pub mod activity_list;
pub mod loading;
pub mod message;
pub mod signup_form;

pub use activity_list::ActivityList;
pub use loading::Loading;
pub use message::MessageBanner;
pub use signup_form::SignupForm;
