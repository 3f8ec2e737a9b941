//! Mergington Activities Page
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! It lists extracurricular activities, lets students sign up, and lets
//! staff remove participants, all through the activities backend served
//! from the same origin.

use leptos::*;

mod api;
mod app;
mod components;
mod logging;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    logging::init_tracing();

    mount_to_body(|| view! { <app::App /> });
}
