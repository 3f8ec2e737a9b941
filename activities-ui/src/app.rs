//! App Root Component
//!
//! Builds the panel controller once and lays out the page.

use leptos::*;

use crate::components::{ActivityList, MessageBanner, SignupForm};
use crate::state::provide_panel_controller;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let controller = provide_panel_controller();

    // Initial load
    spawn_local(async move {
        controller.load_activities().await;
    });

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <MessageBanner />
            </section>
        </main>
    }
}
