//! Loading Component

use leptos::*;

/// Placeholder shown until the first activity load completes
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <p class="loading">"Loading activities..."</p>
    }
}
