//! Signup Form Component
//!
//! Email input plus the activity select. Native `required`/`type=email`
//! validation runs before the submit handler.

use leptos::*;

use mergington_activities::PLACEHOLDER_OPTION;

use crate::state::use_panel;

/// The `#signup-form`
#[component]
pub fn SignupForm() -> impl IntoView {
    let controller = use_panel();
    let panel = controller.host().panel;

    let options = create_memo(move |_| panel.with(|state| state.options.clone()));
    let email = create_memo(move |_| panel.with(|state| state.form.email.clone()));
    let activity = create_memo(move |_| panel.with(|state| state.form.activity.clone()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let (email, activity) =
            panel.with_untracked(|state| (state.form.email.clone(), state.form.activity.clone()));
        let controller = controller.clone();
        spawn_local(async move {
            controller.submit_signup(&email, &activity).await;
        });
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        panel.update(|state| state.form.email = value);
                    }
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required=true
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        panel.update(|state| state.form.activity = value);
                    }
                    prop:value=move || activity.get()
                >
                    <option value="">{PLACEHOLDER_OPTION}</option>
                    <For
                        each=move || options.get()
                        key=|name| name.clone()
                        children=move |name| {
                            view! { <option value=name.clone()>{name}</option> }
                        }
                    />
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
