//! Message Banner Component
//!
//! The `#message` area showing the latest success or error notice.

use leptos::*;

use mergington_activities::NoticeSlot;

use crate::state::use_panel;

/// Message area; `hidden` is applied once the notice's timer fires
#[component]
pub fn MessageBanner() -> impl IntoView {
    let panel = use_panel().host().panel;
    let slot = create_memo(move |_| panel.with(|state| state.notice.clone()));

    view! {
        <div id="message" class=move || slot.with(message_class)>
            {move || slot.with(|slot| slot.current().map(|n| n.text.clone()).unwrap_or_default())}
        </div>
    }
}

/// CSS classes for the message area
fn message_class(slot: &NoticeSlot) -> String {
    let kind = slot.current().map(|n| n.kind.css_class());

    match (kind, slot.is_visible()) {
        (Some(kind), true) => kind.to_string(),
        (Some(kind), false) => format!("{} hidden", kind),
        (None, _) => "hidden".to_string(),
    }
}
