//! Activity List Component
//!
//! Cards for every activity with availability and a removable roster.

use leptos::*;

use mergington_activities::{ActivityCard, ListView, ParticipantRow};

use crate::components::Loading;
use crate::state::use_panel;

/// The `#activities-list` area
#[component]
pub fn ActivityList() -> impl IntoView {
    let panel = use_panel().host().panel;
    let list = create_memo(move |_| panel.with(|state| state.list.clone()));

    view! {
        <div id="activities-list">
            {move || match list.get() {
                ListView::Loading => view! { <Loading /> }.into_view(),
                ListView::Failed(text) => view! { <p>{text}</p> }.into_view(),
                ListView::Ready(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCardView card=card /> })
                    .collect_view(),
            }}
        </div>
    }
}

#[component]
fn ActivityCardView(card: ActivityCard) -> impl IntoView {
    let availability = card.availability_label();
    let heading = card.roster_heading();

    let roster = if card.participants.is_empty() {
        view! { <li class="no-participants">"No participants yet"</li> }.into_view()
    } else {
        card.participants
            .into_iter()
            .map(|row| view! { <ParticipantItem row=row /> })
            .collect_view()
    };

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p><strong>"Schedule:"</strong>" "{card.schedule}</p>
            <p><strong>"Availability:"</strong>" "{availability}</p>
            <h5>{heading}</h5>
            <ul class="participants-list">{roster}</ul>
        </div>
    }
}

/// One roster row. The click handler belongs to this row's scope and is
/// released with it when the list is redrawn.
#[component]
fn ParticipantItem(row: ParticipantRow) -> impl IntoView {
    let controller = use_panel();
    let target = row.removal.clone();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        let target = target.clone();
        spawn_local(async move {
            controller
                .remove_participant(&target.activity, &target.email)
                .await;
        });
    };

    view! {
        <li>
            <span>{row.email}</span>
            <button
                class="delete-btn"
                data-activity=row.removal.activity
                data-email=row.removal.email
                title="Remove participant"
                on:click=on_click
            >
                "×"
            </button>
        </li>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::state::provide_panel_controller;
    use mergington_activities::{Activity, ActivityBoard, PanelHost};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_list(activities: Vec<Activity>) -> web_sys::HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let parent: web_sys::HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&parent).unwrap();

        mount_to(parent.clone(), move || {
            let controller = provide_panel_controller();
            let board = ActivityBoard::new(activities);
            controller.host().update_panel(|state| {
                state.list = ListView::Ready(board.cards());
                state.options = board.names();
            });
            view! { <ActivityList /> }
        });

        parent
    }

    #[wasm_bindgen_test]
    fn renders_markup_email_as_text() {
        let parent = mount_list(vec![Activity {
            name: "Drama".to_string(),
            description: "Acting".to_string(),
            schedule: "Wed".to_string(),
            max_participants: 3,
            participants: vec!["<script>x</script>@y.com".to_string()],
        }]);

        assert!(parent.query_selector("script").unwrap().is_none());
        let text = parent.text_content().unwrap_or_default();
        assert!(text.contains("<script>x</script>@y.com"));
        assert!(text.contains("2 spots left"));

        let button = parent.query_selector(".delete-btn").unwrap().unwrap();
        assert_eq!(button.get_attribute("data-activity").as_deref(), Some("Drama"));
        assert_eq!(
            button.get_attribute("data-email").as_deref(),
            Some("<script>x</script>@y.com")
        );
    }

    #[wasm_bindgen_test]
    fn renders_placeholder_row_for_empty_roster() {
        let parent = mount_list(vec![Activity {
            name: "Chess Club".to_string(),
            description: "d".to_string(),
            schedule: "Mon".to_string(),
            max_participants: 5,
            participants: vec![],
        }]);

        let empty = parent.query_selector(".no-participants").unwrap().unwrap();
        assert_eq!(empty.text_content().as_deref(), Some("No participants yet"));
        assert!(parent.query_selector(".delete-btn").unwrap().is_none());
    }
}
