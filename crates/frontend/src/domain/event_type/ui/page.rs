//! Event-type detail page: loads the setup payload and routes the active
//! tab to its content panel.

use contracts::domain::event_type::EventTypeSetup;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_params_map};
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::layout::EventTypeSingleLayout;
use crate::domain::event_type::api;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::routing::{parse_query, TAB_PARAM};

#[component]
pub fn EventTypePage() -> impl IntoView {
    let params = use_params_map();
    let (setup, set_setup) = signal::<Option<EventTypeSetup>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    // Re-runs when the :id route parameter changes.
    Effect::new(move |_| {
        let Some(id) = params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
        else {
            set_error.set(Some("Invalid event type id".to_string()));
            return;
        };
        spawn_local(async move {
            match api::fetch_event_type(id).await {
                Ok(payload) => {
                    set_setup.set(Some(payload));
                    set_error.set(None);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    });

    let search = use_location().search;

    view! {
        <PageFrame page_id="event_type--detail" category=PAGE_CAT_DETAIL>
            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}
            <Show
                when=move || setup.get().is_some()
                fallback=|| view! { <div class="page__loading"><Spinner /></div> }
            >
                {move || setup.get().map(|payload| view! {
                    <EventTypeSingleLayout setup=payload>
                        {move || {
                            let tab = parse_query(&search.get())
                                .get(TAB_PARAM)
                                .cloned()
                                .unwrap_or_default();
                            tab_panel(&tab)
                        }}
                    </EventTypeSingleLayout>
                }.into_any())}
            </Show>
        </PageFrame>
    }
}

/// Placeholder panel per tab; the tab forms themselves are separate
/// features and mount here.
fn tab_panel(route_key: &str) -> AnyView {
    let (heading, copy) = match route_key {
        "setup" => (
            "Event setup",
            "Title, description, duration and URL of this event type.",
        ),
        "availability" => (
            "Availability",
            "Which schedule limits when this event can be booked.",
        ),
        "team" => (
            "Scheduling type",
            "How bookings are distributed across the team.",
        ),
        "limits" => (
            "Limits",
            "Buffers, notice periods and booking frequency caps.",
        ),
        "advanced" => ("Advanced", "Event name template and booking questions."),
        "recurring" => ("Recurring", "Repeating bookings for this event type."),
        "apps" => ("Apps", "Apps enabled for this event type."),
        "workflows" => ("Workflows", "Automated reminders and follow-ups."),
        _ => ("Unknown tab", "This tab does not exist."),
    };
    view! {
        <section class="tab-panel">
            <h2 class="tab-panel__heading">{heading}</h2>
            <p class="tab-panel__copy">{copy}</p>
        </section>
    }
    .into_any()
}
