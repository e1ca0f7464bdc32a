//! Tab bars for the event-type detail page: a vertical rail on wide
//! screens, a horizontal strip on narrow ones.
//!
//! Tabs are plain links: the router turns them into client-side
//! navigations, and the page derives the active tab from the URL.

use leptos::prelude::*;

use crate::domain::event_type::tabs::TabDescriptor;
use crate::shared::icons::icon;

#[component]
pub fn VerticalTabs(
    #[prop(into)] tabs: Signal<Vec<TabDescriptor>>,
    #[prop(into)] active: Signal<Option<String>>,
    /// Builds the href selecting a tab, preserving the rest of the query.
    #[prop(into)]
    href_for: Callback<&'static str, String>,
) -> impl IntoView {
    view! {
        <nav class="vertical-tabs" aria-label="Event type settings">
            <For
                each=move || tabs.get()
                key=|tab| tab.route_key
                children=move |tab| {
                    let route_key = tab.route_key;
                    view! {
                        <a
                            class="vertical-tabs__item"
                            class:vertical-tabs__item--active=move || {
                                active.get().as_deref() == Some(route_key)
                            }
                            href=move || href_for.run(route_key)
                        >
                            <span class="vertical-tabs__icon">{icon(tab.icon)}</span>
                            <span class="vertical-tabs__text">
                                <span class="vertical-tabs__label">{tab.label}</span>
                                <span class="vertical-tabs__subtitle">{tab.subtitle.clone()}</span>
                            </span>
                        </a>
                    }
                }
            />
        </nav>
    }
}

#[component]
pub fn HorizontalTabs(
    #[prop(into)] tabs: Signal<Vec<TabDescriptor>>,
    #[prop(into)] active: Signal<Option<String>>,
    #[prop(into)] href_for: Callback<&'static str, String>,
) -> impl IntoView {
    view! {
        <nav class="horizontal-tabs" aria-label="Event type settings">
            <For
                each=move || tabs.get()
                key=|tab| tab.route_key
                children=move |tab| {
                    let route_key = tab.route_key;
                    view! {
                        <a
                            class="horizontal-tabs__item"
                            class:horizontal-tabs__item--active=move || {
                                active.get().as_deref() == Some(route_key)
                            }
                            href=move || href_for.run(route_key)
                        >
                            {tab.label}
                        </a>
                    }
                }
            />
        </nav>
    }
}
