//! Placeholder rendered instead of a list when there is nothing to show.

use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn EmptyScreen(
    /// Symbolic icon name from `shared::icons`.
    icon_name: &'static str,
    headline: &'static str,
    description: &'static str,
    /// Call-to-action rendered below the description.
    #[prop(optional, into)]
    cta: ViewFn,
) -> impl IntoView {
    view! {
        <div class="empty-screen">
            <div class="empty-screen__icon">{icon(icon_name)}</div>
            <h2 class="empty-screen__headline">{headline}</h2>
            <p class="empty-screen__description">{description}</p>
            <div class="empty-screen__cta">{cta.run()}</div>
        </div>
    }
}
