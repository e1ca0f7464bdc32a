//! Pulsing placeholder rows shown while a list query is in flight.

use leptos::prelude::*;

#[component]
pub fn SkeletonList(#[prop(default = 3)] rows: usize) -> impl IntoView {
    view! {
        <ul class="skeleton-list" aria-hidden="true">
            {(0..rows).map(|_| view! {
                <li class="skeleton-list__row">
                    <div class="skeleton-list__bar skeleton-list__bar--wide"></div>
                    <div class="skeleton-list__bar skeleton-list__bar--narrow"></div>
                </li>
            }).collect_view()}
        </ul>
    }
}
