use crate::domain::availability::ui::AvailabilityPage;
use crate::domain::event_type::ui::EventTypePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=AvailabilityPage />
                <Route path=path!("/availability") view=AvailabilityPage />
                <Route path=path!("/event-types/:id") view=EventTypePage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <div class="placeholder">"Page not found"</div> }
}
