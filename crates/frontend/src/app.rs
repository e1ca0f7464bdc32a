use crate::routes::routes::AppRoutes;
use crate::shared::query::QueryClient;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Capabilities are injected through context once, at the root. Every
    // controller receives them from here instead of reaching for a global.
    provide_context(QueryClient::new());
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
