//! Standard page chrome: heading row plus content area.

use leptos::prelude::*;

use crate::shared::components::page_header::PageHeader;

#[component]
pub fn Shell(
    #[prop(into)] heading: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Right-aligned call-to-action area of the heading row.
    #[prop(optional, into)]
    cta: ViewFn,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="shell">
            <PageHeader title=heading subtitle=subtitle>
                {cta.run()}
            </PageHeader>
            <div class="shell__content">{children()}</div>
        </div>
    }
}
