//! Dropdown menu primitive: a trigger button plus a floating item list.
//!
//! The menu closes on item activation and on any click outside of it (a
//! backdrop element catches the outside click, so no document-level
//! listener is needed).

use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn Dropdown(
    /// Renders the trigger content inside the toggle button.
    #[prop(into)]
    trigger: ViewFn,
    /// Accessible name of the trigger button.
    #[prop(default = "Open menu")]
    trigger_label: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let is_open = RwSignal::new(false);

    view! {
        <div class="dropdown">
            <button
                type="button"
                class="dropdown__trigger"
                class:dropdown__trigger--open=move || is_open.get()
                aria-haspopup="menu"
                aria-expanded=move || is_open.get().to_string()
                aria-label=trigger_label
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                {trigger.run()}
            </button>
            <Show when=move || is_open.get()>
                <div class="dropdown__backdrop" on:click=move |_| is_open.set(false)></div>
                // Clicks on items bubble up here and close the menu.
                <div class="dropdown__menu" role="menu" on:click=move |_| is_open.set(false)>
                    {children()}
                </div>
            </Show>
        </div>
    }
}

/// Single dropdown entry. Renders as a link when `href` is given, as a
/// button otherwise; disabled entries emit no click, so the menu stays
/// open when one is pressed.
#[component]
pub fn DropdownItem(
    #[prop(optional)] start_icon: Option<&'static str>,
    /// Render in the destructive color.
    #[prop(optional)] destructive: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
    /// External link target; opens in a new tab.
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional, into)] on_select: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = if destructive {
        "dropdown__item dropdown__item--destructive"
    } else {
        "dropdown__item"
    };

    match href {
        Some(href) => view! {
            <a
                class=class
                role="menuitem"
                href=href
                target="_blank"
                rel="noreferrer"
            >
                {start_icon.map(icon)}
                <span class="dropdown__item-label">{children()}</span>
            </a>
        }
        .into_any(),
        None => view! {
            <button
                type="button"
                class=class
                role="menuitem"
                disabled=move || disabled.get()
                on:click=move |_| {
                    if let Some(on_select) = on_select {
                        on_select.run(());
                    }
                }
            >
                {start_icon.map(icon)}
                <span class="dropdown__item-label">{children()}</span>
            </button>
        }
        .into_any(),
    }
}
