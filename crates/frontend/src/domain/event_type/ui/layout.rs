//! Chrome of the event-type detail page: heading, call-to-action bar,
//! navigation tabs and the delete-confirmation flow.

use contracts::domain::event_type::EventTypeSetup;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use thaw::*;

use super::tab_bar::{HorizontalTabs, VerticalTabs};
use crate::domain::event_type::api;
use crate::domain::event_type::permalink::booking_permalink;
use crate::domain::event_type::tabs::build_tabs;
use crate::layout::shell::Shell;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::dropdown::{Dropdown, DropdownItem};
use crate::shared::confirm_dialog::ConfirmationDialog;
use crate::shared::delete_controller::DeleteController;
use crate::shared::icons::icon;
use crate::shared::query::{use_query_client, QueryKey};
use crate::shared::routing::{
    ensure_selected_tab, href_with_query, parse_query, with_param, TAB_PARAM,
};
use crate::shared::toast::use_toasts;

#[component]
pub fn EventTypeSingleLayout(setup: EventTypeSetup, children: Children) -> impl IntoView {
    let cache = use_query_client();
    let toasts = use_toasts();
    let location = use_location();
    let search = location.search;
    let pathname = location.pathname;

    let event_type = setup.event_type;
    let has_team = event_type.is_team_event();
    let tabs = RwSignal::new(build_tabs(
        &event_type,
        setup.enabled_app_count,
        setup.enabled_workflow_count,
        has_team,
    ));

    // The selected tab must be explicit in the URL. When the parameter is
    // missing, redirect once to the first registry entry, keeping the rest
    // of the query intact; once present, `ensure_selected_tab` returns
    // `None` and this effect issues no further navigation.
    let navigate = use_navigate();
    Effect::new(move |_| {
        let current = parse_query(&search.get());
        let Some(first) = tabs.with(|tabs| tabs.first().map(|tab| tab.route_key)) else {
            return;
        };
        if let Some(merged) = ensure_selected_tab(&current, first) {
            navigate(
                &href_with_query(&pathname.get_untracked(), &merged),
                NavigateOptions {
                    replace: true,
                    scroll: false,
                    ..Default::default()
                },
            );
        }
    });

    let active_tab = Memo::new(move |_| parse_query(&search.get()).get(TAB_PARAM).cloned());
    let href_for = Callback::new(move |route_key: &'static str| {
        let merged = with_param(&parse_query(&search.get()), TAB_PARAM, route_key);
        href_with_query(&pathname.get(), &merged)
    });

    let hidden = RwSignal::new(event_type.hidden);
    let permalink = booking_permalink(&event_type);
    let event_type_id = event_type.id;

    let delete = DeleteController::new(
        setup.current_user_membership,
        cache,
        toasts,
        QueryKey::EventTypes,
        "Event type deleted successfully",
        api::delete_event_type,
    );
    let delete_permitted = delete.permitted();
    let deleting = delete.deleting();
    let delete_disabled = Signal::derive(move || !delete_permitted || deleting.get());

    let cta = {
        let permalink = permalink.clone();
        let delete = delete.clone();
        move || {
            let copy_link = {
                let permalink = permalink.clone();
                move |_| {
                    copy_to_clipboard_with_callback(&permalink, move || {
                        toasts.success("Link copied");
                    });
                }
            };
            let request_delete = {
                let delete = delete.clone();
                move |_| delete.request_delete(event_type_id)
            };
            let copy_link_item = {
                let permalink = permalink.clone();
                Callback::new(move |_| {
                    copy_to_clipboard_with_callback(&permalink, move || {
                        toasts.success("Link copied");
                    });
                })
            };
            let request_delete_item = {
                let delete = delete.clone();
                Callback::new(move |_| delete.request_delete(event_type_id))
            };
            let preview_href = permalink.clone();
            let menu_preview_href = permalink.clone();

            view! {
                <div class="cta-bar">
                    <Switch checked=hidden label="Hide from profile" />
                    <div class="cta-bar__divider"></div>
                    // Wide screens: individual action buttons.
                    <div class="cta-bar__group">
                        <a
                            class="icon-button"
                            href=preview_href
                            target="_blank"
                            rel="noreferrer"
                            title="Preview"
                        >
                            {icon("external-link")}
                        </a>
                        <Button appearance=ButtonAppearance::Secondary on_click=copy_link>
                            {icon("link")}
                            " Copy link"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=delete_disabled
                            on_click=request_delete
                        >
                            {icon("trash-2")}
                            " Delete"
                        </Button>
                    </div>
                    // Narrow screens: the same actions behind one menu.
                    <div class="cta-bar__menu">
                        <Dropdown
                            trigger=ViewFn::from(|| icon("more-horizontal"))
                            trigger_label="More options"
                        >
                            <DropdownItem start_icon="external-link" href=menu_preview_href.clone()>
                                "Preview"
                            </DropdownItem>
                            <DropdownItem start_icon="link" on_select=copy_link_item>
                                "Copy link"
                            </DropdownItem>
                            <DropdownItem
                                start_icon="trash-2"
                                destructive=true
                                disabled=delete_disabled
                                on_select=request_delete_item
                            >
                                "Delete"
                            </DropdownItem>
                        </Dropdown>
                    </div>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <Shell
            heading=event_type.title.clone()
            subtitle=event_type.description.clone()
            cta=ViewFn::from(cta)
        >
            <div class="event-type-layout">
                <div class="event-type-layout__sidebar">
                    <VerticalTabs tabs=tabs active=active_tab href_for=href_for />
                </div>
                <div class="event-type-layout__strip">
                    <HorizontalTabs tabs=tabs active=active_tab href_for=href_for />
                </div>
                <div class="event-type-layout__content">{children()}</div>
            </div>
        </Shell>
        <ConfirmationDialog
            open=delete.dialog_open()
            loading=delete.deleting()
            title="Delete event type"
            description="Anyone who you've shared this link with will no longer be able to book using it."
            confirm_label="Yes, delete"
            loading_label="Deleting..."
            on_confirm={
                let delete = delete.clone();
                Callback::new(move |_| delete.confirm())
            }
            on_cancel={
                let delete = delete.clone();
                Callback::new(move |_| delete.dismiss())
            }
        />
    }
}
