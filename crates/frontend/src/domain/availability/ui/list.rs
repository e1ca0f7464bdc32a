//! Availability schedules list page.

use contracts::domain::schedule::ScheduleSummary;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::availability::api;
use crate::layout::shell::Shell;
use crate::shared::components::dropdown::{Dropdown, DropdownItem};
use crate::shared::components::empty_screen::EmptyScreen;
use crate::shared::components::skeleton::SkeletonList;
use crate::shared::confirm_dialog::ConfirmationDialog;
use crate::shared::delete_controller::DeleteController;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query::{use_query_client, QueryKey};
use crate::shared::toast::use_toasts;

/// Row projection of a schedule; ordering follows the server payload.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScheduleRow {
    id: i64,
    name: String,
    is_default: bool,
    timezone_label: String,
}

impl From<ScheduleSummary> for ScheduleRow {
    fn from(schedule: ScheduleSummary) -> Self {
        Self {
            id: schedule.id,
            name: schedule.name,
            is_default: schedule.is_default,
            timezone_label: schedule.timezone_label,
        }
    }
}

fn schedule_rows(schedules: &[ScheduleSummary]) -> Vec<ScheduleRow> {
    schedules.iter().cloned().map(Into::into).collect()
}

#[component]
pub fn AvailabilityPage() -> impl IntoView {
    let cache = use_query_client();
    let toasts = use_toasts();
    // `None` while the first load is in flight; drives the skeleton.
    let (schedules, set_schedules) = signal::<Option<Vec<ScheduleRow>>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    // Initial fetch, re-run whenever the schedule list query goes stale.
    Effect::new(move |_| {
        let _ = cache.version(QueryKey::Schedules);
        spawn_local(async move {
            match api::fetch_schedules().await {
                Ok(items) => {
                    set_schedules.set(Some(schedule_rows(&items)));
                    set_error.set(None);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    });

    let delete = DeleteController::new(
        None,
        cache,
        toasts,
        QueryKey::Schedules,
        "Schedule deleted successfully",
        api::delete_schedule,
    );
    let deleting = delete.deleting();

    let empty_view = || {
        view! {
            <EmptyScreen
                icon_name="clock"
                headline="Create an availability schedule"
                description="Availability schedules define when you can be booked and can be applied to one or more event types."
                cta=ViewFn::from(|| view! { <NewScheduleButton /> }.into_any())
            />
        }
        .into_any()
    };

    let rows_view = {
        let delete = delete.clone();
        move |rows: Vec<ScheduleRow>| {
            let delete = delete.clone();
            view! {
                <ul class="schedule-list" data-testid="schedules">
                    <For
                        each=move || rows.clone()
                        key=|row| row.id
                        children=move |row| {
                            let delete = delete.clone();
                            let row_id = row.id;
                            let is_default = row.is_default;
                            view! {
                                <li class="schedule-list__row">
                                    <div class="schedule-list__info">
                                        <div class="schedule-list__name">
                                            <span>{row.name}</span>
                                            <Show when=move || is_default>
                                                <Badge
                                                    appearance=BadgeAppearance::Tint
                                                    color=BadgeColor::Success
                                                >
                                                    "Default"
                                                </Badge>
                                            </Show>
                                        </div>
                                        <div class="schedule-list__timezone">
                                            {icon("globe")}
                                            <span>{row.timezone_label}</span>
                                        </div>
                                    </div>
                                    <Dropdown
                                        trigger=ViewFn::from(|| icon("more-horizontal"))
                                        trigger_label="Schedule options"
                                    >
                                        <DropdownItem
                                            start_icon="trash-2"
                                            destructive=true
                                            disabled=deleting
                                            on_select=Callback::new({
                                                let delete = delete.clone();
                                                move |_| delete.request_delete(row_id)
                                            })
                                        >
                                            "Delete"
                                        </DropdownItem>
                                    </Dropdown>
                                </li>
                            }
                        }
                    />
                </ul>
            }
            .into_any()
        }
    };

    view! {
        <PageFrame page_id="availability--list" category=PAGE_CAT_LIST>
            <Shell
                heading="Availability"
                subtitle="Configure times when you are available for bookings.".to_string()
                cta=ViewFn::from(|| view! { <NewScheduleButton /> }.into_any())
            >
                {move || error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
                })}
                {move || match schedules.get() {
                    None => view! { <SkeletonList rows=3 /> }.into_any(),
                    Some(rows) if rows.is_empty() => empty_view(),
                    Some(rows) => rows_view(rows),
                }}
            </Shell>
            <ConfirmationDialog
                open=delete.dialog_open()
                loading=delete.deleting()
                title="Delete schedule"
                description="Deleting a schedule removes it from every event type it is applied to."
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
        </PageFrame>
    }
}

/// Creates a schedule with the default name and refreshes the list.
#[component]
fn NewScheduleButton() -> impl IntoView {
    let cache = use_query_client();
    let toasts = use_toasts();
    let creating = RwSignal::new(false);

    let create = move |_| {
        if creating.get_untracked() {
            return;
        }
        creating.set(true);
        spawn_local(async move {
            match api::create_schedule("Working hours").await {
                Ok(_) => {
                    cache.invalidate(QueryKey::Schedules);
                    toasts.success("Schedule created");
                }
                Err(err) => toasts.error(err.to_string()),
            }
            creating.set(false);
        });
    };

    view! {
        <Button
            appearance=ButtonAppearance::Primary
            disabled=Signal::from(creating)
            on_click=create
        >
            {icon("plus")}
            " New schedule"
        </Button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i64, name: &str) -> ScheduleSummary {
        ScheduleSummary {
            id,
            name: name.to_string(),
            is_default: id == 1,
            timezone_label: "Europe/Berlin".to_string(),
        }
    }

    #[test]
    fn rows_preserve_input_order() {
        let rows = schedule_rows(&[summary(3, "Late"), summary(1, "Default"), summary(2, "Early")]);

        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(rows[1].name, "Default");
        assert!(rows[1].is_default);
    }

    #[test]
    fn empty_payload_builds_no_rows() {
        assert!(schedule_rows(&[]).is_empty());
    }
}
