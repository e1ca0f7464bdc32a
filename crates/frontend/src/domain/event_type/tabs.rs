//! Navigation-tab registry for the event-type detail page.
//!
//! The registry is derived data: rebuilt from the entity snapshot whenever
//! the inputs change, never patched in place. Rendering lives in
//! `ui::tab_bar`.

use contracts::domain::event_type::{EventTypeSummary, SchedulingType};

/// One navigation destination of the event-type detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDescriptor {
    pub label: &'static str,
    /// Value of the `tabName` query parameter selecting this tab.
    pub route_key: &'static str,
    /// Symbolic icon name resolved by `shared::icons`.
    pub icon: &'static str,
    pub subtitle: String,
}

/// Build the ordered tab list for one event type.
///
/// Base order is fixed: setup, availability, limits, advanced, recurring,
/// apps, workflows. Team event types get a team-scheduling tab at index 2.
///
/// Panics when `has_team` is set but the event type carries an
/// `Individual` scheduling type: a team event type without a team
/// scheduling mode is a malformed snapshot, and a loud failure beats a
/// mislabeled tab.
pub fn build_tabs(
    event_type: &EventTypeSummary,
    enabled_app_count: usize,
    enabled_workflow_count: usize,
    has_team: bool,
) -> Vec<TabDescriptor> {
    let team_tab = has_team.then(|| TabDescriptor {
        label: "Scheduling type",
        route_key: "team",
        icon: "users",
        subtitle: match event_type.scheduling_type {
            SchedulingType::Collective => "collective".to_string(),
            SchedulingType::RoundRobin => "round_robin".to_string(),
            SchedulingType::Individual => panic!(
                "event type {} is team-scoped but has INDIVIDUAL scheduling",
                event_type.id
            ),
        },
    });

    [
        Some(TabDescriptor {
            label: "Event setup",
            route_key: "setup",
            icon: "link",
            subtitle: format!("{} mins", event_type.duration_minutes),
        }),
        Some(TabDescriptor {
            label: "Availability",
            route_key: "availability",
            icon: "calendar",
            subtitle: "Working hours".to_string(),
        }),
        team_tab,
        Some(TabDescriptor {
            label: "Limits",
            route_key: "limits",
            icon: "clock",
            subtitle: "How often you can be booked".to_string(),
        }),
        Some(TabDescriptor {
            label: "Advanced",
            route_key: "advanced",
            icon: "sliders",
            subtitle: "Event name, booking questions".to_string(),
        }),
        Some(TabDescriptor {
            label: "Recurring",
            route_key: "recurring",
            icon: "repeat",
            subtitle: "Repeating bookings".to_string(),
        }),
        Some(TabDescriptor {
            label: "Apps",
            route_key: "apps",
            icon: "grid",
            subtitle: format!("{enabled_app_count} active"),
        }),
        Some(TabDescriptor {
            label: "Workflows",
            route_key: "workflows",
            icon: "zap",
            subtitle: format!("{enabled_workflow_count} active"),
        }),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(scheduling_type: SchedulingType, team_slug: Option<&str>) -> EventTypeSummary {
        EventTypeSummary {
            id: 1,
            title: "Quick chat".to_string(),
            description: None,
            slug: "quick-chat".to_string(),
            duration_minutes: 15,
            scheduling_type,
            owner_usernames: vec!["pro".to_string()],
            team_slug: team_slug.map(str::to_string),
            hidden: false,
        }
    }

    #[test]
    fn personal_event_type_lists_base_tabs_in_fixed_order() {
        let tabs = build_tabs(&summary(SchedulingType::Individual, None), 2, 1, false);

        let keys: Vec<&str> = tabs.iter().map(|tab| tab.route_key).collect();
        assert_eq!(
            keys,
            vec!["setup", "availability", "limits", "advanced", "recurring", "apps", "workflows"]
        );
        assert_eq!(tabs.len(), 7);
    }

    #[test]
    fn team_event_type_inserts_the_team_tab_at_index_2() {
        for counts in [(0, 0), (5, 9)] {
            let tabs = build_tabs(
                &summary(SchedulingType::Collective, Some("support")),
                counts.0,
                counts.1,
                true,
            );
            assert_eq!(tabs.len(), 8);
            assert_eq!(tabs[2].route_key, "team");
        }
    }

    #[test]
    fn team_tab_subtitle_follows_the_scheduling_type() {
        let collective = build_tabs(
            &summary(SchedulingType::Collective, Some("support")),
            0,
            0,
            true,
        );
        assert_eq!(collective[2].subtitle, "collective");

        let round_robin = build_tabs(
            &summary(SchedulingType::RoundRobin, Some("support")),
            0,
            0,
            true,
        );
        assert_eq!(round_robin[2].subtitle, "round_robin");
    }

    #[test]
    #[should_panic(expected = "INDIVIDUAL scheduling")]
    fn team_event_type_with_individual_scheduling_is_rejected() {
        build_tabs(&summary(SchedulingType::Individual, Some("support")), 0, 0, true);
    }

    #[test]
    fn subtitles_carry_duration_and_counts() {
        let tabs = build_tabs(&summary(SchedulingType::Individual, None), 3, 1, false);
        assert_eq!(tabs[0].subtitle, "15 mins");
        assert_eq!(tabs[5].subtitle, "3 active");
        assert_eq!(tabs[6].subtitle, "1 active");
    }
}
