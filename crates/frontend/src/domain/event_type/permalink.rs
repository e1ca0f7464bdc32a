//! Public booking-page link for an event type.

use contracts::domain::event_type::EventTypeSummary;

/// Origin of the public booking site: the host the app is served from.
/// Returns an empty string when no window is available.
pub fn booking_origin() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, hostname)
}

/// Path of the public booking page: `/team/<team-slug>/<event-slug>` for a
/// team event type, `/<owner-username>/<event-slug>` otherwise.
///
/// Panics on a personal event type with no owner usernames: such a
/// snapshot cannot produce a bookable link, and a loud failure beats a
/// quietly broken one.
pub fn booking_path(event_type: &EventTypeSummary) -> String {
    match (&event_type.team_slug, event_type.owner_usernames.first()) {
        (Some(team), _) => format!("/team/{}/{}", team, event_type.slug),
        (None, Some(owner)) => format!("/{}/{}", owner, event_type.slug),
        (None, None) => panic!("event type {} has neither team nor owner", event_type.id),
    }
}

/// Absolute public booking link.
pub fn booking_permalink(event_type: &EventTypeSummary) -> String {
    format!("{}{}", booking_origin(), booking_path(event_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::event_type::SchedulingType;

    fn summary(owners: &[&str], team_slug: Option<&str>) -> EventTypeSummary {
        EventTypeSummary {
            id: 9,
            title: "Intro call".to_string(),
            description: None,
            slug: "intro-call".to_string(),
            duration_minutes: 30,
            scheduling_type: SchedulingType::Individual,
            owner_usernames: owners.iter().map(|s| s.to_string()).collect(),
            team_slug: team_slug.map(str::to_string),
            hidden: false,
        }
    }

    #[test]
    fn team_events_link_through_the_team_segment() {
        let path = booking_path(&summary(&["alice"], Some("support")));
        assert_eq!(path, "/team/support/intro-call");
    }

    #[test]
    fn personal_events_link_through_the_first_owner() {
        let path = booking_path(&summary(&["alice", "bob"], None));
        assert_eq!(path, "/alice/intro-call");
    }

    #[test]
    #[should_panic(expected = "neither team nor owner")]
    fn ownerless_personal_events_are_rejected() {
        booking_path(&summary(&[], None));
    }
}
