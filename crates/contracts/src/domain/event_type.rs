use serde::{Deserialize, Serialize};

use crate::domain::membership::MembershipRole;

// ============================================================================
// Scheduling type
// ============================================================================

/// How a bookable event type distributes its slots among hosts.
///
/// `Individual` is the implicit type of a personal (non-team) event type;
/// team event types are either `Collective` or `RoundRobin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchedulingType {
    Collective,
    RoundRobin,
    Individual,
}

// ============================================================================
// Event type summary
// ============================================================================

/// Read-only snapshot of an event type as delivered by the server.
///
/// The front end never mutates this; edits go through dedicated mutations
/// and come back as a fresh snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub slug: String,
    pub duration_minutes: u32,
    pub scheduling_type: SchedulingType,
    /// Usernames of the owning users, in display order. For a personal
    /// event type the first entry is the booking-page owner.
    #[serde(default)]
    pub owner_usernames: Vec<String>,
    /// Present when the event type belongs to a team.
    #[serde(default)]
    pub team_slug: Option<String>,
    /// Hidden from the owner's public booking profile.
    #[serde(default)]
    pub hidden: bool,
}

impl EventTypeSummary {
    pub fn is_team_event(&self) -> bool {
        self.team_slug.is_some()
    }
}

// ============================================================================
// Detail-page payload
// ============================================================================

/// Everything the event-type detail page needs in one payload: the entity
/// snapshot plus page-level context that is not part of the entity itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeSetup {
    pub event_type: EventTypeSummary,
    #[serde(default)]
    pub enabled_app_count: usize,
    #[serde(default)]
    pub enabled_workflow_count: usize,
    /// The acting user's role in the owning team; absent outside teams.
    #[serde(default)]
    pub current_user_membership: Option<MembershipRole>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduling_type_uses_wire_tags() {
        assert_eq!(
            serde_json::to_string(&SchedulingType::RoundRobin).unwrap(),
            "\"ROUND_ROBIN\""
        );
        let parsed: SchedulingType = serde_json::from_str("\"COLLECTIVE\"").unwrap();
        assert_eq!(parsed, SchedulingType::Collective);
    }

    #[test]
    fn summary_parses_camel_case_payload() {
        let payload = r#"{
            "id": 42,
            "title": "Quick chat",
            "slug": "quick-chat",
            "durationMinutes": 30,
            "schedulingType": "INDIVIDUAL",
            "ownerUsernames": ["pro"]
        }"#;
        let summary: EventTypeSummary = serde_json::from_str(payload).unwrap();
        assert_eq!(summary.duration_minutes, 30);
        assert_eq!(summary.owner_usernames, vec!["pro".to_string()]);
        assert!(summary.team_slug.is_none());
        assert!(!summary.hidden);
    }
}
