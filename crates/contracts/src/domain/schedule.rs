use serde::{Deserialize, Serialize};

/// Request body for creating a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateScheduleRequest {
    pub name: String,
}

/// Read-only snapshot of an availability schedule as delivered by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub id: i64,
    pub name: String,
    /// The schedule new event types fall back to.
    #[serde(default)]
    pub is_default: bool,
    /// Human-readable timezone, e.g. "Europe/Berlin".
    pub timezone_label: String,
}
