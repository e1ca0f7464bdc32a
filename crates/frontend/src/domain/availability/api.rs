//! HTTP calls for availability schedules.

use contracts::domain::schedule::{CreateScheduleRequest, ScheduleSummary};

use crate::shared::http::{self, ApiError};

/// Fetch all schedules of the acting user.
pub async fn fetch_schedules() -> Result<Vec<ScheduleSummary>, ApiError> {
    http::get_json("/api/schedules").await
}

/// Create a schedule and return the stored snapshot.
pub async fn create_schedule(name: &str) -> Result<ScheduleSummary, ApiError> {
    http::post_json(
        "/api/schedules",
        &CreateScheduleRequest {
            name: name.to_string(),
        },
    )
    .await
}

/// Delete one schedule.
pub async fn delete_schedule(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/schedules/{id}")).await
}
