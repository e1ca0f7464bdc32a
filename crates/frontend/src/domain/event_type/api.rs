//! HTTP calls for event types.

use contracts::domain::event_type::EventTypeSetup;

use crate::shared::http::{self, ApiError};

/// Fetch the detail-page payload for one event type.
pub async fn fetch_event_type(id: i64) -> Result<EventTypeSetup, ApiError> {
    http::get_json(&format!("/api/event-types/{id}")).await
}

/// Delete one event type.
pub async fn delete_event_type(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/event-types/{id}")).await
}
