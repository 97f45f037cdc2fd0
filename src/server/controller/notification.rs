use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::notification::{NotificationDto, NotificationReadDto},
    server::{data, state::AppState},
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// List all notifications.
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "All notifications", body = Vec<NotificationDto>)
    ),
)]
pub async fn get_notifications(State(state): State<AppState>) -> impl IntoResponse {
    state.simulate_latency(400).await;

    Json(data::notification::get_all())
}

/// Mark a notification as read, stamped with the current time.
#[utoipa::path(
    patch,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = String, Path, description = "Notification id")
    ),
    responses(
        (status = 200, description = "Notification marked as read", body = NotificationReadDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    state.simulate_latency(300).await;

    Json(NotificationReadDto {
        id,
        read: true,
        read_at: Utc::now(),
    })
}
