use crate::{
    client::{
        api::helper::{get, parse_response, patch, send_request},
        model::error::ApiError,
    },
    model::notification::{NotificationDto, NotificationReadDto},
};

pub async fn get_notifications() -> Result<Vec<NotificationDto>, ApiError> {
    let request = get("/api/notifications");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn mark_notification_read(id: &str) -> Result<NotificationReadDto, ApiError> {
    let url = format!("/api/notifications/{}/read", id);
    let request = patch(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}
