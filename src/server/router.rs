use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config,
    controller::{docs, form, legacy, notification, project, simulate, user},
    state::AppState,
};

/// Builds the mock API routes.
///
/// The body limit leaves headroom above the upload limit so oversized files
/// still reach the handler and get the structured 413 body.
pub fn router(config: &Config) -> Router<AppState> {
    let body_limit = config.upload_limit_bytes.saturating_mul(2).max(1024 * 1024);

    Router::new()
        .route("/api/users", get(user::get_users))
        .route(
            "/api/users/{id}",
            get(user::get_user)
                .delete(user::delete_user)
                .patch(user::update_user),
        )
        .route("/api/projects", get(project::get_projects))
        .route("/api/projects/{id}", delete(project::delete_project))
        .route("/api/notifications", get(notification::get_notifications))
        .route(
            "/api/notifications/{id}/read",
            patch(notification::mark_notification_read),
        )
        .route("/api/contact", post(form::submit_contact))
        .route("/api/upload", post(form::upload_file))
        .route("/api/network-error", post(simulate::network_error))
        .route("/api/server-error", post(simulate::server_error))
        .route("/api/user", get(legacy::get_current_user))
        .route("/api/submit", post(legacy::submit))
        .route("/api/items/{id}", delete(legacy::delete_item))
        .route("/api/openapi.json", get(docs::openapi))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
}
