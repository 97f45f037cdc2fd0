use axum::{extract::State, http::StatusCode};

use crate::{
    model::api::ApiFailureDto,
    server::{data, error::AppError, state::AppState},
};

/// Tag for grouping failure simulation endpoints in OpenAPI documentation
pub static SIMULATE_TAG: &str = "simulate";

/// Answer with a timeout after a long delay.
#[utoipa::path(
    post,
    path = "/api/network-error",
    tag = SIMULATE_TAG,
    responses(
        (status = 408, description = "Simulated network timeout", body = ApiFailureDto)
    ),
)]
pub async fn network_error(State(state): State<AppState>) -> AppError {
    state.simulate_latency(10_000).await;

    AppError::failure(StatusCode::REQUEST_TIMEOUT, data::response::network_error())
}

/// Answer with an internal server error.
#[utoipa::path(
    post,
    path = "/api/server-error",
    tag = SIMULATE_TAG,
    responses(
        (status = 500, description = "Simulated server failure", body = ApiFailureDto)
    ),
)]
pub async fn server_error(State(state): State<AppState>) -> AppError {
    state.simulate_latency(1000).await;

    AppError::failure(
        StatusCode::INTERNAL_SERVER_ERROR,
        data::response::server_error(),
    )
}
