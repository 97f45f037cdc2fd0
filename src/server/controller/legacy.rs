//! Older single-purpose endpoints. They answer immediately.

use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        form::SubmitFormResponseDto,
        user::{DeleteUserResponseDto, UserDto},
    },
    server::{data, error::AppError},
};

/// Tag for grouping legacy endpoints in OpenAPI documentation
pub static LEGACY_TAG: &str = "legacy";

/// The first fixture user.
#[utoipa::path(
    get,
    path = "/api/user",
    tag = LEGACY_TAG,
    responses(
        (status = 200, description = "The first user", body = UserDto)
    ),
)]
pub async fn get_current_user() -> Result<impl IntoResponse, AppError> {
    let user = data::user::get_all()
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/submit",
    tag = LEGACY_TAG,
    responses(
        (status = 201, description = "Form submitted", body = SubmitFormResponseDto)
    ),
)]
pub async fn submit() -> impl IntoResponse {
    (StatusCode::CREATED, Json(data::response::submit_form_success()))
}

#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    tag = LEGACY_TAG,
    params(
        ("id" = String, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item deleted", body = DeleteUserResponseDto)
    ),
)]
pub async fn delete_item(Path(_id): Path<String>) -> impl IntoResponse {
    Json(data::response::delete_user_success())
}
