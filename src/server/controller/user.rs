use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::{ApiFailureDto, ErrorDto},
        user::{DeleteUserResponseDto, SaveUserResponseDto, UpdateUserDto, UpdatedUserDto, UserDto},
    },
    server::{
        data::{self, user::ERROR_CASE_USER_ID},
        error::AppError,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
///
/// # Returns
/// - `200 OK` - Every fixture user
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> impl IntoResponse {
    state.simulate_latency(800).await;

    Json(data::user::get_all())
}

/// Get a single user by id.
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - No user has this id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.simulate_latency(500).await;

    let user = data::user::find_by_id(&id)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Delete a user.
///
/// The `error-case` user has active projects and is refused.
///
/// # Returns
/// - `200 OK` - Deletion receipt
/// - `400 Bad Request` - `USER_HAS_ACTIVE_PROJECTS`
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User deleted", body = DeleteUserResponseDto),
        (status = 400, description = "User has active projects", body = ApiFailureDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.simulate_latency(1500).await;

    if id == ERROR_CASE_USER_ID {
        return Err(AppError::failure(
            StatusCode::BAD_REQUEST,
            data::response::delete_user_error(),
        ));
    }

    tracing::info!("Deleted user {}", id);

    Ok(Json(data::response::delete_user_success()))
}

/// Update a user.
///
/// Both `name` and `email` must be present and non-empty. The response echoes
/// the id merged with the submitted keys.
///
/// # Returns
/// - `200 OK` - Save receipt with the merged user
/// - `422 Unprocessable Entity` - `VALIDATION_ERROR`
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User id")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Changes saved", body = SaveUserResponseDto),
        (status = 422, description = "Validation failed", body = ApiFailureDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(updates): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    state.simulate_latency(1000).await;

    let present = |value: &Option<String>| value.as_deref().is_some_and(|value| !value.is_empty());
    if !present(&updates.name) || !present(&updates.email) {
        return Err(AppError::failure(
            StatusCode::UNPROCESSABLE_ENTITY,
            data::response::save_error(),
        ));
    }

    Ok(Json(data::response::save_success(UpdatedUserDto { id, updates })))
}
