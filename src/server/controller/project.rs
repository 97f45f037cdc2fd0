use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ApiFailureDto,
        project::{ArchiveProjectResponseDto, ProjectDto},
    },
    server::{data, error::AppError, state::AppState},
};

/// Tag for grouping project endpoints in OpenAPI documentation
pub static PROJECT_TAG: &str = "project";

/// List all projects.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = PROJECT_TAG,
    responses(
        (status = 200, description = "All projects", body = Vec<ProjectDto>)
    ),
)]
pub async fn get_projects(State(state): State<AppState>) -> impl IntoResponse {
    state.simulate_latency(600).await;

    Json(data::project::get_all())
}

/// Archive a project.
///
/// An active project with members has dependencies and is refused. Unknown
/// ids are archived like any other.
///
/// # Returns
/// - `200 OK` - Archive receipt
/// - `400 Bad Request` - `PROJECT_HAS_DEPENDENCIES`
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = String, Path, description = "Project id")
    ),
    responses(
        (status = 200, description = "Project archived", body = ArchiveProjectResponseDto),
        (status = 400, description = "Project has dependencies", body = ApiFailureDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.simulate_latency(1200).await;

    let blocked = data::project::find_by_id(&id).is_some_and(|project| project.has_dependencies());
    if blocked {
        return Err(AppError::failure(
            StatusCode::BAD_REQUEST,
            data::response::archive_project_error(),
        ));
    }

    Ok(Json(data::response::archive_project_success()))
}
