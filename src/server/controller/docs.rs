use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ApiFailureDto, ErrorDto},
        form::{ContactRequestDto, SubmitFormResponseDto, UploadResponseDto},
        notification::{NotificationDto, NotificationKind, NotificationReadDto},
        project::{ArchiveProjectResponseDto, ProjectDto, ProjectStatus},
        user::{
            DeleteUserResponseDto, SaveUserResponseDto, UpdateUserDto, UpdatedUserDto, UserDto,
            UserRole, UserStatus,
        },
    },
    server::controller::{form, legacy, notification, project, simulate, user},
};

/// OpenAPI document for every mock API route.
#[derive(OpenApi)]
#[openapi(
    info(title = "Modal System Mock API", description = "Fixture-backed REST surface for the modal showcase"),
    paths(
        user::get_users,
        user::get_user,
        user::delete_user,
        user::update_user,
        project::get_projects,
        project::delete_project,
        notification::get_notifications,
        notification::mark_notification_read,
        form::submit_contact,
        form::upload_file,
        simulate::network_error,
        simulate::server_error,
        legacy::get_current_user,
        legacy::submit,
        legacy::delete_item,
    ),
    components(schemas(
        ErrorDto,
        ApiFailureDto,
        UserDto,
        UserRole,
        UserStatus,
        UpdateUserDto,
        UpdatedUserDto,
        SaveUserResponseDto,
        DeleteUserResponseDto,
        ProjectDto,
        ProjectStatus,
        ArchiveProjectResponseDto,
        NotificationDto,
        NotificationKind,
        NotificationReadDto,
        ContactRequestDto,
        SubmitFormResponseDto,
        UploadResponseDto,
    )),
    tags(
        (name = "user", description = "User management"),
        (name = "project", description = "Project archiving"),
        (name = "notification", description = "Notifications"),
        (name = "form", description = "Form submission and file upload"),
        (name = "simulate", description = "Failure simulation"),
        (name = "legacy", description = "Legacy endpoints"),
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON.
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
