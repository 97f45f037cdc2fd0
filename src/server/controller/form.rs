use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::ApiFailureDto,
        form::{format_megabytes, ContactRequestDto, SubmitFormResponseDto, UploadResponseDto},
    },
    server::{data, error::AppError, state::AppState},
};

/// Tag for grouping form endpoints in OpenAPI documentation
pub static FORM_TAG: &str = "form";

/// Multipart part that carries the uploaded file.
const FILE_PART: &str = "file";

/// Checks a contact request, returning the first failing field and its message.
///
/// Fields are checked in the order name, email, message.
pub fn contact_field_error(request: &ContactRequestDto) -> Option<(&'static str, &'static str)> {
    if request.name.chars().count() < 2 {
        return Some(("name", "Name must be at least 2 characters long"));
    }
    if !request.email.contains('@') {
        return Some(("email", "Please enter a valid email address"));
    }
    if request.message.chars().count() < 10 {
        return Some(("message", "Message must be at least 10 characters long"));
    }
    None
}

/// Submit the contact form.
///
/// A name containing "error" in any case triggers the server failure scenario.
///
/// # Returns
/// - `201 Created` - Submission receipt with a ticket id
/// - `422 Unprocessable Entity` - `VALIDATION_ERROR` naming one field
/// - `500 Internal Server Error` - `INTERNAL_SERVER_ERROR`
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = FORM_TAG,
    request_body = ContactRequestDto,
    responses(
        (status = 201, description = "Form submitted", body = SubmitFormResponseDto),
        (status = 422, description = "Validation failed", body = ApiFailureDto),
        (status = 500, description = "Simulated server failure", body = ApiFailureDto)
    ),
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    state.simulate_latency(2000).await;

    if let Some((field, message)) = contact_field_error(&request) {
        return Err(AppError::failure(
            StatusCode::UNPROCESSABLE_ENTITY,
            data::response::field_error(field, message),
        ));
    }

    if request.name.to_lowercase().contains("error") {
        return Err(AppError::failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            data::response::server_error(),
        ));
    }

    tracing::info!("Contact request received from {}", request.email);

    Ok((StatusCode::CREATED, Json(data::response::submit_form_success())))
}

/// Upload a file as the `file` part of a multipart form.
///
/// Parts other than `file`, and a `file` part without a file name, are ignored.
///
/// # Returns
/// - `200 OK` - Upload receipt with the file name and formatted size
/// - `400 Bad Request` - `NO_FILE`
/// - `413 Payload Too Large` - `FILE_TOO_LARGE`
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = FORM_TAG,
    responses(
        (status = 200, description = "File uploaded", body = UploadResponseDto),
        (status = 400, description = "No file provided", body = ApiFailureDto),
        (status = 413, description = "File too large", body = ApiFailureDto)
    ),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    state.simulate_latency(3000).await;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_PART) {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field.bytes().await?;
        upload = Some((file_name, bytes.len()));
    }

    let Some((file_name, size)) = upload else {
        return Err(AppError::failure(
            StatusCode::BAD_REQUEST,
            data::response::no_file_error(),
        ));
    };

    let limit = state.config.upload_limit_bytes;
    if size > limit {
        return Err(AppError::failure(
            StatusCode::PAYLOAD_TOO_LARGE,
            data::response::file_too_large_error(limit, size),
        ));
    }

    tracing::info!("Received upload {} ({} bytes)", file_name, size);

    Ok(Json(data::response::upload_success(
        &file_name,
        format_megabytes(size),
    )))
}
