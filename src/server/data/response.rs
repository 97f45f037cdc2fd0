//! Canned success and failure bodies.

use std::collections::HashMap;

use serde_json::json;

use crate::model::{
    api::ApiFailureDto,
    form::{format_megabytes, SubmitFormResponseDto, UploadResponseDto},
    project::ArchiveProjectResponseDto,
    user::{DeleteUserResponseDto, SaveUserResponseDto, UpdatedUserDto},
};

use super::{at, REFERENCE_TIMESTAMP};

const MEGABYTE: usize = 1024 * 1024;

pub fn delete_user_success() -> DeleteUserResponseDto {
    DeleteUserResponseDto {
        message: "User deleted successfully".to_string(),
        deleted_at: at(REFERENCE_TIMESTAMP),
        user_id: "1".to_string(),
    }
}

pub fn archive_project_success() -> ArchiveProjectResponseDto {
    ArchiveProjectResponseDto {
        message: "Project archived successfully".to_string(),
        archived_at: at(REFERENCE_TIMESTAMP),
        project_id: "1".to_string(),
    }
}

pub fn save_success(user: UpdatedUserDto) -> SaveUserResponseDto {
    SaveUserResponseDto {
        message: "Changes saved successfully".to_string(),
        saved_at: at(REFERENCE_TIMESTAMP),
        version: "1.2.3".to_string(),
        user,
    }
}

pub fn submit_form_success() -> SubmitFormResponseDto {
    SubmitFormResponseDto {
        message: "Form submitted successfully! We will get back to you within 24 hours."
            .to_string(),
        ticket_id: "TICK-12345".to_string(),
        submitted_at: at(REFERENCE_TIMESTAMP),
    }
}

/// Upload receipt for a stored file; `size` is already formatted.
pub fn upload_success(file_name: &str, size: String) -> UploadResponseDto {
    UploadResponseDto {
        message: "File uploaded successfully".to_string(),
        file_url: "https://example.com/files/document.pdf".to_string(),
        file_name: file_name.to_string(),
        size,
        uploaded_at: at(REFERENCE_TIMESTAMP),
    }
}

pub fn delete_user_error() -> ApiFailureDto {
    ApiFailureDto {
        details: Some(json!({ "activeProjects": 3, "assignedTasks": 12 })),
        ..ApiFailureDto::new("Cannot delete user", "USER_HAS_ACTIVE_PROJECTS").with_message(
            "This user has active projects assigned and cannot be deleted. Please reassign their projects first.",
        )
    }
}

pub fn archive_project_error() -> ApiFailureDto {
    ApiFailureDto {
        details: Some(json!({ "dependencies": ["Mobile App", "API Service"] })),
        ..ApiFailureDto::new("Cannot archive project", "PROJECT_HAS_DEPENDENCIES").with_message(
            "This project has dependencies and cannot be archived. Please resolve dependencies first.",
        )
    }
}

/// Validation failure listing every field; callers narrow `fields` as needed.
pub fn save_error() -> ApiFailureDto {
    let fields = HashMap::from([
        ("email".to_string(), "Please enter a valid email address".to_string()),
        ("name".to_string(), "Name is required".to_string()),
        (
            "message".to_string(),
            "Message must be at least 10 characters long".to_string(),
        ),
    ]);

    ApiFailureDto {
        fields: Some(fields),
        ..ApiFailureDto::new("Validation failed", "VALIDATION_ERROR")
            .with_message("Please fix the following errors and try again.")
    }
}

/// `save_error` with `fields` replaced by a single entry.
pub fn field_error(field: &str, message: &str) -> ApiFailureDto {
    ApiFailureDto {
        fields: Some(HashMap::from([(field.to_string(), message.to_string())])),
        ..save_error()
    }
}

pub fn network_error() -> ApiFailureDto {
    ApiFailureDto {
        retry_after: Some(5000),
        ..ApiFailureDto::new("Network error", "NETWORK_TIMEOUT").with_message(
            "Unable to connect to the server. Please check your internet connection and try again.",
        )
    }
}

pub fn server_error() -> ApiFailureDto {
    ApiFailureDto {
        support_ticket: Some("SUP-67890".to_string()),
        ..ApiFailureDto::new("Internal server error", "INTERNAL_SERVER_ERROR").with_message(
            "Something went wrong on our end. Our team has been notified and is working to fix this.",
        )
    }
}

pub fn no_file_error() -> ApiFailureDto {
    ApiFailureDto::new("No file provided", "NO_FILE")
}

/// Refusal for a file of `actual_size` bytes over a `limit` byte cap.
pub fn file_too_large_error(limit: usize, actual_size: usize) -> ApiFailureDto {
    let max_size = if limit % MEGABYTE == 0 {
        format!("{} MB", limit / MEGABYTE)
    } else {
        format_megabytes(limit)
    };

    ApiFailureDto {
        message: Some(format!("File size must be less than {}", max_size.replace(' ', ""))),
        max_size: Some(max_size),
        actual_size: Some(format_megabytes(actual_size)),
        ..ApiFailureDto::new("File too large", "FILE_TOO_LARGE")
    }
}
