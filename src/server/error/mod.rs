//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by the mock API handlers and
//! implements `IntoResponse`, so handlers can use `?` and still answer with a
//! JSON body.

pub mod config;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::{ApiFailureDto, ErrorDto},
    server::error::config::ConfigError,
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Malformed multipart body on an upload.
    ///
    /// Answers with the status axum assigns to the rejection, e.g. 413 when
    /// the body limit is hit.
    #[error(transparent)]
    MultipartErr(#[from] MultipartError),

    /// A scripted failure scenario with its full structured body.
    ///
    /// # Fields
    /// - Status code to answer with
    /// - Body sent verbatim
    #[error("{}: {}", .1.code, .1.error)]
    Failure(StatusCode, ApiFailureDto),

    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

}

impl AppError {
    pub fn failure(status: StatusCode, body: ApiFailureDto) -> Self {
        Self::Failure(status, body)
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Scripted status - For `Failure`, with the `ApiFailureDto` body
/// - 404 Not Found - For `NotFound`
/// - Rejection status - For `MultipartErr`
/// - 500 Internal Server Error - For `ConfigErr`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Failure(status, body) => {
                tracing::debug!("Answering {} with {}", status, body.code);
                (status, Json(body)).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::MultipartErr(err) => {
                (err.status(), Json(ErrorDto { error: err.body_text() })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper that logs any displayable error and answers with a generic 500.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
