use axum::{http::StatusCode, Router};
use serde_json::json;
use test_utils::{builder::TestBuilder, error::TestError};

use crate::{
    model::{
        api::{ApiFailureDto, ErrorDto},
        form::{SubmitFormResponseDto, UploadResponseDto},
        notification::{NotificationDto, NotificationReadDto},
        project::{ArchiveProjectResponseDto, ProjectDto},
        user::{DeleteUserResponseDto, SaveUserResponseDto, UserDto},
    },
    server::{config::Config, router::router, state::AppState},
};

mod legacy;
mod project;
mod upload;
mod user;

/// Router with latency switched off.
fn app() -> Router {
    app_with(Config {
        latency: false,
        ..Config::default()
    })
}

fn app_with(config: Config) -> Router {
    router(&config).with_state(AppState::new(config))
}
