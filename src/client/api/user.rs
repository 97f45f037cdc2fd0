use crate::{
    client::{
        api::helper::{delete, get, parse_response, send_request},
        model::error::ApiError,
    },
    model::user::{DeleteUserResponseDto, UserDto},
};

pub async fn get_users() -> Result<Vec<UserDto>, ApiError> {
    let request = get("/api/users");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_user(id: &str) -> Result<DeleteUserResponseDto, ApiError> {
    let url = format!("/api/users/{}", id);
    let request = delete(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}
