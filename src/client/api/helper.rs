use crate::{
    client::model::error::ApiError,
    model::api::{ApiFailureDto, ErrorDto},
};
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Reads the failure body of a non-success response.
///
/// Structured failures contribute their human-readable message, plain
/// `ErrorDto` bodies their error, anything else the raw text.
async fn parse_error(response: Response, status: u64) -> ApiError {
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    let message = if let Ok(failure) = serde_json::from_str::<ApiFailureDto>(&text) {
        failure.display_message().to_string()
    } else if let Ok(error_dto) = serde_json::from_str::<ErrorDto>(&text) {
        error_dto.error
    } else {
        text
    };

    ApiError { status, message }
}

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response.json::<T>().await.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        Err(parse_error(response, status).await)
    }
}

/// Create a GET request
pub fn get(url: &str) -> Request {
    Request::get(url)
}

/// Create a POST request with JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url).header("Content-Type", "application/json")
}

/// Create a PATCH request
pub fn patch(url: &str) -> Request {
    Request::patch(url)
}

/// Create a DELETE request
pub fn delete(url: &str) -> Request {
    Request::delete(url)
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}
