use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{context::TestResponse, error::TestError};

const MULTIPART_BOUNDARY: &str = "test-utils-boundary";

/// Builder for a single request against a router.
///
/// # Example
///
/// ```rust,ignore
/// let response = TestBuilder::post("/api/contact")
///     .json(&payload)?
///     .send(router)
///     .await?;
/// ```
pub struct TestBuilder {
    method: Method,
    uri: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl TestBuilder {
    /// Creates a request with the given method and path and an empty body.
    pub fn new(method: Method, uri: &str) -> Self {
        Self {
            method,
            uri: uri.to_string(),
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn get(uri: &str) -> Self {
        Self::new(Method::GET, uri)
    }

    pub fn post(uri: &str) -> Self {
        Self::new(Method::POST, uri)
    }

    pub fn patch(uri: &str) -> Self {
        Self::new(Method::PATCH, uri)
    }

    pub fn delete(uri: &str) -> Self {
        Self::new(Method::DELETE, uri)
    }

    /// Adds a request header.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Serializes `payload` as the JSON body.
    ///
    /// # Returns
    /// - `Ok(Self)` - Builder with body and content type set
    /// - `Err(TestError::Json)` - Payload could not be serialized
    pub fn json<T: Serialize>(self, payload: &T) -> Result<Self, TestError> {
        let body = serde_json::to_vec(payload)?;
        Ok(self.raw_json(body))
    }

    /// Uses `body` verbatim as a JSON body, for payloads a typed DTO cannot express.
    pub fn raw_json(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self.header(header::CONTENT_TYPE.as_str(), "application/json")
    }

    /// Sends a `multipart/form-data` body with one file part.
    pub fn multipart_file(mut self, field: &str, file_name: &str, contents: &[u8]) -> Self {
        let mut body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
            boundary = MULTIPART_BOUNDARY,
        )
        .into_bytes();
        body.extend_from_slice(contents);
        body.extend_from_slice(format!("\r\n--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());

        self.body = body;
        self.multipart_header()
    }

    /// Sends a `multipart/form-data` body with one text part and no file.
    pub fn multipart_text(mut self, field: &str, value: &str) -> Self {
        self.body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"\r\n\r\n{value}\r\n--{boundary}--\r\n",
            boundary = MULTIPART_BOUNDARY,
        )
        .into_bytes();
        self.multipart_header()
    }

    fn multipart_header(self) -> Self {
        let content_type = format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY);
        self.header(header::CONTENT_TYPE.as_str(), &content_type)
    }

    /// Sends the request through `router` and collects the response.
    ///
    /// # Returns
    /// - `Ok(TestResponse)` - Status, headers and collected body
    /// - `Err(TestError)` - Request could not be built or body could not be read
    pub async fn send(self, router: Router) -> Result<TestResponse, TestError> {
        let mut request = Request::builder().method(self.method).uri(self.uri);
        for (name, value) in &self.headers {
            request = request.header(name, value);
        }
        let request = request.body(Body::from(self.body))?;

        let response = router.oneshot(request).await?;

        TestResponse::from_response(response).await
    }
}
