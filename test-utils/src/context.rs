use axum::{
    body::{to_bytes, Body, Bytes},
    http::{HeaderMap, Response, StatusCode},
};
use serde::de::DeserializeOwned;

use crate::error::TestError;

/// Response of a request sent with `TestBuilder`, with the body collected.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub(crate) async fn from_response(response: Response<Body>) -> Result<Self, TestError> {
        let (parts, body) = response.into_parts();
        let body = to_bytes(body, usize::MAX).await?;

        Ok(Self {
            status: parts.status,
            headers: parts.headers,
            body,
        })
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TestError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Body as untyped JSON, for asserting on individual keys.
    pub fn value(&self) -> Result<serde_json::Value, TestError> {
        self.json()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use axum::{routing::get, Json, Router};

    use crate::builder::TestBuilder;

    /// Tests a round trip through a router.
    ///
    /// Verifies that the request reaches the handler and the JSON body is
    /// collected.
    ///
    /// Expected: 200 with the echoed value
    #[tokio::test]
    async fn sends_request_and_reads_json() -> Result<(), crate::error::TestError> {
        let router = Router::new().route(
            "/ping",
            get(|| async { Json(serde_json::json!({ "pong": true })) }),
        );

        let response = TestBuilder::get("/ping").send(router).await?;

        assert_eq!(response.status, axum::http::StatusCode::OK);
        assert_eq!(response.value()?["pong"], true);

        Ok(())
    }
}
