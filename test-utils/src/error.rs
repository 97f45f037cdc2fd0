use thiserror::Error;

/// Failures while building, sending or reading a test request.
#[derive(Error, Debug)]
pub enum TestError {
    /// The request could not be assembled.
    #[error(transparent)]
    Http(#[from] axum::http::Error),

    /// The response body could not be collected.
    #[error(transparent)]
    Body(#[from] axum::Error),

    /// A JSON body could not be serialized or deserialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The router never produces this; kept for `Service::Error`.
    #[error(transparent)]
    Infallible(#[from] std::convert::Infallible),
}
