//! Modal System Test Utils
//!
//! Shared helpers for exercising the mock API router in tests without binding
//! a socket. Requests are built with `TestBuilder`, sent straight into an
//! `axum::Router` and come back as a `TestResponse` with the body collected.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn lists_users() -> Result<(), TestError> {
//!     let response = TestBuilder::get("/api/users").send(app()).await?;
//!
//!     assert_eq!(response.status, StatusCode::OK);
//!     let users: Vec<UserDto> = response.json()?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
