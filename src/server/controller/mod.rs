//! HTTP handlers for the mock API.
//!
//! Each handler waits for its scripted latency, then answers with a fixture or
//! a scripted failure. Handlers carry `utoipa::path` annotations collected by
//! `docs::ApiDoc`.

pub mod docs;
pub mod form;
pub mod legacy;
pub mod notification;
pub mod project;
pub mod simulate;
pub mod user;

#[cfg(test)]
mod test;
