//! Fixture data served by the mock API.
//!
//! Every call builds fresh values; nothing is persisted between requests.

pub mod notification;
pub mod project;
pub mod response;
pub mod user;

use chrono::{DateTime, Utc};

/// Fixed instant used by every canned response, 2024-01-15T10:30:00Z.
pub const REFERENCE_TIMESTAMP: i64 = 1_705_314_600;

pub(crate) fn at(timestamp: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(timestamp, 0).unwrap_or_default()
}
