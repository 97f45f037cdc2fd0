//! Data transfer objects shared by the showcase and the mock API.

pub mod api;
pub mod form;
pub mod notification;
pub mod project;
pub mod user;
