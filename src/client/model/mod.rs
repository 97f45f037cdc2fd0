pub mod cache;
pub mod error;
