pub mod app;
pub mod component;
pub mod config;
pub mod constant;
pub mod model;
pub mod route;
pub mod router;
pub mod theme;

#[cfg(feature = "web")]
pub mod api;

pub use app::App;
