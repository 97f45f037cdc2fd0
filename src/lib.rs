//! Configuration-driven modal dialogs for Dioxus.
//!
//! The engine lives in [`client::component::modal_system`]; the presentational
//! `Modal` and its `Dialog` shell in [`client::component::modal`]. The
//! `modal-showcase` binary renders the stories and, with the `server` feature,
//! serves the mock API next to them.

pub mod client;
pub mod model;

#[cfg(feature = "server")]
pub mod server;

pub use client::component::modal_system::{ModalConfig, ModalContext, ModalSystem};
