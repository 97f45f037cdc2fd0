//! Mock REST backend for the showcase.
//!
//! Serves literal fixtures with simulated latency so the modal stories can
//! exercise loading, success and failure states against a real HTTP surface.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, scenario selection and OpenAPI annotations
//! - **Data Layer** (`data/`) - Fixture users, projects, notifications and canned responses
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based latency and upload settings
//! - **State** (`state`) - Shared configuration and the latency simulator
//! - **Router** (`router`) - Route table, body limits, CORS and the OpenAPI document
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod router;
pub mod state;
