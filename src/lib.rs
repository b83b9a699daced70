//! Portfolio status service library entry.
//!
//! This crate wires the config layer, shared state, metrics registry, and
//! HTTP handlers into a small status service. It is intended to be consumed
//! by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;

/// Shared result type.
pub use error::{ApiError, Result};
