//! Lightweight in-process metrics (no metrics crates).
//!
//! Counters are stored as atomics keyed by label set and rendered by the
//! `/metrics` handler in Prometheus text exposition format.

pub mod metrics;

pub use metrics::ServiceMetrics;
