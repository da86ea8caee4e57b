//! Observability setup: structured logging and optional OpenTelemetry spans.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};
