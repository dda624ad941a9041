//! # Ikemark Telemetry
//!
//! Crate for logging and metrics functionality shared by the benchmark
//! pipeline and the CLI.

pub mod logging;
pub mod metrics;

pub use logging::EventLogger;
pub use metrics::MetricsRecorder;
