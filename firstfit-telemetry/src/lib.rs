//! # firstfit Telemetry
//!
//! Crate for logging and metrics around the arena.

pub mod logging;
pub mod metrics;

pub use logging::EventLogger;
pub use metrics::MetricsRecorder;
