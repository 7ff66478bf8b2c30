//! Observability configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
#[serde(default)]
#[validate(schema(function = validation::validate_telemetry))]
pub struct TelemetryConfig {
    /// Default `tracing` level when `RUST_LOG` is unset.
    pub log_level: String,

    /// Record Prometheus metrics for arena operations.
    pub metrics: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".into(),
            metrics: true,
        }
    }
}
