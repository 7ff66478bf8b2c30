//! Custom validation functions for configuration.

use validator::ValidationError;

use crate::arena::ArenaConfig;
use crate::telemetry::TelemetryConfig;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate that a given value is a power of two.
pub fn validate_power_of_two(value: usize) -> Result<(), ValidationError> {
    if value.is_power_of_two() {
        Ok(())
    } else {
        Err(ValidationError::new("must_be_power_of_two")
            .with_message(format!("alignment {value} is not a power of two").into()))
    }
}

/// Validate a `tracing` level name.
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level")
            .with_message(format!("unknown log level '{level}'").into()))
    }
}

pub fn validate_arena(config: &ArenaConfig) -> Result<(), ValidationError> {
    validate_power_of_two(config.alignment)
}

pub fn validate_telemetry(config: &TelemetryConfig) -> Result<(), ValidationError> {
    validate_log_level(&config.log_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_of_two() {
        assert!(validate_power_of_two(1).is_ok());
        assert!(validate_power_of_two(4).is_ok());
        assert!(validate_power_of_two(0).is_err());
        assert!(validate_power_of_two(6).is_err());
    }

    #[test]
    fn log_levels_are_case_insensitive() {
        assert!(validate_log_level("INFO").is_ok());
        assert!(validate_log_level("debug").is_ok());
        assert!(validate_log_level("verbose").is_err());
    }
}
