//! ## firstfit-telemetry::logging
//! **Structured logging with `tracing`**
//!
//! Logs go to stderr so stdout stays a clean transcript of the command
//! session. `RUST_LOG` overrides the configured level.

use tracing::{info_span, Span};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the global subscriber. `default_level` is used when `RUST_LOG`
    /// is unset or unparsable.
    pub fn init(default_level: &str) -> Result<(), InitError> {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(default_level)),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_span_events(FmtSpan::NONE)
            .try_init()
    }

    /// Span wrapping the handling of one interpreter command.
    #[inline]
    pub fn command_span(command: &str, line: usize) -> Span {
        info_span!("command", command = command, line = line)
    }
}
