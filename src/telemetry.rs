//! Logging setup for the console binary.
//!
//! Logs go to stderr so they never interleave with the screens on stdout.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Failure to install the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber was already installed.
    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Maps verbosity flags to a default log level.
///
/// `quiet` wins over any verbosity. Without flags only warnings are shown.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global stderr subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level comes from the flags.
pub fn init(verbosity: u8, quiet: bool) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter(verbosity, quiet).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
