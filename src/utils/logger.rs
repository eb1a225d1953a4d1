//! Logging setup
//!
//! Logs go to stderr so that `--format json` output on stdout stays
//! machine readable.

use clap::ValueEnum;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Crate-level log verbosity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `-v` always wins over an explicit `--log-level`
    pub fn resolve(verbose: bool, requested: LogLevel) -> Self {
        if verbose {
            LogLevel::Debug
        } else {
            requested
        }
    }

    fn as_level(self) -> Level {
        match self {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Filter that only admits this crate's events
fn filter_directive(level: LogLevel) -> String {
    format!("{}={}", env!("CARGO_CRATE_NAME"), level.as_level())
}

/// Install the global subscriber
pub fn init_logger(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directive(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_overrides_level() {
        assert_eq!(LogLevel::resolve(true, LogLevel::Error), LogLevel::Debug);
        assert_eq!(LogLevel::resolve(false, LogLevel::Warn), LogLevel::Warn);
    }

    #[test]
    fn test_parse_from_cli_value() {
        assert_eq!(LogLevel::from_str("trace", true), Ok(LogLevel::Trace));
        assert_eq!(LogLevel::from_str("WARN", true), Ok(LogLevel::Warn));
        assert!(LogLevel::from_str("loud", true).is_err());
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(LogLevel::Debug), "fleetx_apitest=DEBUG");
        assert_eq!(filter_directive(LogLevel::default()), "fleetx_apitest=INFO");
    }
}
