//! Logging utilities
//!
//! Diagnostics go through tracing to stderr. The run's progress lines are
//! printed separately and never pass through the subscriber.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log level configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Level {
        match self {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    /// Pick the level for a run
    ///
    /// An explicit `--log-level` wins over `--verbose`. Without either the
    /// level is `warn`, which keeps a normal run down to its progress lines.
    pub fn resolve(explicit: Option<&str>, verbose: bool) -> Result<Self> {
        match explicit {
            Some(s) => Self::from_str(s).ok_or_else(|| anyhow::anyhow!("Unknown log level: {s}")),
            None if verbose => Ok(LogLevel::Debug),
            None => Ok(LogLevel::Warn),
        }
    }
}

/// Initialize the logger with specified level
pub fn init_logger(level: LogLevel) {
    let filter = EnvFilter::new(format!("slr_harness={}", level.to_tracing_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!(LogLevel::from_str("info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::from_str("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_str("unknown"), None);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(LogLevel::resolve(None, false).unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::resolve(None, true).unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::resolve(Some("error"), true).unwrap(), LogLevel::Error);
        assert!(LogLevel::resolve(Some("loud"), false).is_err());
    }
}
