//! Logging Config

use clap::{Args, ValueEnum};

/// Crates whose `info` output drowns out request logs.
const QUIET_TARGETS: [&str; 3] = ["h2", "hyper", "sqlx"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One line per event, for terminals.
    Compact,

    /// One JSON object per event, for log shippers.
    Json,
}

/// Logging and request-timing settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level or filter directives, e.g. `info` or `shopfront_json=debug`
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Requests slower than this are logged at warn
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000)]
    pub slow_request_threshold_ms: u64,
}

impl LoggingConfig {
    /// Filter directives with noisy dependencies capped at `warn`.
    #[must_use]
    pub fn filter_directives(&self) -> String {
        QUIET_TARGETS
            .iter()
            .fold(self.log_level.clone(), |directives, target| {
                format!("{directives},{target}=warn")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(log_level: &str) -> LoggingConfig {
        LoggingConfig {
            log_level: log_level.to_string(),
            log_format: LogFormat::Compact,
            slow_request_threshold_ms: 250,
        }
    }

    #[test]
    fn filter_directives_quiet_transport_and_sql_crates() {
        assert_eq!(
            config("debug").filter_directives(),
            "debug,h2=warn,hyper=warn,sqlx=warn"
        );
    }

    #[test]
    fn explicit_directives_are_kept_in_front() {
        assert_eq!(
            config("shopfront_json=trace,info").filter_directives(),
            "shopfront_json=trace,info,h2=warn,hyper=warn,sqlx=warn"
        );
    }
}
