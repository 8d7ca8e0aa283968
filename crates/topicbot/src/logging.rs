//! Tracing subscriber setup.

use crate::Args;
use topicbot_error::{ConfigError, TopicbotResult};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// How log output is filtered and formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set (e.g. "info", "debug")
    pub log_level: String,
    /// Enable JSON-formatted logs for structured logging
    pub json_logs: bool,
}

impl LoggingConfig {
    /// Info level, plain text.
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    /// Filter built from `RUST_LOG`, falling back to the configured level.
    ///
    /// # Errors
    ///
    /// Returns error if the fallback level is not a valid filter directive.
    pub fn filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_level))
            .map_err(|e| {
                ConfigError::new(format!("Invalid log filter {:?}: {}", self.log_level, e))
            })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Args> for LoggingConfig {
    fn from(args: &Args) -> Self {
        let level = if args.verbose { "debug" } else { "info" };
        Self::new()
            .with_log_level(level)
            .with_json_logs(args.json_logs)
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns error if the filter is invalid or a subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> TopicbotResult<()> {
    let env_filter = config.filter()?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to initialise logging: {}", e)))?;

    Ok(())
}
