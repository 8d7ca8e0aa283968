//! Configuration error types.
//!
//! Raised while loading the JSON configuration file, validating its ids and
//! cooldown, or resolving the bot token.

/// Configuration error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What is wrong with the configuration
    pub message: String,
    /// Line where the error was raised
    pub line: u32,
    /// Source file where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Report an unusable configuration at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use topicbot_error::ConfigError;
    ///
    /// let err = ConfigError::new("review_channel_id must not be 0");
    /// assert_eq!(err.message, "review_channel_id must not be 0");
    /// assert!(err.to_string().starts_with("Configuration Error: review_channel_id"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
