//! Top-level error wrapper types.

use crate::{ConfigError, PlatformError, StorageError};

/// Every failure the bot can surface.
///
/// # Examples
///
/// ```
/// use topicbot_error::{ConfigError, TopicbotError};
///
/// let err: TopicbotError = ConfigError::new("bad cooldown").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum TopicbotErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// State file error
    #[from(StorageError)]
    Storage(StorageError),
    /// Chat platform error
    #[from(PlatformError)]
    Platform(PlatformError),
}

/// Topicbot error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Topicbot Error: {}", _0)]
pub struct TopicbotError(Box<TopicbotErrorKind>);

impl TopicbotError {
    /// Create a new error from a kind.
    pub fn new(kind: TopicbotErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TopicbotErrorKind {
        &self.0
    }
}

impl<T> From<T> for TopicbotError
where
    T: Into<TopicbotErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for topicbot operations.
pub type TopicbotResult<T> = std::result::Result<T, TopicbotError>;
