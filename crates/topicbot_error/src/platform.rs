//! Chat platform error types.
//!
//! Raised by implementations of the chat client contract when a message
//! cannot be sent or edited, a channel cannot be updated, or the gateway
//! connection fails.

/// Chat platform error variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum PlatformErrorKind {
    /// Platform API error (HTTP error, gateway error, rate limit).
    #[display("Platform API error: {_0}")]
    ApiError(String),

    /// Channel not found by ID.
    #[display("Channel not found: {_0}")]
    ChannelNotFound(u64),

    /// Message not found by ID.
    #[display("Message not found: {_0}")]
    MessageNotFound(u64),

    /// Invalid snowflake ID.
    #[display("Invalid ID: {_0}")]
    InvalidId(String),

    /// Connection to the gateway failed.
    #[display("Connection failed: {_0}")]
    ConnectionFailed(String),

    /// Bot token is invalid or expired.
    #[display("Invalid or expired bot token")]
    InvalidToken,

    /// Interaction (slash command, button, modal) response failed.
    #[display("Interaction failed: {_0}")]
    InteractionFailed(String),
}

/// Chat platform error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Platform Error: {} at line {} in {}", kind, line, file)]
pub struct PlatformError {
    kind: PlatformErrorKind,
    line: u32,
    file: &'static str,
}

impl PlatformError {
    /// Create a new PlatformError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use topicbot_error::{PlatformError, PlatformErrorKind};
    ///
    /// let err = PlatformError::new(PlatformErrorKind::InvalidToken);
    /// assert_eq!(err.kind(), &PlatformErrorKind::InvalidToken);
    /// ```
    #[track_caller]
    pub fn new(kind: PlatformErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PlatformErrorKind {
        &self.kind
    }

    /// Line where the error was created.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// File where the error was created.
    pub fn file(&self) -> &'static str {
        self.file
    }
}

/// Result type for chat platform operations.
pub type PlatformResult<T> = Result<T, PlatformError>;

#[cfg(feature = "discord")]
impl From<serenity::Error> for PlatformError {
    #[track_caller]
    fn from(err: serenity::Error) -> Self {
        use serenity::gateway::GatewayError;
        use serenity::http::HttpError;

        let kind = match &err {
            serenity::Error::Gateway(GatewayError::InvalidAuthentication) => {
                PlatformErrorKind::InvalidToken
            }
            serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
                if response.status_code.as_u16() == 401 =>
            {
                PlatformErrorKind::InvalidToken
            }
            serenity::Error::Gateway(_) => PlatformErrorKind::ConnectionFailed(err.to_string()),
            _ => PlatformErrorKind::ApiError(err.to_string()),
        };
        PlatformError::new(kind)
    }
}
