//! Error types for the topic suggestion bot.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Validation and precondition failures of the suggestion workflow are not
//! errors; they are answered with ordinary replies. Only configuration,
//! persistence and chat platform failures end up here.
//!
//! # Examples
//!
//! ```
//! use topicbot_error::{ConfigError, TopicbotResult};
//!
//! fn load() -> TopicbotResult<String> {
//!     Err(ConfigError::new("guild_id missing"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod platform;
mod storage;

pub use config::ConfigError;
pub use error::{TopicbotError, TopicbotErrorKind, TopicbotResult};
pub use platform::{PlatformError, PlatformErrorKind, PlatformResult};
pub use storage::{StorageError, StorageErrorKind, StorageResult};
