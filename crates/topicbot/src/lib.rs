//! Moderated topic suggestion bot.
//!
//! Members suggest a discussion topic with `/topic`; moderators approve or
//! deny it from a review channel. An approved topic is announced, becomes
//! the channel topic and starts a cooldown during which no new suggestions
//! are accepted. The cooldown deadline survives restarts in a small JSON
//! record.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod cli;
mod logging;

pub use app::{check_config, load_config, run};
pub use cli::Args;
pub use logging::{LoggingConfig, init_logging};
