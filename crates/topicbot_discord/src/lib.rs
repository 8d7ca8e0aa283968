//! Discord integration for the topic suggestion bot.
//!
//! # Architecture
//!
//! - **conversions**: platform-neutral messages into serenity builders
//! - **interaction**: the `/topic` command, the suggestion modal and the
//!   helpers reading their payloads
//! - **platform**: `SerenityPlatform`, the `ChatPlatform` over Discord's HTTP API
//! - **handler**: gateway event handler routing interactions into the workflow
//! - **client**: serenity client setup and lifecycle
//!
//! # Usage
//!
//! ```rust,ignore
//! use topicbot_discord::{SerenityPlatform, TopicBot, TopicHandler};
//!
//! let platform = SerenityPlatform::new(&token);
//! let workflow = SuggestionWorkflow::restore(settings, Arc::new(platform), store, clock).await;
//! let mut bot = TopicBot::new(&token, TopicHandler::new(workflow, guild)).await?;
//! bot.start().await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
pub mod conversions;
mod handler;
pub mod interaction;
mod platform;

pub use client::TopicBot;
pub use handler::TopicHandler;
pub use platform::SerenityPlatform;
