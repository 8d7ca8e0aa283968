//! Core types for the topic suggestion bot.
//!
//! Members of a chat community submit candidate discussion topics, moderators
//! approve or deny them, and an approved topic starts a cooldown during which
//! no new suggestions are accepted. This crate holds the vocabulary shared by
//! the state store, the workflow and the platform adapter:
//!
//! - **ids**: typed snowflake identifiers
//! - **cooldown**: the persisted `CooldownState` and the configured `CooldownWindow`
//! - **suggestion**: the in-flight `PendingSuggestion` and its status
//! - **message**: embeds, buttons, outgoing messages and interaction replies
//! - **platform**: the `ChatPlatform` contract the workflow talks through
//! - **clock**: wall-clock abstraction so time can be driven in tests
//! - **config**: the static JSON configuration file

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clock;
mod config;
mod cooldown;
mod ids;
mod message;
mod platform;
mod suggestion;

pub use clock::{Clock, SystemClock};
pub use config::{CooldownConfig, TopicbotConfig};
pub use cooldown::{CooldownState, CooldownWindow};
pub use ids::{ChannelId, GuildId, MessageId, UserId};
pub use message::{
    ActionButton, ButtonStyle, COLOR_BLURPLE, COLOR_GREEN, COLOR_RED, Embed, EmbedBuilder,
    EmbedField, OutgoingMessage, Reply,
};
pub use platform::ChatPlatform;
pub use suggestion::{PendingSuggestion, SuggestionStatus, Topic, TopicRejection};
