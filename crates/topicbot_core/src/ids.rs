//! Typed snowflake identifiers.

use serde::{Deserialize, Serialize};

/// A member of the community.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("{}", _0)]
pub struct UserId(pub u64);

impl UserId {
    /// Mention markup that pings this user, e.g. `<@42>`.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.0)
    }
}

/// A text channel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("{}", _0)]
pub struct ChannelId(pub u64);

impl ChannelId {
    /// Mention markup that links this channel, e.g. `<#42>`.
    pub fn mention(&self) -> String {
        format!("<#{}>", self.0)
    }
}

/// A message posted in some channel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("{}", _0)]
pub struct MessageId(pub u64);

/// The community (guild) the bot serves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("{}", _0)]
pub struct GuildId(pub u64);
