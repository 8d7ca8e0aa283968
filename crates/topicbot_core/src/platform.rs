//! Chat client contract.

use crate::{ChannelId, MessageId, OutgoingMessage};
use async_trait::async_trait;
use topicbot_error::PlatformResult;

/// The chat platform operations the workflow and the cooldown clock need.
///
/// This is also the notification sink: every announcement the bot makes goes
/// through `send_message`. Each call may fail with a transient platform error.
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Post `message` to `channel`.
    ///
    /// # Errors
    ///
    /// Returns error if the channel is unknown or the API call fails.
    async fn send_message(
        &self,
        channel: ChannelId,
        message: OutgoingMessage,
    ) -> PlatformResult<MessageId>;

    /// Replace the content, embeds and buttons of an existing message.
    ///
    /// # Errors
    ///
    /// Returns error if the message is gone or the API call fails.
    async fn edit_message(
        &self,
        channel: ChannelId,
        message: MessageId,
        update: OutgoingMessage,
    ) -> PlatformResult<()>;

    /// Set the topic/description metadata of `channel`.
    ///
    /// # Errors
    ///
    /// Returns error if the bot lacks permission or the API call fails.
    async fn set_channel_topic(&self, channel: ChannelId, text: &str) -> PlatformResult<()>;
}
