//! Discord implementation of the chat client contract.

use crate::conversions;
use async_trait::async_trait;
use serenity::builder::EditChannel;
use serenity::http::Http;
use std::sync::Arc;
use topicbot_core::{ChannelId, ChatPlatform, MessageId, OutgoingMessage};
use topicbot_error::PlatformResult;
use tracing::{debug, error, info, instrument};

/// Posts, edits and retitles channels through Discord's HTTP API.
#[derive(Clone)]
pub struct SerenityPlatform {
    http: Arc<Http>,
}

impl SerenityPlatform {
    /// Create a platform with its own HTTP client.
    #[instrument(skip(token), fields(token_len = token.as_ref().len()))]
    pub fn new(token: impl AsRef<str>) -> Self {
        info!("Creating Discord HTTP client");
        Self {
            http: Arc::new(Http::new(token.as_ref())),
        }
    }

    /// Create a platform sharing an existing HTTP client.
    pub fn with_http_client(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Underlying HTTP client.
    pub fn http(&self) -> &Arc<Http> {
        &self.http
    }
}

#[async_trait]
impl ChatPlatform for SerenityPlatform {
    #[instrument(skip(self, message), fields(channel_id = %channel))]
    async fn send_message(
        &self,
        channel: ChannelId,
        message: OutgoingMessage,
    ) -> PlatformResult<MessageId> {
        let builder = conversions::create_message(&message)?;
        let sent = conversions::channel_id(channel)?
            .send_message(&self.http, builder)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send message"))
            .map_err(|e| conversions::request_error(e, channel, None))?;
        debug!(message_id = %sent.id, "Message sent");
        Ok(MessageId(sent.id.get()))
    }

    #[instrument(skip(self, update), fields(channel_id = %channel, message_id = %message))]
    async fn edit_message(
        &self,
        channel: ChannelId,
        message: MessageId,
        update: OutgoingMessage,
    ) -> PlatformResult<()> {
        conversions::channel_id(channel)?
            .edit_message(
                &self.http,
                conversions::message_id(message)?,
                conversions::edit_message(&update),
            )
            .await
            .inspect_err(|e| error!(error = %e, "Failed to edit message"))
            .map_err(|e| conversions::request_error(e, channel, Some(message)))?;
        debug!("Message edited");
        Ok(())
    }

    #[instrument(skip(self, text), fields(channel_id = %channel))]
    async fn set_channel_topic(&self, channel: ChannelId, text: &str) -> PlatformResult<()> {
        conversions::channel_id(channel)?
            .edit(&self.http, EditChannel::new().topic(text))
            .await
            .inspect_err(|e| error!(error = %e, "Failed to set channel topic"))
            .map_err(|e| conversions::request_error(e, channel, None))?;
        debug!("Channel topic updated");
        Ok(())
    }
}
