//! Discord bot client setup and lifecycle management.

use crate::TopicHandler;
use serenity::Client;
use serenity::gateway::ShardManager;
use std::sync::Arc;
use topicbot_error::{PlatformError, PlatformErrorKind, PlatformResult};
use tracing::{info, instrument};

/// Gateway connection running the topic handler.
///
/// # Example
/// ```no_run
/// # async fn run(token: String, handler: topicbot_discord::TopicHandler)
/// # -> Result<(), topicbot_error::PlatformError> {
/// use topicbot_discord::TopicBot;
///
/// let mut bot = TopicBot::new(&token, handler).await?;
/// bot.start().await?;
/// # Ok(())
/// # }
/// ```
pub struct TopicBot {
    client: Client,
}

impl TopicBot {
    /// Build the serenity client.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionFailed` if the client cannot be built.
    #[instrument(skip(token, handler), fields(token_len = token.len()))]
    pub async fn new(token: &str, handler: TopicHandler) -> PlatformResult<Self> {
        let intents = TopicHandler::intents();
        info!(?intents, "Building Serenity client");

        let client = Client::builder(token, intents)
            .event_handler(handler)
            .await
            .map_err(|e| {
                PlatformError::new(PlatformErrorKind::ConnectionFailed(format!(
                    "Failed to build client: {}",
                    e
                )))
            })?;

        Ok(Self { client })
    }

    /// Handle for stopping every shard from another task.
    pub fn shard_manager(&self) -> Arc<ShardManager> {
        self.client.shard_manager.clone()
    }

    /// Connect and process events until the shards shut down.
    ///
    /// # Errors
    ///
    /// Returns `InvalidToken` if Discord rejects the token, otherwise
    /// `ConnectionFailed` if the gateway connection fails.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> PlatformResult<()> {
        info!("Starting Discord bot");
        self.client.start().await.map_err(|e| {
            let err = PlatformError::from(e);
            match err.kind() {
                PlatformErrorKind::InvalidToken | PlatformErrorKind::ConnectionFailed(_) => err,
                other => PlatformError::new(PlatformErrorKind::ConnectionFailed(format!(
                    "Client error: {}",
                    other
                ))),
            }
        })?;
        info!("Discord bot stopped");
        Ok(())
    }
}
