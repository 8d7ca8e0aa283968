//! Gateway event handler.
//!
//! Translates Discord interactions into workflow operations and the
//! workflow's replies back into interaction responses.

use crate::conversions;
use crate::interaction::{
    COMMAND_NAME, MODAL_ID, command_topic, deferred_submission, modal_topic, suggestion_modal,
    topic_command,
};
use async_trait::async_trait;
use serenity::builder::CreateInteractionResponse;
use serenity::client::{Context, EventHandler};
use serenity::model::application::{
    CommandInteraction, ComponentInteraction, Interaction, ModalInteraction,
};
use serenity::model::gateway::{GatewayIntents, Ready};
use topicbot_core::{ActionButton, ChannelId, GuildId, MessageId, Reply, UserId};
use topicbot_error::{PlatformError, PlatformErrorKind, PlatformResult, TopicbotResult};
use topicbot_workflow::{SubmissionGate, SuggestionWorkflow, render};
use tracing::{debug, error, info, instrument, warn};

/// Routes `/topic`, the suggestion modal and the card buttons into the
/// suggestion workflow.
///
/// Submissions and moderator decisions are acknowledged before the workflow
/// runs, so slow platform or storage calls never miss Discord's response
/// deadline. The outcome follows as an edit of the deferred response or as
/// a followup message.
pub struct TopicHandler {
    workflow: SuggestionWorkflow,
    guild: GuildId,
}

impl TopicHandler {
    /// Create a handler serving `guild`.
    pub fn new(workflow: SuggestionWorkflow, guild: GuildId) -> Self {
        Self { workflow, guild }
    }

    /// Gateway intents the handler needs.
    ///
    /// Interactions are delivered without any privileged intent.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
    }

    /// The workflow driven by this handler.
    pub fn workflow(&self) -> &SuggestionWorkflow {
        &self.workflow
    }

    async fn on_command(&self, ctx: &Context, command: &CommandInteraction) -> PlatformResult<()> {
        if command.data.name != COMMAND_NAME {
            debug!(command = %command.data.name, "Ignoring unknown command");
            return Ok(());
        }
        let author = UserId(command.user.id.get());
        let channel = ChannelId(command.channel_id.get());

        let Some(text) = command_topic(&command.data.options) else {
            let response = gate_response(self.workflow.open_submission(author, channel).await);
            return command
                .create_response(&ctx.http, response)
                .await
                .map_err(interaction_failed);
        };

        command
            .create_response(&ctx.http, deferred_submission())
            .await
            .map_err(interaction_failed)?;
        let reply = outcome(self.workflow.submit(text, author, channel).await);
        command
            .edit_response(&ctx.http, conversions::edit_response(&reply))
            .await
            .map_err(interaction_failed)?;
        Ok(())
    }

    async fn on_modal(&self, ctx: &Context, modal: &ModalInteraction) -> PlatformResult<()> {
        if modal.data.custom_id != MODAL_ID {
            debug!(custom_id = %modal.data.custom_id, "Ignoring unknown modal");
            return Ok(());
        }
        let text = modal_topic(&modal.data.components).unwrap_or_default();

        modal
            .create_response(&ctx.http, deferred_submission())
            .await
            .map_err(interaction_failed)?;
        let reply = outcome(
            self.workflow
                .submit(
                    &text,
                    UserId(modal.user.id.get()),
                    ChannelId(modal.channel_id.get()),
                )
                .await,
        );
        modal
            .edit_response(&ctx.http, conversions::edit_response(&reply))
            .await
            .map_err(interaction_failed)?;
        Ok(())
    }

    async fn on_component(
        &self,
        ctx: &Context,
        component: &ComponentInteraction,
    ) -> PlatformResult<()> {
        let Some(button) = ActionButton::from_custom_id(&component.data.custom_id) else {
            debug!(custom_id = %component.data.custom_id, "Ignoring unknown component");
            return Ok(());
        };
        let actor = UserId(component.user.id.get());
        let approve = match button {
            ActionButton::Approve => true,
            ActionButton::Deny => false,
            ActionButton::Retry => {
                let channel = ChannelId(component.channel_id.get());
                let response = gate_response(self.workflow.retry(actor, channel).await);
                return component
                    .create_response(&ctx.http, response)
                    .await
                    .map_err(interaction_failed);
            }
        };

        component
            .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
            .await
            .map_err(interaction_failed)?;
        let card = MessageId(component.message.id.get());
        let decided = if approve {
            self.workflow.approve(actor, card).await
        } else {
            self.workflow.deny(actor, card).await
        };
        component
            .create_followup(&ctx.http, conversions::followup(&outcome(decided)))
            .await
            .map_err(interaction_failed)?;
        Ok(())
    }
}

/// The workflow's reply, or the generic failure notice if it failed.
fn outcome(result: TopicbotResult<Reply>) -> Reply {
    result.unwrap_or_else(|e| {
        error!(error = %e, "Interaction failed");
        render::internal_failure()
    })
}

/// Open the suggestion modal, or answer with the refusal.
fn gate_response(gate: SubmissionGate) -> CreateInteractionResponse {
    match gate {
        SubmissionGate::Open => CreateInteractionResponse::Modal(suggestion_modal()),
        SubmissionGate::Refused(reply) => {
            CreateInteractionResponse::Message(conversions::reply_message(&reply))
        }
    }
}

fn interaction_failed(err: serenity::Error) -> PlatformError {
    PlatformError::new(PlatformErrorKind::InteractionFailed(err.to_string()))
}

#[async_trait]
impl EventHandler for TopicHandler {
    #[instrument(skip(self, ctx, ready), fields(bot = %ready.user.name, guild_id = %self.guild))]
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Bot connected to Discord");

        let guild = match conversions::guild_id(self.guild) {
            Ok(guild) => guild,
            Err(e) => {
                error!(error = %e, "Cannot register commands");
                return;
            }
        };
        match guild.set_commands(&ctx.http, vec![topic_command()]).await {
            Ok(commands) => info!(count = commands.len(), "Registered guild commands"),
            Err(e) => error!(error = %e, "Failed to register guild commands"),
        }
    }

    #[instrument(skip_all, fields(interaction_id = %interaction.id()))]
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let handled = match &interaction {
            Interaction::Command(command) => self.on_command(&ctx, command).await,
            Interaction::Modal(modal) => self.on_modal(&ctx, modal).await,
            Interaction::Component(component) => self.on_component(&ctx, component).await,
            _ => Ok(()),
        };

        if let Err(e) = handled {
            warn!(error = %e, "Failed to respond to interaction");
        }
    }
}
