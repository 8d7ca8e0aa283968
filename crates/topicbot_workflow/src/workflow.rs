//! Suggestion workflow state machine.

use crate::{Desk, DeskHandle, render};
use derive_getters::Getters;
use std::sync::Arc;
use tokio::sync::Mutex;
use topicbot_core::{
    ChannelId, ChatPlatform, Clock, CooldownState, CooldownWindow, MessageId, PendingSuggestion,
    Reply, SuggestionStatus, Topic, TopicbotConfig, UserId,
};
use topicbot_error::{ConfigError, TopicbotResult};
use topicbot_state::CooldownStore;
use tracing::{debug, error, info, instrument, warn};

/// The parts of the configuration the workflow acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct WorkflowSettings {
    /// Where members submit and approvals are announced.
    submission_channel: ChannelId,
    /// Where moderators review suggestions.
    review_channel: ChannelId,
    /// Cooldown started by an approval.
    window: CooldownWindow,
}

impl WorkflowSettings {
    /// Create settings.
    pub fn new(
        submission_channel: ChannelId,
        review_channel: ChannelId,
        window: CooldownWindow,
    ) -> Self {
        Self {
            submission_channel,
            review_channel,
            window,
        }
    }
}

impl From<&TopicbotConfig> for WorkflowSettings {
    fn from(config: &TopicbotConfig) -> Self {
        Self::new(
            config.submission_channel(),
            config.review_channel(),
            config.cooldown_window(),
        )
    }
}

/// Outcome of asking to open the submission form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionGate {
    /// Submissions are accepted; collect the topic text.
    Open,
    /// Submissions are not accepted; answer with this reply.
    Refused(Reply),
}

/// The moderated topic suggestion workflow.
///
/// Cheap to clone; clones share the same desk, store and platform.
#[derive(Clone)]
pub struct SuggestionWorkflow {
    settings: WorkflowSettings,
    desk: DeskHandle,
    platform: Arc<dyn ChatPlatform>,
    store: Arc<dyn CooldownStore>,
    clock: Arc<dyn Clock>,
}

impl SuggestionWorkflow {
    /// Create a workflow over an existing desk.
    pub fn new(
        settings: WorkflowSettings,
        desk: DeskHandle,
        platform: Arc<dyn ChatPlatform>,
        store: Arc<dyn CooldownStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            settings,
            desk,
            platform,
            store,
            clock,
        }
    }

    /// Create a workflow whose desk starts from the persisted cooldown state.
    #[instrument(skip_all)]
    pub async fn restore(
        settings: WorkflowSettings,
        platform: Arc<dyn ChatPlatform>,
        store: Arc<dyn CooldownStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let cooldown = store.load().await;
        info!(deadline = ?cooldown.deadline(), "Workflow restored");
        let desk = Arc::new(Mutex::new(Desk::new(cooldown)));
        Self::new(settings, desk, platform, store, clock)
    }

    /// Workflow settings.
    pub fn settings(&self) -> &WorkflowSettings {
        &self.settings
    }

    /// Shared desk handle.
    pub fn desk(&self) -> &DeskHandle {
        &self.desk
    }

    pub(crate) fn platform(&self) -> &Arc<dyn ChatPlatform> {
        &self.platform
    }

    pub(crate) fn store(&self) -> &Arc<dyn CooldownStore> {
        &self.store
    }

    pub(crate) fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Copy of the current desk.
    pub async fn snapshot(&self) -> Desk {
        self.desk.lock().await.clone()
    }

    /// Check whether `actor` may start a submission from `channel`.
    ///
    /// Used before showing the submission form, both for the slash command
    /// and for the retry button.
    #[instrument(skip(self), fields(actor = %actor, channel = %channel))]
    pub async fn open_submission(&self, actor: UserId, channel: ChannelId) -> SubmissionGate {
        let desk = self.desk.lock().await;
        match self.refusal(&desk, channel) {
            Some(reply) => SubmissionGate::Refused(reply),
            None => SubmissionGate::Open,
        }
    }

    /// Retry after an empty submission: reopens the entry point.
    pub async fn retry(&self, actor: UserId, channel: ChannelId) -> SubmissionGate {
        debug!(actor = %actor, "Retry requested");
        self.open_submission(actor, channel).await
    }

    /// Submit a topic for review.
    ///
    /// Precondition and validation failures produce a private reply and
    /// change nothing. On success the review card is posted and the
    /// suggestion becomes the one under review.
    ///
    /// # Errors
    ///
    /// Returns error if the review card cannot be posted.
    #[instrument(skip(self, text), fields(author = %author, channel = %channel))]
    pub async fn submit(
        &self,
        text: &str,
        author: UserId,
        channel: ChannelId,
    ) -> TopicbotResult<Reply> {
        let mut desk = self.desk.lock().await;

        if let Some(reply) = self.refusal(&desk, channel) {
            return Ok(reply);
        }

        let topic = match Topic::parse(text) {
            Ok(topic) => topic,
            Err(rejection) => {
                debug!(%rejection, "Topic rejected");
                return Ok(render::rejected_topic(rejection));
            }
        };

        let card = self
            .platform
            .send_message(
                self.settings.review_channel,
                render::review_card(&topic, author),
            )
            .await
            .inspect_err(|e| error!(error = %e, "Failed to post review card"))?;

        info!(topic = %topic, card = %card, "Topic sent to review");
        desk.start_review(PendingSuggestion::new(topic, author, card));
        Ok(render::submission_ack())
    }

    /// Approve the suggestion shown on review card `card`.
    ///
    /// Persists the new cooldown first, then finalizes the review card,
    /// announces the topic and updates the channel topic.
    ///
    /// # Errors
    ///
    /// Returns error if the deadline is out of range or the cooldown cannot
    /// be persisted (nothing changes), or if a platform call fails afterwards
    /// (the approval stands).
    #[instrument(skip(self), fields(moderator = %moderator, card = %card))]
    pub async fn approve(&self, moderator: UserId, card: MessageId) -> TopicbotResult<Reply> {
        let mut desk = self.desk.lock().await;

        if !desk.review().is_some_and(|review| *review.card() == card) {
            warn!("Approve clicked on a card that is not under review");
            return Ok(render::not_pending());
        }

        let window = self.settings.window;
        let Some(deadline) = window.deadline_from(self.clock.now()) else {
            error!(%window, "Cooldown deadline out of range, approval aborted");
            return Err(
                ConfigError::new(format!("cooldown of {} cannot be scheduled", window)).into(),
            );
        };
        let cooldown = CooldownState::until(deadline);
        self.store
            .save(&cooldown)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to persist cooldown, approval aborted"))?;
        desk.set_cooldown(cooldown);

        let Some(mut suggestion) = desk.take_review(card) else {
            return Ok(render::not_pending());
        };
        suggestion.finalize(SuggestionStatus::Approved);
        info!(topic = %suggestion.topic(), deadline = ?cooldown.deadline(), "Topic approved");

        self.platform
            .edit_message(
                self.settings.review_channel,
                card,
                render::finalized_card(&suggestion),
            )
            .await?;
        let submission_channel = self.settings.submission_channel;
        self.platform
            .send_message(submission_channel, render::approval_announcement(&suggestion))
            .await?;
        self.platform
            .set_channel_topic(submission_channel, &render::channel_topic(suggestion.topic()))
            .await?;

        Ok(render::approved_ack(suggestion.topic(), moderator))
    }

    /// Deny the suggestion shown on review card `card`.
    ///
    /// # Errors
    ///
    /// Returns error if finalizing the card or notifying the author fails.
    #[instrument(skip(self), fields(moderator = %moderator, card = %card))]
    pub async fn deny(&self, moderator: UserId, card: MessageId) -> TopicbotResult<Reply> {
        let mut desk = self.desk.lock().await;

        let Some(mut suggestion) = desk.take_review(card) else {
            warn!("Deny clicked on a card that is not under review");
            return Ok(render::not_pending());
        };
        suggestion.finalize(SuggestionStatus::Denied);
        info!(topic = %suggestion.topic(), "Topic denied");

        self.platform
            .edit_message(
                self.settings.review_channel,
                card,
                render::finalized_card(&suggestion),
            )
            .await?;
        self.platform
            .send_message(
                self.settings.submission_channel,
                render::denial_notice(&suggestion),
            )
            .await?;

        Ok(render::denied_ack(suggestion.topic(), moderator))
    }

    fn refusal(&self, desk: &Desk, channel: ChannelId) -> Option<Reply> {
        if channel != self.settings.submission_channel {
            debug!("Submission from wrong channel");
            return Some(render::wrong_channel(self.settings.submission_channel));
        }
        let cooldown = desk.cooldown();
        if cooldown.is_active() {
            debug!(deadline = ?cooldown.deadline(), "Submission during cooldown");
            return Some(render::on_cooldown(cooldown.remaining(self.clock.now())));
        }
        if desk.review_pending() {
            debug!("Submission while another suggestion is under review");
            return Some(render::review_busy());
        }
        None
    }
}
