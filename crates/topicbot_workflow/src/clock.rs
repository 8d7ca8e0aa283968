//! Periodic cooldown check.

use crate::{SuggestionWorkflow, render};
use chrono::Duration;
use std::time::Duration as StdDuration;
use tokio::sync::watch;
use tokio::time::{MissedTickBehavior, interval};
use topicbot_core::CooldownState;
use topicbot_error::TopicbotResult;
use tracing::{debug, error, info, instrument};

/// What a single clock tick observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No cooldown is active.
    Idle,
    /// A cooldown is active and has time left.
    Waiting {
        /// Time until the deadline.
        remaining: Duration,
    },
    /// The deadline passed on this tick; submissions reopened.
    Elapsed,
}

/// Repeating timer that ends cooldowns.
///
/// The deadline is cleared and persisted before the two notifications go
/// out, and the desk lock is held for the whole tick, so an elapsed cooldown
/// is announced exactly once.
#[derive(Clone)]
pub struct CooldownClock {
    workflow: SuggestionWorkflow,
    period: StdDuration,
}

impl CooldownClock {
    /// Clock checking the workflow's cooldown every `period`.
    pub fn new(workflow: SuggestionWorkflow, period: StdDuration) -> Self {
        Self { workflow, period }
    }

    /// Interval between checks.
    pub fn period(&self) -> StdDuration {
        self.period
    }

    /// Run one check.
    ///
    /// # Errors
    ///
    /// Returns error if clearing the deadline cannot be persisted (the
    /// cooldown stays active and the next tick retries) or if a notification
    /// fails (the cooldown is already cleared).
    #[instrument(skip(self))]
    pub async fn tick(&self) -> TopicbotResult<TickOutcome> {
        let mut desk = self.workflow.desk().lock().await;
        let cooldown = desk.cooldown();
        let now = self.workflow.clock().now();

        if !cooldown.is_active() {
            return Ok(TickOutcome::Idle);
        }
        if !cooldown.is_elapsed(now) {
            let remaining = cooldown.remaining(now).unwrap_or_else(Duration::zero);
            debug!(remaining_secs = remaining.num_seconds(), "Cooldown still running");
            return Ok(TickOutcome::Waiting { remaining });
        }

        let reopened = CooldownState::open();
        self.workflow
            .store()
            .save(&reopened)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to persist cleared cooldown"))?;
        desk.set_cooldown(reopened);
        info!(deadline = ?cooldown.deadline(), "Cooldown elapsed");

        let settings = self.workflow.settings();
        self.workflow
            .platform()
            .send_message(*settings.review_channel(), render::cooldown_elapsed())
            .await?;
        self.workflow
            .platform()
            .send_message(*settings.submission_channel(), render::submissions_open())
            .await?;

        Ok(TickOutcome::Elapsed)
    }

    /// Tick every period until `shutdown` turns true or its sender is dropped.
    #[instrument(skip_all, fields(period_secs = self.period.as_secs()))]
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        info!("Cooldown clock started");
        let mut timer = interval(self.period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = timer.tick() => {
                    if let Err(e) = self.tick().await {
                        error!(error = %e, "Cooldown check failed");
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Cooldown clock stopped");
    }
}
