//! Shared mutable state.

use std::sync::Arc;
use tokio::sync::Mutex;
use topicbot_core::{CooldownState, MessageId, PendingSuggestion};

/// Cooldown deadline and the suggestion under review.
///
/// The two are independent: a suggestion can be reviewed while no cooldown
/// runs, and a cooldown can run with nothing under review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Desk {
    cooldown: CooldownState,
    review: Option<PendingSuggestion>,
}

impl Desk {
    /// Desk initialised from the persisted cooldown state.
    pub fn new(cooldown: CooldownState) -> Self {
        Self {
            cooldown,
            review: None,
        }
    }

    /// Current cooldown state.
    pub fn cooldown(&self) -> CooldownState {
        self.cooldown
    }

    /// Whether submissions are rejected because of a cooldown.
    pub fn cooldown_active(&self) -> bool {
        self.cooldown.is_active()
    }

    /// Whether a suggestion awaits a moderator decision.
    pub fn review_pending(&self) -> bool {
        self.review.as_ref().is_some_and(PendingSuggestion::is_pending)
    }

    /// The suggestion under review, if any.
    pub fn review(&self) -> Option<&PendingSuggestion> {
        self.review.as_ref()
    }

    pub(crate) fn set_cooldown(&mut self, cooldown: CooldownState) {
        self.cooldown = cooldown;
    }

    pub(crate) fn start_review(&mut self, suggestion: PendingSuggestion) {
        self.review = Some(suggestion);
    }

    /// Remove the suggestion whose review card is `card`, if it is the one
    /// under review.
    pub(crate) fn take_review(&mut self, card: MessageId) -> Option<PendingSuggestion> {
        if self.review.as_ref().is_some_and(|review| *review.card() == card) {
            self.review.take()
        } else {
            None
        }
    }
}

/// Handle shared by the workflow and the clock.
pub type DeskHandle = Arc<Mutex<Desk>>;
