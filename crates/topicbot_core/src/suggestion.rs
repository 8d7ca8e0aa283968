//! The single in-flight topic suggestion.

use crate::{MessageId, UserId};
use derive_getters::Getters;

/// Non-empty, trimmed topic text of at most [`Topic::MAX_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}", _0)]
pub struct Topic(String);

/// Why submitted text was not accepted as a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TopicRejection {
    /// Nothing left after trimming.
    #[display("topic is empty")]
    Empty,
    /// Longer than the channel topic can carry.
    #[display("topic is {} characters long, at most {} allowed", length, max)]
    TooLong {
        /// Characters after trimming.
        length: usize,
        /// Allowed maximum.
        max: usize,
    },
}

impl Topic {
    /// Longest accepted topic, in characters.
    ///
    /// Leaves room for the channel topic prefix within the platform's
    /// 1024 character channel topic limit.
    pub const MAX_CHARS: u16 = 900;

    /// Trim `raw` and accept it if anything is left and it fits.
    ///
    /// # Examples
    ///
    /// ```
    /// use topicbot_core::{Topic, TopicRejection};
    ///
    /// assert_eq!(Topic::parse("  Best board games ").unwrap().as_str(), "Best board games");
    /// assert_eq!(Topic::parse(" \n\t "), Err(TopicRejection::Empty));
    /// assert!(matches!(
    ///     Topic::parse(&"x".repeat(901)),
    ///     Err(TopicRejection::TooLong { length: 901, .. })
    /// ));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, TopicRejection> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TopicRejection::Empty);
        }
        let length = trimmed.chars().count();
        let max = usize::from(Self::MAX_CHARS);
        if length > max {
            return Err(TopicRejection::TooLong { length, max });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Topic text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Moderation status of a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SuggestionStatus {
    /// Waiting for a moderator decision.
    #[display("Pending")]
    Pending,
    /// Accepted; the topic became the channel topic.
    #[display("Approved")]
    Approved,
    /// Rejected by a moderator.
    #[display("Denied")]
    Denied,
}

/// A suggestion posted to the review surface.
///
/// Held in memory for the lifetime of its review card; the status is tracked
/// here instead of being read back from the rendered card.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PendingSuggestion {
    /// Suggested topic.
    topic: Topic,
    /// Member who suggested it.
    author: UserId,
    /// The review card message in the review channel.
    card: MessageId,
    /// Current moderation status.
    status: SuggestionStatus,
}

impl PendingSuggestion {
    /// A freshly posted suggestion awaiting review.
    pub fn new(topic: Topic, author: UserId, card: MessageId) -> Self {
        Self {
            topic,
            author,
            card,
            status: SuggestionStatus::Pending,
        }
    }

    /// Whether a moderator decision is still outstanding.
    pub fn is_pending(&self) -> bool {
        self.status == SuggestionStatus::Pending
    }

    /// Record the moderator decision.
    pub fn finalize(&mut self, status: SuggestionStatus) {
        self.status = status;
    }
}
