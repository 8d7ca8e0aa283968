//! Everything the bot says, as platform-neutral messages.

use chrono::Duration;
use topicbot_core::{
    ActionButton, COLOR_BLURPLE, COLOR_GREEN, COLOR_RED, ChannelId, CooldownWindow, Embed,
    OutgoingMessage, PendingSuggestion, Reply, SuggestionStatus, Topic, TopicRejection, UserId,
};

/// Review card posted to moderators, with Approve/Deny buttons.
pub fn review_card(topic: &Topic, author: UserId) -> OutgoingMessage {
    OutgoingMessage::embed(card_embed(topic, author))
        .with_button(ActionButton::Approve)
        .with_button(ActionButton::Deny)
}

/// Review card after the decision: recolored, status field added, no buttons.
pub fn finalized_card(suggestion: &PendingSuggestion) -> OutgoingMessage {
    let color = match suggestion.status() {
        SuggestionStatus::Approved => COLOR_GREEN,
        SuggestionStatus::Denied => COLOR_RED,
        SuggestionStatus::Pending => COLOR_BLURPLE,
    };
    OutgoingMessage::embed(
        card_embed(suggestion.topic(), *suggestion.author())
            .recolored(color)
            .with_field("Status", suggestion.status().to_string()),
    )
}

fn card_embed(topic: &Topic, author: UserId) -> Embed {
    Embed::builder()
        .title("New discussion Topic")
        .description(topic.as_str())
        .color(COLOR_BLURPLE)
        .field("Author", author.mention())
        .build()
}

/// Private acknowledgement for the submitter.
pub fn submission_ack() -> Reply {
    Reply::private(
        Embed::builder()
            .title("Your topic was sent to review.")
            .color(COLOR_GREEN)
            .build(),
    )
}

/// Empty or whitespace-only topic, with a retry button.
pub fn empty_topic() -> Reply {
    Reply::private(
        Embed::builder()
            .description("You have to actually suggest a topic!")
            .color(COLOR_RED)
            .build(),
    )
    .with_button(ActionButton::Retry)
}

/// Topic that is too long to become a channel topic, with a retry button.
pub fn topic_too_long(length: usize, max: usize) -> Reply {
    Reply::private(
        Embed::builder()
            .description(format!(
                "Your topic is {} characters long. Please keep it to {} characters or fewer.",
                length, max
            ))
            .color(COLOR_RED)
            .build(),
    )
    .with_button(ActionButton::Retry)
}

/// Reply for text that did not parse as a topic.
pub fn rejected_topic(rejection: TopicRejection) -> Reply {
    match rejection {
        TopicRejection::Empty => empty_topic(),
        TopicRejection::TooLong { length, max } => topic_too_long(length, max),
    }
}

/// Submission attempted outside the submission channel.
pub fn wrong_channel(submission_channel: ChannelId) -> Reply {
    Reply::private(
        Embed::builder()
            .description(format!(
                "You can only use this command in the {} channel.",
                submission_channel.mention()
            ))
            .color(COLOR_RED)
            .build(),
    )
}

/// Submission attempted during a cooldown.
pub fn on_cooldown(remaining: Option<Duration>) -> Reply {
    let description = match remaining {
        Some(left) => format!(
            "Topic suggestion is still on cooldown. Try again in {}.",
            CooldownWindow::from(left)
        ),
        None => "Topic suggestion is still on cooldown.".to_string(),
    };
    Reply::private(
        Embed::builder()
            .description(description)
            .color(COLOR_RED)
            .build(),
    )
}

/// Submission attempted while another suggestion awaits review.
pub fn review_busy() -> Reply {
    Reply::private(
        Embed::builder()
            .description("A topic suggestion is already awaiting review.")
            .color(COLOR_RED)
            .build(),
    )
}

/// Moderator clicked a card that is not the suggestion under review.
pub fn not_pending() -> Reply {
    Reply::private(
        Embed::builder()
            .description("This suggestion is no longer pending.")
            .color(COLOR_RED)
            .build(),
    )
}

/// Public announcement of the approved topic, pinging only its author.
pub fn approval_announcement(suggestion: &PendingSuggestion) -> OutgoingMessage {
    let author = *suggestion.author();
    OutgoingMessage::embed(
        Embed::builder()
            .title("New Topic")
            .description(format!(
                "**{}**\n\nTopic suggestions are now on cooldown!",
                suggestion.topic()
            ))
            .color(COLOR_GREEN)
            .build(),
    )
    .with_content(format!(
        "Thanks {} for suggesting the new topic!",
        author.mention()
    ))
    .mentioning(author)
}

/// Channel topic text for an approved topic.
pub fn channel_topic(topic: &Topic) -> String {
    format!("Current discussion topic: {}", topic)
}

/// Moderator acknowledgement after approving.
pub fn approved_ack(topic: &Topic, moderator: UserId) -> Reply {
    Reply::public(
        Embed::builder()
            .title("Topic approved")
            .description(format!("{}\n\nApproved by {}", topic, moderator.mention()))
            .color(COLOR_GREEN)
            .build(),
    )
}

/// Moderator acknowledgement after denying.
pub fn denied_ack(topic: &Topic, moderator: UserId) -> Reply {
    Reply::public(
        Embed::builder()
            .title("Topic denied")
            .description(format!("{}\n\nDenied by {}", topic, moderator.mention()))
            .color(COLOR_RED)
            .build(),
    )
}

/// Tells the author their topic was rejected.
pub fn denial_notice(suggestion: &PendingSuggestion) -> OutgoingMessage {
    let author = *suggestion.author();
    OutgoingMessage::text(format!(
        "Hey {}! Your topic \"{}\" has been rejected.",
        author.mention(),
        suggestion.topic()
    ))
    .mentioning(author)
}

/// Posted to moderators when the cooldown ends.
pub fn cooldown_elapsed() -> OutgoingMessage {
    OutgoingMessage::embed(
        Embed::builder()
            .title("Cooldown elapsed")
            .color(COLOR_BLURPLE)
            .build(),
    )
}

/// Posted to members when the cooldown ends.
pub fn submissions_open() -> OutgoingMessage {
    OutgoingMessage::embed(
        Embed::builder()
            .title("Topic submissions are now open")
            .description("use /topic to submit a new topic")
            .color(COLOR_BLURPLE)
            .build(),
    )
}

/// The interaction could not be handled.
pub fn internal_failure() -> Reply {
    Reply::private(
        Embed::builder()
            .description("Something went wrong. Please try again later.")
            .color(COLOR_RED)
            .build(),
    )
}
