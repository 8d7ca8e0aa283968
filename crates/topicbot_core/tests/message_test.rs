//! Tests for the message model.

use topicbot_core::{
    ActionButton, ButtonStyle, COLOR_BLURPLE, COLOR_GREEN, Embed, OutgoingMessage,
    PendingSuggestion, Reply, SuggestionStatus, Topic, TopicRejection, UserId, MessageId, ChannelId,
};

#[test]
fn test_embed_builder_defaults() {
    let embed = Embed::builder().title("Cooldown elapsed").build();
    assert_eq!(embed.title().as_deref(), Some("Cooldown elapsed"));
    assert_eq!(embed.description(), &None);
    assert_eq!(*embed.color(), COLOR_BLURPLE);
    assert!(embed.fields().is_empty());
}

#[test]
fn test_embed_fields_keep_order() {
    let embed = Embed::builder()
        .field("Author", "<@1>")
        .field("Status", "Pending")
        .build()
        .with_field("Extra", "x");
    let names: Vec<_> = embed.fields().iter().map(|f| f.name().as_str()).collect();
    assert_eq!(names, ["Author", "Status", "Extra"]);
}

#[test]
fn test_recolored_keeps_content() {
    let embed = Embed::builder().description("Best board games").build();
    let green = embed.clone().recolored(COLOR_GREEN);
    assert_eq!(green.description(), embed.description());
    assert_eq!(*green.color(), COLOR_GREEN);
}

#[test]
fn test_button_ids_resolve() {
    for button in [ActionButton::Approve, ActionButton::Deny, ActionButton::Retry] {
        assert_eq!(ActionButton::from_custom_id(button.custom_id()), Some(button));
    }
    assert_eq!(ActionButton::from_custom_id("topic_suggestion"), None);
    assert_eq!(ActionButton::Approve.style(), ButtonStyle::Success);
    assert_eq!(ActionButton::Deny.style(), ButtonStyle::Danger);
}

#[test]
fn test_outgoing_message_composition() {
    let message = OutgoingMessage::embed(Embed::builder().build())
        .with_content("Thanks <@7>")
        .mentioning(UserId(7))
        .with_button(ActionButton::Approve);
    assert_eq!(message.content().as_deref(), Some("Thanks <@7>"));
    assert_eq!(message.mentions(), &[UserId(7)]);
    assert_eq!(message.buttons(), &[ActionButton::Approve]);
}

#[test]
fn test_reply_visibility() {
    assert!(*Reply::private(Embed::builder().build()).ephemeral());
    assert!(!*Reply::public(Embed::builder().build()).ephemeral());
}

#[test]
fn test_mentions() {
    assert_eq!(UserId(42).mention(), "<@42>");
    assert_eq!(ChannelId(9).mention(), "<#9>");
}

#[test]
fn test_suggestion_status_transitions() {
    let topic = Topic::parse("Best board games").expect("valid topic");
    let mut suggestion = PendingSuggestion::new(topic, UserId(1), MessageId(2));
    assert!(suggestion.is_pending());
    suggestion.finalize(SuggestionStatus::Approved);
    assert!(!suggestion.is_pending());
    assert_eq!(*suggestion.status(), SuggestionStatus::Approved);
}

#[test]
fn test_topic_length_limit() {
    let max = usize::from(Topic::MAX_CHARS);
    let at_limit = "é".repeat(max);
    assert_eq!(Topic::parse(&at_limit).expect("fits").as_str(), at_limit);

    let padded = format!("  {}  ", "a".repeat(max));
    assert!(Topic::parse(&padded).is_ok());

    assert_eq!(
        Topic::parse(&"a".repeat(max + 1)),
        Err(TopicRejection::TooLong {
            length: max + 1,
            max
        })
    );
    assert_eq!(Topic::parse("   "), Err(TopicRejection::Empty));
}
