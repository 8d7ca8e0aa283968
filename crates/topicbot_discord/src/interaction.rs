//! The `/topic` command and the suggestion modal.

use serenity::builder::{
    CreateActionRow, CreateCommand, CreateCommandOption, CreateInputText,
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateModal,
};
use serenity::model::application::{
    ActionRow, ActionRowComponent, CommandDataOption, CommandOptionType, InputTextStyle,
};
use topicbot_core::Topic;

/// Slash command name.
pub const COMMAND_NAME: &str = "topic";
/// Optional command option carrying the topic text.
pub const TOPIC_OPTION: &str = "topic";
/// Custom id of the suggestion modal.
pub const MODAL_ID: &str = "topic_suggestion";
/// Custom id of the modal's text input.
pub const TOPIC_INPUT: &str = "topic";

/// Guild command definition.
pub fn topic_command() -> CreateCommand {
    CreateCommand::new(COMMAND_NAME)
        .description("Suggest a new topic")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                TOPIC_OPTION,
                "The topic you want to suggest",
            )
            .required(false)
            .max_length(Topic::MAX_CHARS),
        )
}

/// Modal asking for the topic text.
pub fn suggestion_modal() -> CreateModal {
    CreateModal::new(MODAL_ID, "Topic suggestion").components(vec![CreateActionRow::InputText(
        CreateInputText::new(InputTextStyle::Paragraph, "Your topic suggestion", TOPIC_INPUT)
            .placeholder("The topic you want to suggest")
            .max_length(Topic::MAX_CHARS),
    )])
}

/// Private "thinking" response sent before a submission is processed.
pub fn deferred_submission() -> CreateInteractionResponse {
    CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new().ephemeral(true))
}

/// Topic text passed directly as a command option, if any.
pub fn command_topic(options: &[CommandDataOption]) -> Option<&str> {
    options
        .iter()
        .find(|option| option.name == TOPIC_OPTION)
        .and_then(|option| option.value.as_str())
}

/// Topic text submitted through the modal.
///
/// `None` when the modal carries no topic input; an input without a value
/// reads as the empty string.
pub fn modal_topic(rows: &[ActionRow]) -> Option<String> {
    rows.iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == TOPIC_INPUT => {
                Some(input.value.clone().unwrap_or_default())
            }
            _ => None,
        })
}
