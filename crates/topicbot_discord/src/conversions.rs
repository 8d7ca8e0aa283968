//! Conversions from the platform-neutral message model into serenity builders,
//! and from serenity request failures back into platform errors.
//!
//! Ids are checked on the way out: Discord snowflakes are never zero, and
//! serenity's id constructors panic on zero, so a zero id becomes
//! `PlatformErrorKind::InvalidId` instead.

use serenity::builder::{
    CreateActionRow, CreateAllowedMentions, CreateButton, CreateEmbed,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, CreateMessage,
    EditInteractionResponse, EditMessage,
};
use serenity::http::HttpError;
use serenity::model::application::ButtonStyle as SerenityButtonStyle;
use serenity::model::id::{
    ChannelId as SerenityChannelId, GuildId as SerenityGuildId, MessageId as SerenityMessageId,
    UserId as SerenityUserId,
};
use std::num::NonZeroU64;
use topicbot_core::{
    ActionButton, ButtonStyle, ChannelId, Embed, GuildId, MessageId, OutgoingMessage, Reply,
    UserId,
};
use topicbot_error::{PlatformError, PlatformErrorKind, PlatformResult};

#[track_caller]
fn non_zero(id: u64, what: &str) -> PlatformResult<NonZeroU64> {
    NonZeroU64::new(id).ok_or_else(|| {
        PlatformError::new(PlatformErrorKind::InvalidId(format!("{} id must not be 0", what)))
    })
}

/// Convert a guild id.
///
/// # Errors
///
/// Returns `InvalidId` for a zero id.
#[track_caller]
pub fn guild_id(id: GuildId) -> PlatformResult<SerenityGuildId> {
    non_zero(id.0, "guild").map(SerenityGuildId::from)
}

/// Convert a channel id.
///
/// # Errors
///
/// Returns `InvalidId` for a zero id.
#[track_caller]
pub fn channel_id(id: ChannelId) -> PlatformResult<SerenityChannelId> {
    non_zero(id.0, "channel").map(SerenityChannelId::from)
}

/// Convert a message id.
///
/// # Errors
///
/// Returns `InvalidId` for a zero id.
#[track_caller]
pub fn message_id(id: MessageId) -> PlatformResult<SerenityMessageId> {
    non_zero(id.0, "message").map(SerenityMessageId::from)
}

/// Convert a user id.
///
/// # Errors
///
/// Returns `InvalidId` for a zero id.
#[track_caller]
pub fn user_id(id: UserId) -> PlatformResult<SerenityUserId> {
    non_zero(id.0, "user").map(SerenityUserId::from)
}

/// Build a serenity embed.
pub fn embed(embed: &Embed) -> CreateEmbed {
    let mut out = CreateEmbed::new().colour(*embed.color());
    if let Some(title) = embed.title() {
        out = out.title(title);
    }
    if let Some(description) = embed.description() {
        out = out.description(description);
    }
    for field in embed.fields() {
        out = out.field(field.name(), field.value(), false);
    }
    out
}

fn button_style(style: ButtonStyle) -> SerenityButtonStyle {
    match style {
        ButtonStyle::Primary => SerenityButtonStyle::Primary,
        ButtonStyle::Success => SerenityButtonStyle::Success,
        ButtonStyle::Danger => SerenityButtonStyle::Danger,
    }
}

/// Build a serenity button.
pub fn button(button: ActionButton) -> CreateButton {
    CreateButton::new(button.custom_id())
        .label(button.label())
        .style(button_style(button.style()))
}

/// Lay buttons out in a single action row. No buttons means no rows.
pub fn button_rows(buttons: &[ActionButton]) -> Vec<CreateActionRow> {
    if buttons.is_empty() {
        return Vec::new();
    }
    vec![CreateActionRow::Buttons(
        buttons.iter().copied().map(button).collect(),
    )]
}

/// Build a new channel message.
///
/// Mentions are parsed for the listed users only.
///
/// # Errors
///
/// Returns `InvalidId` if a mentioned user id is zero.
#[track_caller]
pub fn create_message(message: &OutgoingMessage) -> PlatformResult<CreateMessage> {
    let users = message
        .mentions()
        .iter()
        .map(|user| user_id(*user))
        .collect::<PlatformResult<Vec<_>>>()?;

    let mut out = CreateMessage::new()
        .embeds(message.embeds().iter().map(embed).collect())
        .components(button_rows(message.buttons()))
        .allowed_mentions(CreateAllowedMentions::new().users(users));
    if let Some(content) = message.content() {
        out = out.content(content);
    }
    Ok(out)
}

/// Build an edit replacing the embeds and buttons of an existing message.
pub fn edit_message(update: &OutgoingMessage) -> EditMessage {
    let mut out = EditMessage::new()
        .embeds(update.embeds().iter().map(embed).collect())
        .components(button_rows(update.buttons()));
    if let Some(content) = update.content() {
        out = out.content(content);
    }
    out
}

/// Build an interaction response message.
pub fn reply_message(reply: &Reply) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .embed(embed(reply.embed()))
        .ephemeral(*reply.ephemeral())
        .components(button_rows(reply.buttons()))
}

/// Build the edit that fills in a deferred interaction response.
///
/// Visibility was fixed when the response was deferred.
pub fn edit_response(reply: &Reply) -> EditInteractionResponse {
    EditInteractionResponse::new()
        .embed(embed(reply.embed()))
        .components(button_rows(reply.buttons()))
}

/// Build a followup message answering an acknowledged interaction.
pub fn followup(reply: &Reply) -> CreateInteractionResponseFollowup {
    CreateInteractionResponseFollowup::new()
        .embed(embed(reply.embed()))
        .ephemeral(*reply.ephemeral())
        .components(button_rows(reply.buttons()))
}

/// Discord JSON error code for an unknown channel.
pub const UNKNOWN_CHANNEL: isize = 10003;
/// Discord JSON error code for an unknown message.
pub const UNKNOWN_MESSAGE: isize = 10008;

/// Error kind for a Discord "unknown resource" code, if `code` is one.
pub fn missing_resource(
    code: isize,
    channel: ChannelId,
    message: Option<MessageId>,
) -> Option<PlatformErrorKind> {
    match (code, message) {
        (UNKNOWN_CHANNEL, _) => Some(PlatformErrorKind::ChannelNotFound(channel.0)),
        (UNKNOWN_MESSAGE, Some(message)) => Some(PlatformErrorKind::MessageNotFound(message.0)),
        _ => None,
    }
}

/// Convert a failed request against `channel`, and `message` if it targeted one.
///
/// Unknown channel and unknown message rejections keep the requested id;
/// everything else goes through `PlatformError::from`.
#[track_caller]
pub fn request_error(
    err: serenity::Error,
    channel: ChannelId,
    message: Option<MessageId>,
) -> PlatformError {
    let code = match &err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            Some(response.error.code)
        }
        _ => None,
    };
    match code.and_then(|code| missing_resource(code, channel, message)) {
        Some(kind) => PlatformError::new(kind),
        None => PlatformError::from(err),
    }
}
