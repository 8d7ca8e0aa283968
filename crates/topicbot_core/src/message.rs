//! Platform-neutral message model.
//!
//! The workflow renders everything it says into these types; the platform
//! adapter converts them into its own builders.

use crate::UserId;
use derive_getters::Getters;

/// Approved topics and acknowledgements.
pub const COLOR_GREEN: u32 = 0x57F287;
/// Denials and rejected submissions.
pub const COLOR_RED: u32 = 0xED4245;
/// Review cards and cooldown notices.
pub const COLOR_BLURPLE: u32 = 0x7289DA;

/// A name/value pair shown inside an embed.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct EmbedField {
    /// Field heading.
    name: String,
    /// Field body.
    value: String,
}

impl EmbedField {
    /// Create a field.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Rich message block with title, description, color and fields.
///
/// # Examples
///
/// ```
/// use topicbot_core::{COLOR_RED, Embed};
///
/// let embed = Embed::builder()
///     .description("You have to actually suggest a topic!")
///     .color(COLOR_RED)
///     .build();
/// assert!(embed.title().is_none());
/// assert_eq!(*embed.color(), COLOR_RED);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(pattern = "owned", setter(into), build_fn(skip))]
pub struct Embed {
    /// Bold heading.
    #[builder(setter(into, strip_option))]
    title: Option<String>,
    /// Main text.
    #[builder(setter(into, strip_option))]
    description: Option<String>,
    /// Side bar color (RGB).
    color: u32,
    /// Additional name/value fields.
    #[builder(setter(custom))]
    fields: Vec<EmbedField>,
}

impl Embed {
    /// Start building an embed.
    pub fn builder() -> EmbedBuilder {
        EmbedBuilder::default()
    }

    /// Same embed with a different color.
    pub fn recolored(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    /// Same embed with an extra field appended.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField::new(name, value));
        self
    }
}

impl EmbedBuilder {
    /// Append a field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .get_or_insert_with(Vec::new)
            .push(EmbedField::new(name, value));
        self
    }

    /// Finish the embed. Color defaults to blurple.
    pub fn build(self) -> Embed {
        Embed {
            title: self.title.flatten(),
            description: self.description.flatten(),
            color: self.color.unwrap_or(COLOR_BLURPLE),
            fields: self.fields.unwrap_or_default(),
        }
    }
}

/// Visual style of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonStyle {
    /// Blurple.
    Primary,
    /// Green.
    Success,
    /// Red.
    Danger,
}

/// The buttons the bot attaches to its messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionButton {
    /// Moderator accepts the suggestion on a review card.
    Approve,
    /// Moderator rejects the suggestion on a review card.
    Deny,
    /// Submitter reopens the suggestion form after an empty submission.
    Retry,
}

impl ActionButton {
    /// Component id carried by the button.
    pub fn custom_id(&self) -> &'static str {
        match self {
            Self::Approve => "btn_approve",
            Self::Deny => "btn_deny",
            Self::Retry => "btn_retry",
        }
    }

    /// Resolve a component id back into a button.
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        match custom_id {
            "btn_approve" => Some(Self::Approve),
            "btn_deny" => Some(Self::Deny),
            "btn_retry" => Some(Self::Retry),
            _ => None,
        }
    }

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Deny => "Deny",
            Self::Retry => "Try again",
        }
    }

    /// Button style.
    pub fn style(&self) -> ButtonStyle {
        match self {
            Self::Approve => ButtonStyle::Success,
            Self::Deny => ButtonStyle::Danger,
            Self::Retry => ButtonStyle::Primary,
        }
    }
}

/// A channel message to send, or the full replacement content of an edit.
///
/// Only users listed in `mentions` may be pinged by the message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct OutgoingMessage {
    /// Plain text above the embeds.
    content: Option<String>,
    /// Embeds, in order.
    embeds: Vec<Embed>,
    /// Buttons, rendered in a single row. Empty removes all buttons on edit.
    buttons: Vec<ActionButton>,
    /// Users allowed to be pinged.
    mentions: Vec<UserId>,
}

impl OutgoingMessage {
    /// Message consisting of one embed.
    pub fn embed(embed: Embed) -> Self {
        Self {
            embeds: vec![embed],
            ..Self::default()
        }
    }

    /// Message consisting of plain text.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Set the plain text.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Attach a button.
    pub fn with_button(mut self, button: ActionButton) -> Self {
        self.buttons.push(button);
        self
    }

    /// Allow `user` to be pinged.
    pub fn mentioning(mut self, user: UserId) -> Self {
        self.mentions.push(user);
        self
    }
}

/// Response to an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Reply {
    /// Response body.
    embed: Embed,
    /// Visible only to the acting user.
    ephemeral: bool,
    /// Buttons offered with the response.
    buttons: Vec<ActionButton>,
}

impl Reply {
    /// Response visible only to the acting user.
    pub fn private(embed: Embed) -> Self {
        Self {
            embed,
            ephemeral: true,
            buttons: Vec::new(),
        }
    }

    /// Response visible to the whole channel.
    pub fn public(embed: Embed) -> Self {
        Self {
            embed,
            ephemeral: false,
            buttons: Vec::new(),
        }
    }

    /// Offer a button with the response.
    pub fn with_button(mut self, button: ActionButton) -> Self {
        self.buttons.push(button);
        self
    }
}
