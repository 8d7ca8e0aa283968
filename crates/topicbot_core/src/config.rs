//! Static bot configuration.

use crate::{ChannelId, CooldownWindow, GuildId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use topicbot_error::ConfigError;
use tracing::debug;

/// Cooldown length as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct CooldownConfig {
    /// Hours part.
    #[serde(default)]
    hours: u32,
    /// Minutes part.
    #[serde(default)]
    minutes: u32,
    /// Seconds part.
    #[serde(default)]
    seconds: u32,
}

impl CooldownConfig {
    /// Create a cooldown configuration.
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Collapse into a single window.
    pub fn window(&self) -> CooldownWindow {
        CooldownWindow::from_parts(self.hours, self.minutes, self.seconds)
    }
}

/// Configuration loaded once at startup from a JSON file.
///
/// ```json
/// {
///   "guild_id": 1234,
///   "on_topic_channel": 5678,
///   "review_channel": 9012,
///   "cooldown": { "hours": 12, "minutes": 0, "seconds": 0 },
///   "token": "..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicbotConfig {
    guild_id: u64,
    on_topic_channel: u64,
    review_channel: u64,
    #[serde(default)]
    cooldown: CooldownConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default = "default_state_file")]
    state_file: PathBuf,
    #[serde(default = "default_check_interval")]
    check_interval_seconds: u64,
}

fn default_state_file() -> PathBuf {
    PathBuf::from("state.json")
}

fn default_check_interval() -> u64 {
    10
}

impl TopicbotConfig {
    /// Build a configuration in code (defaults for state file and interval).
    pub fn new(
        guild: GuildId,
        submission_channel: ChannelId,
        review_channel: ChannelId,
        cooldown: CooldownConfig,
    ) -> Self {
        Self {
            guild_id: guild.0,
            on_topic_channel: submission_channel.0,
            review_channel: review_channel.0,
            cooldown,
            token: None,
            state_file: default_state_file(),
            check_interval_seconds: default_check_interval(),
        }
    }

    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading configuration");
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    /// Parse configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not valid configuration.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Reject configurations the bot cannot run with.
    ///
    /// # Errors
    ///
    /// Returns error on zero ids, identical submission and review channels,
    /// a cooldown longer than `CooldownWindow::MAX_DAYS`, or a zero check
    /// interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, id) in [
            ("guild_id", self.guild_id),
            ("on_topic_channel", self.on_topic_channel),
            ("review_channel", self.review_channel),
        ] {
            if id == 0 {
                return Err(ConfigError::new(format!("{} must be a non-zero id", name)));
            }
        }
        if self.on_topic_channel == self.review_channel {
            return Err(ConfigError::new(
                "on_topic_channel and review_channel must differ",
            ));
        }
        if self.cooldown.window().exceeds_limit() {
            return Err(ConfigError::new(format!(
                "cooldown must not exceed {} days",
                CooldownWindow::MAX_DAYS
            )));
        }
        if self.check_interval_seconds == 0 {
            return Err(ConfigError::new("check_interval_seconds must be positive"));
        }
        Ok(())
    }

    /// Community the bot serves.
    pub fn guild(&self) -> GuildId {
        GuildId(self.guild_id)
    }

    /// Channel where members submit topics and approvals are announced.
    pub fn submission_channel(&self) -> ChannelId {
        ChannelId(self.on_topic_channel)
    }

    /// Channel where moderators review suggestions.
    pub fn review_channel(&self) -> ChannelId {
        ChannelId(self.review_channel)
    }

    /// Cooldown length as configured.
    pub fn cooldown(&self) -> &CooldownConfig {
        &self.cooldown
    }

    /// Cooldown length as a single window.
    pub fn cooldown_window(&self) -> CooldownWindow {
        self.cooldown.window()
    }

    /// Token from the config file, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Pick the bot token: explicit override first, then the config file.
    ///
    /// # Errors
    ///
    /// Returns error if neither provides a non-empty token.
    pub fn resolve_token(&self, overridden: Option<String>) -> Result<String, ConfigError> {
        let usable = |token: &String| !token.trim().is_empty();
        overridden
            .filter(usable)
            .or_else(|| self.token.clone().filter(usable))
            .ok_or_else(|| {
                ConfigError::new("No bot token: pass --token, set DISCORD_TOKEN, or add \"token\"")
            })
    }

    /// Path of the durable cooldown record.
    pub fn state_file(&self) -> &Path {
        &self.state_file
    }

    /// Replace the state file path.
    pub fn with_state_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_file = path.into();
        self
    }

    /// How often the cooldown clock checks the deadline.
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_seconds)
    }

    /// Replace the clock interval.
    pub fn with_check_interval(mut self, interval: Duration) -> Self {
        self.check_interval_seconds = interval.as_secs().max(1);
        self
    }
}
