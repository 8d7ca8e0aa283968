//! Command line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the bot.
#[derive(Parser, Debug, Clone)]
#[command(name = "topicbot")]
#[command(about = "Moderated topic suggestions with a cooldown")]
#[command(version)]
pub struct Args {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Path to the cooldown record (overrides `state_file`)
    #[arg(long)]
    pub state: Option<PathBuf>,

    /// Discord bot token (overrides `token` in the configuration)
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Validate the configuration and state file, then exit
    #[arg(long)]
    pub check_config: bool,
}
