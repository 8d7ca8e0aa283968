//! Wiring of configuration, state, workflow, clock and Discord client.

use crate::Args;
use std::sync::Arc;
use tokio::sync::watch;
use topicbot_core::{SystemClock, TopicbotConfig};
use topicbot_discord::{SerenityPlatform, TopicBot, TopicHandler};
use topicbot_error::TopicbotResult;
use topicbot_state::JsonCooldownStore;
use topicbot_workflow::{CooldownClock, SuggestionWorkflow, WorkflowSettings};
use tracing::{debug, error, info, instrument, warn};

/// Load and validate the configuration named by `args`, applying the
/// `--state` override.
///
/// # Errors
///
/// Returns error if the file cannot be read or parsed, or fails validation.
#[instrument(skip(args), fields(config_file = %args.config.display()))]
pub fn load_config(args: &Args) -> TopicbotResult<TopicbotConfig> {
    let mut config = TopicbotConfig::from_file(&args.config)?;
    if let Some(state) = &args.state {
        config = config.with_state_file(state);
    }
    config.validate()?;

    info!(
        guild_id = %config.guild(),
        submission_channel = %config.submission_channel(),
        review_channel = %config.review_channel(),
        cooldown = %config.cooldown_window(),
        state_file = %config.state_file().display(),
        "Configuration loaded"
    );
    Ok(config)
}

/// Report what the bot would start with, without connecting.
///
/// An unreadable cooldown record is reported but is not fatal: the bot
/// starts with submissions open in that case.
#[instrument(skip_all)]
pub async fn check_config(config: &TopicbotConfig, token: Option<String>) {
    let store = JsonCooldownStore::new(config.state_file());
    match store.read_record().await {
        Ok(cooldown) => match cooldown.deadline() {
            Some(deadline) => info!(%deadline, "Cooldown active"),
            None => info!("No cooldown active"),
        },
        Err(e) => warn!(
            error = %e,
            "Cooldown record unusable, bot would start with submissions open"
        ),
    }
    match config.resolve_token(token) {
        Ok(_) => info!("Bot token available"),
        Err(e) => warn!(error = %e, "Bot token missing"),
    }
    info!("Configuration check complete");
}

/// Run the bot until Ctrl-C.
///
/// # Errors
///
/// Returns error on invalid configuration, a missing token, or a gateway
/// failure.
pub async fn run(args: Args) -> TopicbotResult<()> {
    let config = load_config(&args)?;

    if args.check_config {
        check_config(&config, args.token).await;
        return Ok(());
    }

    let token = config.resolve_token(args.token)?;
    let store = Arc::new(JsonCooldownStore::new(config.state_file()));
    let platform = Arc::new(SerenityPlatform::new(&token));
    let workflow = SuggestionWorkflow::restore(
        WorkflowSettings::from(&config),
        platform,
        store,
        Arc::new(SystemClock),
    )
    .await;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let clock = tokio::spawn(
        CooldownClock::new(workflow.clone(), config.check_interval()).run(shutdown_rx),
    );

    let mut bot = TopicBot::new(&token, TopicHandler::new(workflow, config.guild())).await?;
    let shards = bot.shard_manager();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown requested"),
            Err(e) => error!(error = %e, "Failed to listen for Ctrl-C, shutting down"),
        }
        shards.shutdown_all().await;
    });

    let result = bot.start().await;

    if shutdown_tx.send(true).is_err() {
        debug!("Cooldown clock already stopped");
    }
    if let Err(e) = clock.await {
        error!(error = %e, "Cooldown clock task failed");
    }

    result?;
    info!("Topicbot stopped");
    Ok(())
}
