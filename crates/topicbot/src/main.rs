//! Topicbot - moderated topic suggestions for a Discord community.

use clap::Parser;
use topicbot::{Args, LoggingConfig, init_logging, run};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_logging(&LoggingConfig::from(&args))?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting topicbot");
    run(args).await?;
    Ok(())
}
