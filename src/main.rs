use culway_bot::config::{BotConfig, SettingsError};
use culway_bot::logging::init_logging;
use culway_bot::runner::run_bot;
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenv().ok();

    init_logging().map_err(|e| {
        eprintln!("Failed to compile regex patterns: {e}");
        e
    })?;

    info!("Starting CulWay bot...");

    let config = init_config()?;

    run_bot(config).await?;

    Ok(())
}

fn init_config() -> Result<Arc<BotConfig>, SettingsError> {
    let config = BotConfig::load().inspect_err(|e| {
        error!("Failed to load configuration: {}", e);
    })?;
    info!(?config, "Configuration loaded successfully.");
    Ok(Arc::new(config))
}
