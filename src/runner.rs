use crate::bot::handlers::schema;
use crate::bot::views::{DefaultLaunchView, LaunchView, OPEN_APP_COMMAND};
use crate::bot::{ReplyEmitter, ReplySink, TelegramReplySink};
use crate::config::BotConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::info;

/// Run the bot until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the command menu cannot be published.
pub async fn run_bot(config: Arc<BotConfig>) -> Result<()> {
    let bot = create_bot(&config);

    if config.register_commands {
        setup_bot_commands(&bot)
            .await
            .context("Failed to register bot commands")?;
        info!("Bot commands registered.");
    }

    let emitter = init_emitter(&bot, &config);
    info!(webapp_url = %config.webapp_url, "Bot is running...");

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![emitter])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Bot stopped.");
    Ok(())
}

/// Create the Bot API client, honouring a custom server URL.
#[must_use]
pub fn create_bot(config: &BotConfig) -> Bot {
    let bot = Bot::new(config.telegram_token.clone());
    match &config.bot_api_url {
        Some(url) => {
            info!("Using custom Bot API URL: {}", url);
            bot.set_api_url(url.clone())
        }
        None => bot,
    }
}

fn init_emitter(bot: &Bot, config: &BotConfig) -> Arc<ReplyEmitter> {
    let sink: Arc<dyn ReplySink> = Arc::new(TelegramReplySink::new(bot.clone()));
    Arc::new(ReplyEmitter::new(sink, config.webapp_url.clone()))
}

/// Commands shown in the Telegram command menu
#[must_use]
pub fn menu_commands() -> Vec<BotCommand> {
    vec![
        BotCommand::new("start", DefaultLaunchView::start_description()),
        BotCommand::new(
            OPEN_APP_COMMAND.trim_start_matches('/'),
            DefaultLaunchView::open_app_description(),
        ),
    ]
}

/// Publish the command menu.
///
/// # Errors
///
/// Returns the Bot API error if the request fails.
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(menu_commands()).await?;
    Ok(())
}
