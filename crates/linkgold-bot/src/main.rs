use anyhow::Result;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use linkgold_bot::cli::Cli;
use linkgold_bot::{create_bot, schema, setup_bot_commands, BotLinks, HandlerDeps};
use linkgold_core::config::{self, bot as bot_config};
use linkgold_core::{init_logger, log_configuration, mask_secret};

/// Entry point for the LinkGold bot
///
/// # Errors
/// Returns an error if logging, the token or the reply links are unusable.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Log panics inside handlers instead of losing them on stderr
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    // Load environment variables before any config static is touched
    let env_file = config::load_env_file(cli.env_file.as_deref());

    init_logger(&config::LOG_LEVEL, config::LOG_FILE_PATH.as_deref())?;

    if let Some(path) = env_file {
        log::info!("Loaded environment from {}", path.display());
    }

    let links = BotLinks::from_config()?;

    log_configuration(
        "LinkGold bot",
        &[
            ("BOT_TOKEN", mask_secret(&bot_config::BOT_TOKEN)),
            ("SITE_URL", links.site_url.to_string()),
            ("CHANNEL_URL", links.channel_url.to_string()),
            ("BOT_API_URL", bot_config::BOT_API_URL.clone().unwrap_or_default()),
        ],
    );

    let bot = create_bot(&bot_config::BOT_TOKEN, bot_config::BOT_API_URL.as_deref())?;

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    log::info!("Starting bot in long polling mode...");

    let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

    Dispatcher::builder(bot, schema(HandlerDeps::new(links)))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
