//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Message};

use super::commands::{answer_callback, send_command_reply};
use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::Command;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// # Arguments
/// * `deps` - Handler dependencies (reply links)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry()
        .branch(command_handler(deps))
        .branch(web_app_data_handler())
        .branch(callback_handler())
}

/// Handler for /start, /help and /site
///
/// Send failures are logged and swallowed so one bad chat cannot stop the dispatcher.
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("🎯 Received command: {:?} from chat {}", cmd, msg.chat.id);

                match send_command_reply(&bot, msg.chat.id, cmd, &deps.links).await {
                    Ok(_) => log::info!("✅ Reply to {:?} sent to chat {}", cmd, msg.chat.id),
                    Err(e) => log::error!("❌ Failed to reply to {:?} in chat {}: {}", cmd, msg.chat.id, e),
                }
                Ok(())
            }
        },
    ))
}

/// Handler for data sent back from the Web App; logged only
fn web_app_data_handler() -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.web_app_data().is_some())
        .endpoint(|msg: Message| async move {
            if let Some(web_app_data) = msg.web_app_data() {
                log::info!(
                    "Received web_app_data from chat {}: {}",
                    msg.chat.id,
                    web_app_data.data
                );
            }
            Ok(())
        })
}

/// Handler for callback queries (inline keyboard buttons)
fn callback_handler() -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(|bot: Bot, q: CallbackQuery| async move {
        if let Err(e) = answer_callback(&bot, &q).await {
            log::error!("Failed to answer callback query {:?}: {}", q.id, e);
        }
        Ok(())
    })
}
