//! LinkGold Telegram bot
//!
//! Answers `/start`, `/help` and `/site` with static text and inline buttons
//! that open the LinkGold web app, and acknowledges button presses.

pub mod cli;
pub mod telegram;

pub use telegram::{create_bot, schema, setup_bot_commands, BotLinks, Command, HandlerDeps, HandlerError};
