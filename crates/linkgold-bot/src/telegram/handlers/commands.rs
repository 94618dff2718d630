//! Command and callback handler implementations (/start, /help, /site, button presses)

use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, ParseMode};

use crate::telegram::bot::Command;
use crate::telegram::replies::{reply_for, BotLinks};

/// Sends the static reply for `command` to `chat_id`
pub async fn send_command_reply(
    bot: &Bot,
    chat_id: ChatId,
    command: Command,
    links: &BotLinks,
) -> ResponseResult<Message> {
    let reply = reply_for(command, links);

    bot.send_message(chat_id, reply.text)
        .parse_mode(ParseMode::Html)
        .reply_markup(reply.keyboard)
        .await
}

/// Acknowledges a button press so the client stops its loading spinner
pub async fn answer_callback(bot: &Bot, query: &CallbackQuery) -> ResponseResult<()> {
    log::debug!(
        "Callback query from user {}: {:?}",
        query.from.id,
        query.data.as_deref().unwrap_or_default()
    );
    bot.answer_callback_query(query.id.clone()).await?;
    Ok(())
}
