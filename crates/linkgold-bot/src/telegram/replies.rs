//! Static replies for the bot commands
//!
//! Every reply is a pure function of [`BotLinks`]: no user state, no I/O.

use indoc::indoc;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, WebAppInfo};
use url::Url;

use linkgold_core::config;
use linkgold_core::AppResult;

use super::bot::Command;

const START_TEXT: &str = indoc! {"
    🚀 <b>LinkGold - биржа заданий и заработок для Telegram звёзд!</b> 🌟

    <b>О КОМПАНИИ:</b>
    LinkGold - современная платформа, которая объединяет бренды и популярных создателей контента в Telegram. Мы строим мост между бизнесом и талантливыми авторами!

    📊 <b>Для создателей контента:</b>
    • Выполняйте задания от брендов
    • Зарабатывайте на своём Telegram-канале
    • Получайте стабильный доход
    • Работайте с известными компаниями

    🏢 <b>Для брендов:</b>
    • Находите подходящих авторов для рекламы
    • Размещайте задания напрямую
    • Анализируйте результаты кампаний
    • Увеличивайте охват аудитории

    <b>ПРЕИМУЩЕСТВА LINKGOLD:</b>
    ✅ Прозрачная система расчётов
    ✅ Быстрый вывод средств
    ✅ Поддержка 24/7
    ✅ Гарантия качества выполнения заданий
    ✅ Безопасные сделки

    Присоединяйтесь к сообществу LinkGold и начните зарабатывать уже сегодня! 🎯
"};

const HELP_TEXT: &str = indoc! {"
    ℹ️ <b>Команды бота LinkGold</b>

    /start - что такое LinkGold
    /site - открыть сайт
    /help - это сообщение

    Все задания, баланс и вывод средств доступны на сайте LinkGold прямо внутри Telegram.
"};

const SITE_TEXT: &str = indoc! {"
    🌐 <b>Сайт LinkGold</b>

    Откройте биржу заданий прямо в Telegram - кнопка ниже.
    Если кнопка не открывается, воспользуйтесь обычной ссылкой.
"};

const OPEN_SITE_BUTTON: &str = "🌐 Открыть сайт в Telegram";
const SITE_LINK_BUTTON: &str = "🔗 Открыть в браузере";
const CHANNEL_BUTTON: &str = "📢 Подписаться на канал";

/// Links the replies point at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotLinks {
    pub site_url: Url,
    pub channel_url: Url,
}

impl BotLinks {
    pub fn new(site_url: &str, channel_url: &str) -> AppResult<Self> {
        Ok(Self {
            site_url: Url::parse(site_url)?,
            channel_url: Url::parse(channel_url)?,
        })
    }

    /// Reads SITE_URL and CHANNEL_URL
    pub fn from_config() -> AppResult<Self> {
        Self::new(&config::bot::SITE_URL, &config::bot::CHANNEL_URL)
    }
}

/// Text (HTML parse mode) plus inline keyboard
#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub keyboard: InlineKeyboardMarkup,
}

/// Reply to `/start`: project description, site and channel buttons
pub fn start_reply(links: &BotLinks) -> Reply {
    Reply {
        text: START_TEXT.to_string(),
        keyboard: InlineKeyboardMarkup::new(vec![vec![open_site_button(links)], vec![channel_button(links)]]),
    }
}

/// Reply to `/help`: command list and the site button
pub fn help_reply(links: &BotLinks) -> Reply {
    Reply {
        text: HELP_TEXT.to_string(),
        keyboard: InlineKeyboardMarkup::new(vec![vec![open_site_button(links)]]),
    }
}

/// Reply to `/site`: Web App button plus a plain link for clients without Web App support
pub fn site_reply(links: &BotLinks) -> Reply {
    Reply {
        text: SITE_TEXT.to_string(),
        keyboard: InlineKeyboardMarkup::new(vec![
            vec![open_site_button(links)],
            vec![InlineKeyboardButton::url(SITE_LINK_BUTTON, links.site_url.clone())],
        ]),
    }
}

pub fn reply_for(command: Command, links: &BotLinks) -> Reply {
    match command {
        Command::Start => start_reply(links),
        Command::Help => help_reply(links),
        Command::Site => site_reply(links),
    }
}

fn open_site_button(links: &BotLinks) -> InlineKeyboardButton {
    InlineKeyboardButton::web_app(
        OPEN_SITE_BUTTON,
        WebAppInfo {
            url: links.site_url.clone(),
        },
    )
}

fn channel_button(links: &BotLinks) -> InlineKeyboardButton {
    InlineKeyboardButton::url(CHANNEL_BUTTON, links.channel_url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use teloxide::types::InlineKeyboardButtonKind;

    /// Every URL a keyboard links to, Web App buttons included
    fn keyboard_urls(keyboard: &InlineKeyboardMarkup) -> Vec<&Url> {
        keyboard
            .inline_keyboard
            .iter()
            .flatten()
            .filter_map(|button| match &button.kind {
                InlineKeyboardButtonKind::Url(url) => Some(url),
                InlineKeyboardButtonKind::WebApp(info) => Some(&info.url),
                _ => None,
            })
            .collect()
    }

    fn links() -> BotLinks {
        BotLinks::new("https://linkgold.example/app/", "https://t.me/LinkGoldChannel").unwrap()
    }

    #[test]
    fn test_every_command_links_to_site() {
        let links = links();
        for command in [Command::Start, Command::Help, Command::Site] {
            let reply = reply_for(command, &links);
            assert!(!reply.text.trim().is_empty(), "{:?} has empty text", command);
            assert!(
                keyboard_urls(&reply.keyboard).contains(&&links.site_url),
                "{:?} has no site button",
                command
            );
        }
    }

    #[test]
    fn test_start_has_web_app_and_channel_buttons() {
        let links = links();
        let reply = start_reply(&links);

        let rows = &reply.keyboard.inline_keyboard;
        assert_eq!(rows.len(), 2);
        assert!(matches!(rows[0][0].kind, InlineKeyboardButtonKind::WebApp(_)));
        assert_eq!(rows[1][0].kind, InlineKeyboardButtonKind::Url(links.channel_url.clone()));
        assert!(reply.text.contains("LinkGold"));
    }

    #[test]
    fn test_site_offers_plain_link_too() {
        let links = links();
        let reply = site_reply(&links);
        let urls = keyboard_urls(&reply.keyboard);
        assert_eq!(urls, vec![&links.site_url, &links.site_url]);
    }

    #[test]
    fn test_help_lists_commands() {
        let reply = help_reply(&links());
        for command in ["/start", "/help", "/site"] {
            assert!(reply.text.contains(command));
        }
    }

    #[test]
    fn test_replies_are_deterministic() {
        let a = reply_for(Command::Start, &links());
        let b = reply_for(Command::Start, &links());
        assert_eq!(a.text, b.text);
        assert_eq!(a.keyboard, b.keyboard);
    }

    #[test]
    fn test_invalid_links_are_rejected() {
        assert!(BotLinks::new("not a url", "https://t.me/x").is_err());
    }

    #[test]
    fn test_default_links_parse() {
        assert!(BotLinks::new(config::bot::DEFAULT_SITE_URL, config::bot::DEFAULT_CHANNEL_URL).is_ok());
    }
}
