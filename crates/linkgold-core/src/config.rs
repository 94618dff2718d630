use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Reads an environment variable, treating blank values as unset
pub fn env_non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Loads a dotenv file into the process environment.
///
/// With `path` the named file is loaded, otherwise `.env` is searched for in
/// the current directory and its parents. A missing file is not an error;
/// the loaded path is returned so it can be logged once the logger is up.
pub fn load_env_file(path: Option<&str>) -> Option<PathBuf> {
    match path {
        Some(path) => dotenvy::from_filename(path).ok(),
        None => dotenvy::dotenv().ok(),
    }
}

/// Log level for console and file output
/// Read from LOG_LEVEL environment variable
/// Default: info
pub static LOG_LEVEL: Lazy<String> = Lazy::new(|| env_non_empty("LOG_LEVEL").unwrap_or_else(|| "info".to_string()));

/// Optional log file path
/// Read from LOG_FILE_PATH environment variable
/// When unset, logs go to the console only
pub static LOG_FILE_PATH: Lazy<Option<String>> = Lazy::new(|| env_non_empty("LOG_FILE_PATH"));

/// Telegram bot configuration
pub mod bot {
    use super::{env_non_empty, Lazy};

    /// Web application opened from the inline buttons
    pub const DEFAULT_SITE_URL: &str = "https://telegram-community1-production.up.railway.app/";

    /// Public channel the bot advertises
    pub const DEFAULT_CHANNEL_URL: &str = "https://t.me/LinkGoldChannel";

    /// Bot token
    /// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
    /// Empty when neither is set; the bot refuses to start in that case
    pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
        env_non_empty("BOT_TOKEN")
            .or_else(|| env_non_empty("TELOXIDE_TOKEN"))
            .unwrap_or_default()
    });

    /// Site URL
    /// Read from SITE_URL environment variable
    pub static SITE_URL: Lazy<String> =
        Lazy::new(|| env_non_empty("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string()));

    /// Channel URL
    /// Read from CHANNEL_URL environment variable
    pub static CHANNEL_URL: Lazy<String> =
        Lazy::new(|| env_non_empty("CHANNEL_URL").unwrap_or_else(|| DEFAULT_CHANNEL_URL.to_string()));

    /// Custom Bot API server (e.g. a local telegram-bot-api instance)
    /// Read from BOT_API_URL environment variable
    pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| env_non_empty("BOT_API_URL"));
}

/// Flyer webhook receiver configuration
pub mod webhook {
    use super::{env_non_empty, Duration, Lazy};

    /// Port the Flyer integration is registered against
    pub const DEFAULT_PORT: u16 = 50000;

    /// Default bind address
    pub const DEFAULT_HOST: &str = "0.0.0.0";

    /// Outbound forward timeout (in seconds)
    pub const DEFAULT_FORWARD_TIMEOUT_SECS: u64 = 10;

    /// Base URL of the backend that receives forwarded events
    /// Read from NODEJS_SERVER_URL environment variable
    /// When unset, events are only logged
    pub static NODEJS_SERVER_URL: Lazy<Option<String>> = Lazy::new(|| env_non_empty("NODEJS_SERVER_URL"));

    /// Bind address
    /// Read from WEBHOOK_HOST environment variable
    pub static HOST: Lazy<String> =
        Lazy::new(|| env_non_empty("WEBHOOK_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()));

    /// Listening port
    /// Read from PORT environment variable, unparseable values fall back to the default
    pub static PORT: Lazy<u16> = Lazy::new(|| parse_or("PORT", DEFAULT_PORT));

    /// Forward timeout in seconds
    /// Read from FORWARD_TIMEOUT_SECS environment variable
    pub static FORWARD_TIMEOUT_SECS: Lazy<u64> =
        Lazy::new(|| parse_or("FORWARD_TIMEOUT_SECS", DEFAULT_FORWARD_TIMEOUT_SECS));

    /// Forward timeout duration
    pub fn forward_timeout() -> Duration {
        Duration::from_secs(*FORWARD_TIMEOUT_SECS)
    }

    pub(crate) fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
        env_non_empty(key).and_then(|v| v.parse().ok()).unwrap_or(default)
    }
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Telegram Bot API calls (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}
