//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console, plus a file when configured)
//! - A startup banner listing the effective configuration

use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;

use crate::error::{AppError, AppResult};

/// Parses a level name (`error`, `warn`, `info`, `debug`, `trace`, `off`).
///
/// Unknown names fall back to `Info`.
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Initialize logger for console output and, optionally, a log file
///
/// # Arguments
/// * `level` - Level name, see [`parse_level`]
/// * `log_file_path` - Path to the log file, `None` for console only
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(AppError)` - Log file could not be created or a logger is already installed
pub fn init_logger(level: &str, log_file_path: Option<&str>) -> AppResult<()> {
    let level = parse_level(level);

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    if let Some(path) = log_file_path {
        let log_file = File::create(path)?;
        loggers.push(WriteLogger::new(level, Config::default(), log_file));
    }

    CombinedLogger::init(loggers).map_err(|e| AppError::Logger(e.to_string()))
}

/// Logs the effective configuration of a service at startup
///
/// Values are logged as given; pass secrets through [`mask_secret`] first.
pub fn log_configuration(service: &str, entries: &[(&str, String)]) {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("⚙️  {} configuration", service);
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (key, value) in entries {
        if value.is_empty() {
            log::warn!("⚠️  {}: not set", key);
        } else {
            log::info!("✅ {}: {}", key, value);
        }
    }
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}

/// Hides all but the last four characters of a secret
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}
