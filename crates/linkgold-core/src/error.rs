use thiserror::Error;

/// Centralized error type for both services
///
/// Request-time faults are logged and swallowed by the handlers; this type
/// mostly travels through startup code and the outbound HTTP path.
///
/// # Example
///
/// ```no_run
/// use linkgold_core::AppError;
///
/// fn report(err: AppError) {
///     log::error!("Startup failed: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Telegram API errors
    #[cfg(feature = "telegram")]
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// HTTP transport errors (connect, timeout, body encoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote side answered with an unexpected status code
    #[error("HTTP request failed with status: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Logger could not be installed
    #[error("Logger error: {0}")]
    Logger(String),

    /// Missing or unusable configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
