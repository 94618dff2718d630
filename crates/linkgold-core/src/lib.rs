//! LinkGold core - plumbing shared by the chat-bot and the Flyer webhook receiver
//!
//! # Module Structure
//!
//! - `config`: environment-backed settings, read once at startup
//! - `error`: the application error type
//! - `logging`: logger initialization and startup diagnostics

pub mod config;
pub mod error;
pub mod logging;

pub use error::{AppError, AppResult};
pub use logging::{init_logger, log_configuration, mask_secret};
