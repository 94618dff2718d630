//! Telegram bot handler tree configuration
//!
//! The same schema is used by the dispatcher in `main` and by the
//! integration tests.

mod commands;
mod schema;
mod types;

pub use commands::{answer_callback, send_command_reply};
pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
