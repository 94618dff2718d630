//! Handler types and dependencies

use std::sync::Arc;

use crate::telegram::replies::BotLinks;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone, Debug)]
pub struct HandlerDeps {
    pub links: Arc<BotLinks>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(links: BotLinks) -> Self {
        Self { links: Arc::new(links) }
    }
}
