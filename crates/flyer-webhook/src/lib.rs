//! Flyer webhook receiver
//!
//! Accepts Flyer affiliate callbacks, relays subscription events to the
//! LinkGold backend when one is configured, and always acknowledges.
//!
//! # Module Structure
//!
//! - `event`: payload decoding and forwarded event shapes
//! - `dispatch`: per-type handling
//! - `forwarder`: outbound HTTP relay
//! - `server`: axum routes

pub mod cli;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod forwarder;
pub mod server;

pub use dispatch::{Disposition, WebhookDispatcher};
pub use error::WebhookError;
pub use event::{ack, FlyerEvent, ForwardEvent};
pub use forwarder::{ForwardOutcome, Forwarder};
pub use server::{create_router, run_server};
