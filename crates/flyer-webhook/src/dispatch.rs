//! Routing of decoded Flyer events
//!
//! Two behaviours, picked by whether a backend is configured:
//! - without a forwarder only `new_status`/`abort` is recognised among
//!   status updates, and nothing leaves the process;
//! - with a forwarder `sub_completed` and every `new_status` are relayed.

use serde_json::Value;

use crate::error::WebhookError;
use crate::event::{FlyerEvent, ForwardEvent, STATUS_ABORT};
use crate::forwarder::{ForwardOutcome, Forwarder};

/// What the dispatcher did with an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// `test` event, acknowledged
    TestAcknowledged,
    /// Event recognised and logged, nothing forwarded
    Logged,
    /// Event relayed to the backend
    Forwarded(ForwardOutcome),
    /// Unrecognised type (or unrecognised status), warned about
    Ignored,
}

/// Stateless dispatcher shared by all webhook requests
#[derive(Debug, Clone, Default)]
pub struct WebhookDispatcher {
    forwarder: Option<Forwarder>,
}

impl WebhookDispatcher {
    pub fn new(forwarder: Option<Forwarder>) -> Self {
        Self { forwarder }
    }

    /// Decodes a raw request body and dispatches it
    pub async fn process(&self, body: &[u8]) -> Result<Disposition, WebhookError> {
        let payload: Value = serde_json::from_slice(body)?;
        log::info!("Received Flyer webhook: {}", payload);

        let event = FlyerEvent::from_payload(&payload)?;
        log::debug!("Dispatching {} event", event.kind());
        self.dispatch(event).await
    }

    /// Handles one decoded event
    pub async fn dispatch(&self, event: FlyerEvent) -> Result<Disposition, WebhookError> {
        match event {
            FlyerEvent::Test => {
                log::info!("Test webhook received");
                Ok(Disposition::TestAcknowledged)
            }
            FlyerEvent::SubCompleted { user_id } => {
                log::info!("User {} completed subscription", user_id);
                match &self.forwarder {
                    Some(forwarder) => {
                        let outcome = forwarder.forward(&ForwardEvent::subscription_completed(user_id)).await;
                        Ok(Disposition::Forwarded(outcome))
                    }
                    None => Ok(Disposition::Logged),
                }
            }
            FlyerEvent::NewStatus { data } => match &self.forwarder {
                Some(forwarder) => {
                    if is_abort(&data) {
                        log_unsubscribe(&data);
                    }
                    log::info!("Task status updated: {}", data);
                    let outcome = forwarder.forward(&ForwardEvent::task_status_updated(data)).await;
                    Ok(Disposition::Forwarded(outcome))
                }
                None => dispatch_status_locally(&data),
            },
            FlyerEvent::Unknown { kind } => {
                log::warn!("Unknown webhook type: {}", kind);
                Ok(Disposition::Ignored)
            }
        }
    }
}

/// `new_status` handling when no backend is configured
fn dispatch_status_locally(data: &Value) -> Result<Disposition, WebhookError> {
    let status = data.get("status").ok_or(WebhookError::MissingField("data.status"))?;

    if status.as_str() != Some(STATUS_ABORT) {
        log::warn!("Unknown webhook type: new_status ({})", status);
        return Ok(Disposition::Ignored);
    }

    let user_id = data.get("user_id").ok_or(WebhookError::MissingField("data.user_id"))?;
    let signature = data.get("signature").ok_or(WebhookError::MissingField("data.signature"))?;
    log::info!("User {} unsubscribed from task {}", user_id, signature);

    Ok(Disposition::Logged)
}

fn is_abort(data: &Value) -> bool {
    data.get("status").and_then(Value::as_str) == Some(STATUS_ABORT)
}

fn log_unsubscribe(data: &Value) {
    let user_id = data.get("user_id").unwrap_or(&Value::Null);
    let signature = data.get("signature").unwrap_or(&Value::Null);
    log::info!("User {} unsubscribed from task {}", user_id, signature);
}
