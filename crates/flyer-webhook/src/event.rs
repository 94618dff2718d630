//! Flyer webhook payloads and the events relayed to the backend

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::WebhookError;

/// `new_status` value Flyer sends when a user leaves a task's channel
pub const STATUS_ABORT: &str = "abort";

/// Body returned for every webhook call, whatever happened inside
pub fn ack() -> Value {
    json!({ "status": true })
}

/// Incoming Flyer event, keyed by the payload's `type` field
#[derive(Debug, Clone, PartialEq)]
pub enum FlyerEvent {
    /// Connectivity check sent from the Flyer dashboard
    Test,
    /// A user completed the mandatory subscription
    SubCompleted { user_id: Value },
    /// A task changed status; `data` is kept verbatim
    NewStatus { data: Value },
    /// Any other `type`
    Unknown { kind: String },
}

impl FlyerEvent {
    /// Reads the event out of a decoded payload.
    ///
    /// Only the keys the matched type needs are looked up; everything else
    /// is carried through untouched. A non-string `type` is reported as an
    /// unknown type rather than a fault.
    pub fn from_payload(payload: &Value) -> Result<Self, WebhookError> {
        let kind = payload.get("type").ok_or(WebhookError::MissingField("type"))?;

        let Some(kind) = kind.as_str() else {
            return Ok(Self::Unknown { kind: kind.to_string() });
        };

        match kind {
            "test" => Ok(Self::Test),
            "sub_completed" => {
                let user_id = data_field(payload, "user_id", "data.user_id")?;
                Ok(Self::SubCompleted {
                    user_id: user_id.clone(),
                })
            }
            "new_status" => {
                let data = payload.get("data").ok_or(WebhookError::MissingField("data"))?;
                Ok(Self::NewStatus { data: data.clone() })
            }
            other => Ok(Self::Unknown { kind: other.to_string() }),
        }
    }

    /// Short name for log lines
    pub fn kind(&self) -> &str {
        match self {
            Self::Test => "test",
            Self::SubCompleted { .. } => "sub_completed",
            Self::NewStatus { .. } => "new_status",
            Self::Unknown { kind } => kind,
        }
    }
}

/// Looks up `payload.data.<key>`, naming `path` in the error
fn data_field<'a>(payload: &'a Value, key: &str, path: &'static str) -> Result<&'a Value, WebhookError> {
    let data = payload.get("data").ok_or(WebhookError::MissingField("data"))?;
    data.get(key).ok_or(WebhookError::MissingField(path))
}

/// Event relayed to `{NODEJS_SERVER_URL}/api/flyer/event`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ForwardEvent {
    SubscriptionCompleted { user_id: Value, timestamp: String },
    TaskStatusUpdated { data: Value, timestamp: String },
}

impl ForwardEvent {
    pub fn subscription_completed(user_id: Value) -> Self {
        Self::SubscriptionCompleted {
            user_id,
            timestamp: now_timestamp(),
        }
    }

    pub fn task_status_updated(data: Value) -> Self {
        Self::TaskStatusUpdated {
            data,
            timestamp: now_timestamp(),
        }
    }
}

/// Current UTC time as RFC 3339 with millisecond precision, `Z` suffix
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
