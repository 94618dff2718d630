use thiserror::Error;

/// Faults raised while reading an incoming Flyer payload
///
/// None of these reach the caller: the route logs them and still answers
/// with the acknowledgement.
#[derive(Error, Debug)]
pub enum WebhookError {
    /// Body could not be read from the connection
    #[error("Failed to read request body: {0}")]
    Body(String),

    /// Body is not valid JSON
    #[error("Malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// A key the matched event type relies on is absent
    #[error("Missing field: {0}")]
    MissingField(&'static str),
}
