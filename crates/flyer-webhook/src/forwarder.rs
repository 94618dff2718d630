//! Outbound relay of Flyer events to the LinkGold backend
//!
//! One POST per event, no retries. Failures are logged and reported back as
//! a [`ForwardOutcome`] value; nothing here returns an error to the caller.

use std::time::Duration;

use linkgold_core::config;
use linkgold_core::{AppError, AppResult};
use reqwest::{Client, StatusCode};

use crate::event::ForwardEvent;

/// Path appended to the backend base URL
pub const EVENT_PATH: &str = "/api/flyer/event";

/// What became of a single forward attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardOutcome {
    /// Backend answered 200
    Delivered,
    /// Backend answered with another status code
    Rejected(u16),
    /// Request never got an answer (connect error, timeout, ...)
    Failed(String),
}

/// HTTP client bound to the backend's event endpoint
#[derive(Debug, Clone)]
pub struct Forwarder {
    client: Client,
    endpoint: String,
}

impl Forwarder {
    /// Creates a forwarder for `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let endpoint = event_endpoint(base_url);
        // Unusable base URLs fail at startup.
        reqwest::Url::parse(&endpoint)?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, endpoint })
    }

    /// Builds a forwarder from NODEJS_SERVER_URL, `None` when it is not set
    pub fn from_config() -> AppResult<Option<Self>> {
        config::webhook::NODEJS_SERVER_URL
            .as_deref()
            .map(|base_url| Self::new(base_url, config::webhook::forward_timeout()))
            .transpose()
    }

    /// Full URL events are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts `event` to the backend and logs the result
    pub async fn forward(&self, event: &ForwardEvent) -> ForwardOutcome {
        match self.post(event).await {
            Ok(()) => {
                log::info!("✅ Event forwarded to backend: {:?}", event);
                ForwardOutcome::Delivered
            }
            Err(AppError::HttpStatus(status)) => {
                log::error!("❌ Backend rejected forwarded event with status {}: {:?}", status, event);
                ForwardOutcome::Rejected(status.as_u16())
            }
            Err(e) => {
                log::error!("❌ Failed to forward event to {}: {}", self.endpoint, e);
                ForwardOutcome::Failed(e.to_string())
            }
        }
    }

    async fn post(&self, event: &ForwardEvent) -> AppResult<()> {
        let response = self.client.post(&self.endpoint).json(event).send().await?;

        let status = response.status();
        if status == StatusCode::OK {
            Ok(())
        } else {
            Err(AppError::HttpStatus(status))
        }
    }
}

/// Joins the base URL and [`EVENT_PATH`] without doubling the slash
pub fn event_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim().trim_end_matches('/'), EVENT_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn forwarder(server: &MockServer) -> Forwarder {
        Forwarder::new(&server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_event_endpoint() {
        assert_eq!(event_endpoint("http://backend:3000"), "http://backend:3000/api/flyer/event");
        assert_eq!(event_endpoint("http://backend:3000/"), "http://backend:3000/api/flyer/event");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = Forwarder::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(AppError::Url(_))));
    }

    #[tokio::test]
    async fn test_forward_delivered() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/flyer/event"))
            .and(body_partial_json(json!({"type": "subscription_completed", "user_id": 42})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = forwarder(&server)
            .forward(&ForwardEvent::subscription_completed(json!(42)))
            .await;

        assert_eq!(outcome, ForwardOutcome::Delivered);
    }

    #[tokio::test]
    async fn test_forward_non_200_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/flyer/event"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;

        let outcome = forwarder(&server)
            .forward(&ForwardEvent::task_status_updated(json!({"status": "abort"})))
            .await;

        assert_eq!(outcome, ForwardOutcome::Rejected(201));
    }

    #[tokio::test]
    async fn test_forward_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let forwarder = Forwarder::new(&server.uri(), Duration::from_millis(200)).unwrap();
        let outcome = forwarder
            .forward(&ForwardEvent::subscription_completed(json!(1)))
            .await;

        assert!(matches!(outcome, ForwardOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_forward_connection_refused() {
        // Nothing listens on the discard port.
        let forwarder = Forwarder::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let outcome = forwarder
            .forward(&ForwardEvent::subscription_completed(json!(1)))
            .await;

        assert!(matches!(outcome, ForwardOutcome::Failed(_)));
    }
}
