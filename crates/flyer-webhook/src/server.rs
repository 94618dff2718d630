//! HTTP surface of the webhook receiver.
//!
//! Routes:
//! - `GET /`              liveness string
//! - `GET /test`          fixed diagnostic payload
//! - `POST /flyer_webhook` Flyer callbacks, always answered with `{"status": true}`

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::dispatch::WebhookDispatcher;
use crate::error::WebhookError;
use crate::event::ack;

/// Timestamp baked into the `/test` payload
pub const TEST_ENDPOINT_TIMESTAMP: &str = "2025-11-26T12:19:47.452Z";

/// Shared state for the webhook routes.
#[derive(Clone)]
struct WebhookState {
    dispatcher: Arc<WebhookDispatcher>,
}

/// Builds the router; used by `run_server` and by the integration tests.
pub fn create_router(dispatcher: WebhookDispatcher) -> Router {
    let state = WebhookState {
        dispatcher: Arc::new(dispatcher),
    };

    Router::new()
        .route("/", get(root_handler))
        .route("/test", get(test_handler))
        .route("/flyer_webhook", post(flyer_webhook_handler))
        .with_state(state)
}

/// Binds `host:port` and serves until Ctrl+C.
pub async fn run_server(host: &str, port: u16, dispatcher: WebhookDispatcher) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let app = create_router(dispatcher);

    log::info!("Starting Flyer webhook server on http://{}", addr);
    log::info!("  GET  /              - Liveness");
    log::info!("  GET  /test          - Diagnostic payload");
    log::info!("  POST /flyer_webhook - Flyer callbacks");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    log::info!("Flyer webhook server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down gracefully...");
}

/// GET / liveness check
async fn root_handler() -> Json<Value> {
    Json(json!({ "status": "Flyer webhook server is running" }))
}

/// GET /test diagnostic payload
async fn test_handler() -> Json<Value> {
    log::info!("Test endpoint called");
    Json(json!({
        "status": true,
        "message": "Webhook endpoint is working!",
        "timestamp": TEST_ENDPOINT_TIMESTAMP,
    }))
}

/// POST /flyer_webhook handler; the response is always the ack
async fn flyer_webhook_handler(
    State(state): State<WebhookState>,
    body: Result<Bytes, BytesRejection>,
) -> Json<Value> {
    let result = match body {
        Ok(body) => state.dispatcher.process(&body).await,
        Err(rejection) => Err(WebhookError::Body(rejection.body_text())),
    };

    match result {
        Ok(disposition) => log::debug!("Webhook handled: {:?}", disposition),
        Err(e) => log::error!("Webhook processing error: {}", e),
    }

    Json(ack())
}
