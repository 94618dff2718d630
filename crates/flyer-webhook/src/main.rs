use anyhow::Result;

use flyer_webhook::cli::Cli;
use flyer_webhook::{run_server, Forwarder, WebhookDispatcher};
use linkgold_core::config::{self, webhook};
use linkgold_core::{init_logger, log_configuration};

/// Entry point for the Flyer webhook receiver
///
/// # Errors
/// Returns an error if logging, the backend URL or the listener cannot be set up.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables before any config static is touched
    let env_file = config::load_env_file(cli.env_file.as_deref());

    init_logger(&config::LOG_LEVEL, config::LOG_FILE_PATH.as_deref())?;

    if let Some(path) = env_file {
        log::info!("Loaded environment from {}", path.display());
    }

    let host = cli.host.unwrap_or_else(|| webhook::HOST.clone());
    let port = cli.port.unwrap_or(*webhook::PORT);

    let forwarder = Forwarder::from_config()?;

    log_configuration(
        "Flyer webhook",
        &[
            ("WEBHOOK_HOST", host.clone()),
            ("PORT", port.to_string()),
            (
                "NODEJS_SERVER_URL",
                webhook::NODEJS_SERVER_URL.clone().unwrap_or_default(),
            ),
            ("FORWARD_TIMEOUT_SECS", webhook::FORWARD_TIMEOUT_SECS.to_string()),
        ],
    );

    match &forwarder {
        Some(forwarder) => log::info!("Forwarding events to {}", forwarder.endpoint()),
        None => log::warn!("NODEJS_SERVER_URL not set - events will only be logged"),
    }

    run_server(&host, port, WebhookDispatcher::new(forwarder)).await
}
