//! # Signet Background Service
//!
//! Entry point. Wires the message pipeline to the in-memory transport and
//! serves until a shutdown signal arrives.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::json;
use signet_message::{InboundEnvelope, SenderMeta};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use uuid::Uuid;

use signet_runtime::{config::RuntimeConfig, transport, wiring, TransportHandle};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let config = RuntimeConfig::from_env();
    config
        .validate()
        .context("invalid runtime configuration")?;
    info!(
        "[Runtime] Starting as {} (origin {})",
        config.app.application_id,
        config.identity().origin()
    );

    // Duplicate registration is the one fatal configuration error: the
    // process must not come up with an ambiguous message table.
    let pipeline = wiring::build_pipeline(&config).context("message registration failed")?;
    let transport = transport::spawn(Arc::new(pipeline), config.transport.channel_capacity);

    startup_self_check(&transport, &config).await;

    info!("[Runtime] Ready, serving messages");
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    info!("[Runtime] Shutdown signal received, exiting");

    Ok(())
}

/// Initializes the global tracing subscriber (`SIGNET_LOG`, default info).
fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_env("SIGNET_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")
}

/// Exercises the pipeline end to end with a self-originated request.
async fn startup_self_check(transport: &TransportHandle, config: &RuntimeConfig) {
    let envelope = InboundEnvelope {
        request_id: Uuid::new_v4(),
        route: "keyring".to_string(),
        msg_type: "get-key".to_string(),
        payload: json!({"key_id": "primary"}),
        sender: SenderMeta {
            origin_url: Some(config.identity().origin()),
            application_id: config.app.application_id.clone(),
        },
    };

    match transport.request(envelope).await {
        Ok(response) if !response.is_failure() => {
            info!("[Runtime] Self-check passed");
        }
        Ok(response) => {
            warn!("[Runtime] Self-check rejected: {:?}", response.error_kind());
        }
        Err(e) => {
            warn!("[Runtime] Self-check transport failure: {e}");
        }
    }
}
