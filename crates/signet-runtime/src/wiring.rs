//! # Registry Wiring
//!
//! Builds the process-lifetime registries. Registration only happens here,
//! during initialization, under a single writer; any [`RegistryError`] must
//! propagate out of `main` so the process never starts with an ambiguous
//! message table.

use std::sync::Arc;

use signet_message::{MessageRegistryBuilder, RegistryError};
use signet_router::{ApprovalGate, HandlerRegistryBuilder, MessagePipeline};
use tracing::info;

use crate::config::RuntimeConfig;
use crate::keyring::{self, GetKeyMsg, KeyringHandler, SetLabelMsg};

/// Registers every message variant and handler, then assembles the pipeline.
///
/// # Errors
///
/// [`RegistryError`] on duplicate registration; fatal by contract.
pub fn build_pipeline(config: &RuntimeConfig) -> Result<MessagePipeline, RegistryError> {
    let mut messages = MessageRegistryBuilder::new();
    messages.register_json::<GetKeyMsg>(keyring::ROUTE, keyring::GET_KEY_TYPE)?;
    messages.register_json::<SetLabelMsg>(keyring::ROUTE, keyring::SET_LABEL_TYPE)?;

    let mut handlers = HandlerRegistryBuilder::new();
    handlers.register(keyring::ROUTE, Arc::new(KeyringHandler::new()))?;

    let messages = messages.build();
    info!(
        "[Wiring] Registered {} message variants across {} routes",
        messages.len(),
        1
    );

    Ok(MessagePipeline::new(
        Arc::new(messages),
        ApprovalGate::new(config.identity()),
        Arc::new(handlers.build()),
    ))
}
