//! # Message Pipeline
//!
//! Drives one inbound envelope through the full stage chain and produces
//! exactly one outbound response. Stateless per message: concurrent
//! `process` calls share only the immutable registries, so the core imposes
//! no ordering across distinct messages.

use std::sync::Arc;

use signet_message::{InboundEnvelope, Message, MessageRegistry, OutboundResponse};
use tracing::{debug, warn};

use crate::error::DispatchError;
use crate::gate::ApprovalGate;
use crate::handler::HandlerRegistry;

/// Invokes the message's own validation.
///
/// Message-local and side-effect-free; runs strictly after approval and
/// before dispatch.
///
/// # Errors
///
/// [`DispatchError::Validation`] carrying the message's reason.
pub fn validate(msg: &dyn Message) -> Result<(), DispatchError> {
    msg.validate_basic().map_err(DispatchError::from)
}

/// The assembled dispatch pipeline.
///
/// Stage order is fixed: deserialize, approve, validate, dispatch. Each
/// stage short-circuits to `Rejected` on failure; no stage retries.
pub struct MessagePipeline {
    registry: Arc<MessageRegistry>,
    gate: ApprovalGate,
    handlers: Arc<HandlerRegistry>,
}

impl MessagePipeline {
    /// Assembles a pipeline from frozen registries and the approval gate.
    #[must_use]
    pub fn new(
        registry: Arc<MessageRegistry>,
        gate: ApprovalGate,
        handlers: Arc<HandlerRegistry>,
    ) -> Self {
        Self {
            registry,
            gate,
            handlers,
        }
    }

    /// Processes one inbound envelope to completion.
    ///
    /// Always returns a response for the envelope's `request_id`: the
    /// handler result on `Completed`, or the wire form of the first error
    /// on `Rejected`.
    pub async fn process(&self, envelope: InboundEnvelope) -> OutboundResponse {
        let request_id = envelope.request_id;
        let route = envelope.route.clone();
        let msg_type = envelope.msg_type.clone();

        match self.run(envelope).await {
            Ok(result) => {
                debug!("[Pipeline] Completed ({route}, {msg_type})");
                OutboundResponse::result(request_id, result)
            }
            Err(err) => {
                warn!("[Pipeline] Rejected ({route}, {msg_type}): {err}");
                OutboundResponse::failure(request_id, err.wire_kind(), err.wire_message())
            }
        }
    }

    /// The stage chain. Errors carry the stage that produced them, in
    /// stage order: deserialization > approval > validation > dispatch.
    async fn run(&self, envelope: InboundEnvelope) -> Result<serde_json::Value, DispatchError> {
        // Received -> Deserialized
        let msg =
            self.registry
                .deserialize(&envelope.route, &envelope.msg_type, envelope.payload)?;

        // Deserialized -> Approved
        self.gate.approve(msg.as_ref(), &envelope.sender)?;

        // Approved -> Validated
        validate(msg.as_ref())?;

        // Validated -> Dispatched
        self.dispatch(msg.as_ref()).await
    }

    /// Routes to the registered handler and invokes it exactly once.
    async fn dispatch(&self, msg: &dyn Message) -> Result<serde_json::Value, DispatchError> {
        let handler = self
            .handlers
            .get(msg.route())
            .ok_or_else(|| DispatchError::RouteNotFound {
                route: msg.route().to_string(),
            })?;

        handler
            .handle(msg)
            .await
            .map_err(|failure| DispatchError::Handler {
                reason: failure.reason,
            })
    }
}

// =============================================================================
// TESTS
// =============================================================================
