//! # In-Memory Transport
//!
//! The reference transport collaborator: a bounded channel delivering
//! inbound envelopes to the pipeline and a one-shot reply path carrying
//! exactly one response back to each caller.
//!
//! Every request is processed on its own task, so distinct messages
//! interleave freely while each one still runs its pipeline stages to
//! completion in order.

use std::sync::Arc;

use signet_message::{InboundEnvelope, OutboundResponse};
use signet_router::MessagePipeline;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

/// Transport-level failures (distinct from pipeline rejections, which
/// travel inside [`OutboundResponse`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The transport loop has shut down.
    #[error("transport channel closed")]
    Closed,
}

/// One queued request: the envelope plus its reply slot.
struct TransportRequest {
    envelope: InboundEnvelope,
    reply_to: oneshot::Sender<OutboundResponse>,
}

/// Caller-side handle to the transport loop.
#[derive(Clone)]
pub struct TransportHandle {
    tx: mpsc::Sender<TransportRequest>,
}

impl TransportHandle {
    /// Submits an envelope and awaits its single response.
    ///
    /// # Errors
    ///
    /// [`TransportError::Closed`] if the loop has shut down.
    pub async fn request(
        &self,
        envelope: InboundEnvelope,
    ) -> Result<OutboundResponse, TransportError> {
        let (reply_to, reply_rx) = oneshot::channel();
        self.tx
            .send(TransportRequest { envelope, reply_to })
            .await
            .map_err(|_| TransportError::Closed)?;
        reply_rx.await.map_err(|_| TransportError::Closed)
    }
}

/// Starts the transport loop over the given pipeline.
///
/// The loop lives until every [`TransportHandle`] clone is dropped.
pub fn spawn(pipeline: Arc<MessagePipeline>, channel_capacity: usize) -> TransportHandle {
    let (tx, mut rx) = mpsc::channel::<TransportRequest>(channel_capacity);

    tokio::spawn(async move {
        while let Some(TransportRequest { envelope, reply_to }) = rx.recv().await {
            let pipeline = pipeline.clone();
            tokio::spawn(async move {
                let response = pipeline.process(envelope).await;
                // Caller may have gone away; dropping the response is fine.
                let _ = reply_to.send(response);
            });
        }
        debug!("[Transport] All handles dropped, loop exiting");
    });

    TransportHandle { tx }
}
