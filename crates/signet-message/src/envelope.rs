//! # Transport Envelope
//!
//! The wire types exchanged with the host transport collaborator.
//!
//! ## Error surface
//!
//! Outbound failures carry an `error_kind` string drawn from [`error_kind`].
//! An approval rejection and an unknown-route rejection are deliberately
//! indistinguishable on the wire (both map to
//! [`error_kind::NOT_PERMITTED`]): a rejected caller must not be able to
//! enumerate internal routes by probing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sender::SenderMeta;

/// Wire error-kind strings for [`OutboundResponse::Failure`].
pub mod error_kind {
    /// No registry entry for the declared `(route, type)` pair.
    pub const UNKNOWN_MESSAGE: &str = "unknown-message";
    /// The payload shape did not match the registered variant.
    pub const MALFORMED_PAYLOAD: &str = "malformed-payload";
    /// Approval rejection or unknown route (uniform by design).
    pub const NOT_PERMITTED: &str = "not-permitted";
    /// `validate_basic` rejected the message.
    pub const VALIDATION: &str = "validation";
    /// The handler itself failed.
    pub const HANDLER: &str = "handler";
}

/// An inbound request as delivered by the transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundEnvelope {
    /// Correlates the response with the original caller.
    pub request_id: Uuid,
    /// Destination handler group.
    pub route: String,
    /// Message discriminant within the route.
    #[serde(rename = "type")]
    pub msg_type: String,
    /// Structural payload; behavior is re-attached by the registry.
    pub payload: serde_json::Value,
    /// Untrusted sender metadata, produced by the transport.
    pub sender: SenderMeta,
}

/// The single outcome reported back to the caller for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutboundResponse {
    /// The handler completed; `result` is its structural return value.
    Result {
        request_id: Uuid,
        result: serde_json::Value,
    },
    /// Some pipeline stage rejected the message, or the handler failed.
    Failure {
        request_id: Uuid,
        error_kind: String,
        message: String,
    },
}

impl OutboundResponse {
    /// Builds a success response.
    #[must_use]
    pub fn result(request_id: Uuid, result: serde_json::Value) -> Self {
        Self::Result { request_id, result }
    }

    /// Builds a failure response.
    pub fn failure(request_id: Uuid, error_kind: &str, message: impl Into<String>) -> Self {
        Self::Failure {
            request_id,
            error_kind: error_kind.to_string(),
            message: message.into(),
        }
    }

    /// The error kind, if this is a failure.
    #[must_use]
    pub fn error_kind(&self) -> Option<&str> {
        match self {
            Self::Result { .. } => None,
            Self::Failure { error_kind, .. } => Some(error_kind),
        }
    }

    /// Returns true for [`OutboundResponse::Failure`].
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}
