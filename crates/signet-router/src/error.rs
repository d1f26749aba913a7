//! # Dispatch Error Taxonomy
//!
//! One typed reason per pipeline stage, in stage order. The wire mapping
//! deliberately collapses approval and unknown-route rejections so external
//! callers cannot probe for the existence of internal routes.

use signet_message::{error_kind, DecodeError, ValidationError};
use thiserror::Error;

/// The first error encountered while moving a message through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Deserialization failed (unknown discriminant or malformed payload).
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The approval gate rejected the sender.
    #[error("message ({route}, {msg_type}) is not permitted for this sender")]
    NotPermitted { route: String, msg_type: String },

    /// `validate_basic` rejected the message.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No handler is registered for the message's route.
    #[error("no handler for route {route:?}")]
    RouteNotFound { route: String },

    /// The handler itself failed; reclassified at the dispatch boundary.
    #[error("handler failed: {reason}")]
    Handler { reason: String },
}

impl DispatchError {
    /// The `error_kind` string reported to the transport.
    #[must_use]
    pub fn wire_kind(&self) -> &'static str {
        match self {
            Self::Decode(DecodeError::UnknownMessage { .. }) => error_kind::UNKNOWN_MESSAGE,
            Self::Decode(DecodeError::Payload { .. }) => error_kind::MALFORMED_PAYLOAD,
            // Uniform surface: a rejected caller cannot tell a denied
            // message from a route that does not exist.
            Self::NotPermitted { .. } | Self::RouteNotFound { .. } => error_kind::NOT_PERMITTED,
            Self::Validation(_) => error_kind::VALIDATION,
            Self::Handler { .. } => error_kind::HANDLER,
        }
    }

    /// The human-readable message reported to the transport.
    ///
    /// Kept generic for the `not-permitted` class so the message text leaks
    /// no more than the kind does.
    #[must_use]
    pub fn wire_message(&self) -> String {
        match self {
            Self::NotPermitted { .. } | Self::RouteNotFound { .. } => {
                "request is not permitted".to_string()
            }
            other => other.to_string(),
        }
    }
}
