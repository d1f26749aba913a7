//! # Pipeline Error Types
//!
//! Configuration and per-message failure types for the message layer.

use thiserror::Error;

/// Fatal configuration errors raised during registry construction.
///
/// Duplicate registration is the one non-recoverable condition in the
/// system: startup must not complete when it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A `(route, type)` pair was registered twice.
    #[error("message ({route}, {msg_type}) is already registered")]
    DuplicateMessage { route: String, msg_type: String },

    /// A handler route was registered twice.
    #[error("handler for route {route:?} is already registered")]
    DuplicateHandler { route: String },
}

/// Failures while reconstructing a typed message from structural data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No registry entry matches the declared discriminant pair.
    #[error("unknown message ({route}, {msg_type})")]
    UnknownMessage { route: String, msg_type: String },

    /// The payload shape did not match the registered message variant.
    #[error("malformed payload for ({route}, {msg_type}): {reason}")]
    Payload {
        route: String,
        msg_type: String,
        reason: String,
    },
}

/// A message-local invariant violation found by `validate_basic`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {reason}")]
pub struct ValidationError {
    /// Human-readable reason the message was rejected.
    pub reason: String,
}

impl ValidationError {
    /// Convenience constructor.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
