//! # Approval Gate
//!
//! The security boundary between untrusted script contexts and privileged
//! handlers. Runs strictly before validation and dispatch; a message that
//! fails approval never reaches either.

use signet_message::{AppIdentity, Message, SenderMeta};
use tracing::warn;

use crate::error::DispatchError;

/// Deny-unless-approved gate over the message's own approval predicate.
///
/// Policy lives on the message variant ([`Message::approve_external`], with
/// the fail-closed default); the gate owns the application identity the
/// predicate compares senders against, and turns a refusal into the typed
/// rejection.
pub struct ApprovalGate {
    app: AppIdentity,
}

impl ApprovalGate {
    /// Creates a gate for the running application's identity.
    #[must_use]
    pub fn new(app: AppIdentity) -> Self {
        Self { app }
    }

    /// The identity this gate compares senders against.
    #[must_use]
    pub fn app(&self) -> &AppIdentity {
        &self.app
    }

    /// Decides whether the message may proceed to validation and dispatch.
    ///
    /// # Errors
    ///
    /// [`DispatchError::NotPermitted`] when the message's approval
    /// predicate refuses the sender.
    pub fn approve(&self, msg: &dyn Message, sender: &SenderMeta) -> Result<(), DispatchError> {
        if msg.approve_external(sender, &self.app) {
            return Ok(());
        }
        warn!(
            "[Gate] Rejected ({}, {}) from origin {:?}",
            msg.route(),
            msg.msg_type(),
            sender.origin_url
        );
        Err(DispatchError::NotPermitted {
            route: msg.route().to_string(),
            msg_type: msg.msg_type().to_string(),
        })
    }
}
