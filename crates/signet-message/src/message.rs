//! # Message Capability
//!
//! Every concrete message variant implements [`Message`]. The transport
//! cannot carry behavior, only structural data, so this trait is what the
//! registry re-attaches after reconstruction.

use std::any::Any;

use crate::errors::ValidationError;
use crate::sender::{AppIdentity, SenderMeta};

/// A typed, behavior-bearing message.
///
/// `(route, type)` pairs are globally unique across the registry; see
/// [`MessageRegistryBuilder`](crate::registry::MessageRegistryBuilder).
pub trait Message: Any + Send + Sync {
    /// Destination handler group.
    fn route(&self) -> &'static str;

    /// Stable discriminant, unique within the route.
    fn msg_type(&self) -> &'static str;

    /// Pure check of the message's own field invariants.
    ///
    /// Message-local: no access to registry, sender, or any other state,
    /// and no side effects.
    ///
    /// # Errors
    ///
    /// [`ValidationError`] with a human-readable reason.
    fn validate_basic(&self) -> Result<(), ValidationError>;

    /// Decides whether an externally-originated call may proceed.
    ///
    /// Default policy is deny-unless-exact-match: the sender must carry an
    /// origin URL whose origin equals the application's own origin, and its
    /// application id must equal ours. Variants may override to loosen
    /// (e.g. allow specific external origins) or tighten the policy.
    fn approve_external(&self, sender: &SenderMeta, app: &AppIdentity) -> bool {
        let Some(origin) = sender.origin() else {
            return false;
        };
        origin == app.origin() && sender.application_id == app.application_id
    }

    /// Downcast seam for handlers to recover the concrete variant.
    fn as_any(&self) -> &dyn Any;
}
