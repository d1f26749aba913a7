//! # Signet Message - Typed Messages over a Structural Transport
//!
//! The message capability and registry for the cross-context dispatch
//! pipeline. Messages cross the host transport as plain structural data
//! (JSON values); the registry maps a `(route, type)` discriminant pair back
//! to a reconstruction function that restores the typed, behavior-bearing
//! form on the receiving side.
//!
//! ## Pipeline position
//!
//! ```text
//! raw payload ──▶ deserialize (this crate) ──▶ approve ──▶ validate ──▶ dispatch
//! ```
//!
//! ## Weak polymorphism
//!
//! Reconstruction rebuilds first-level fields generically. Nested fields
//! that themselves carry behavior are NOT recovered automatically; message
//! variants embedding such fields must register a custom [`ReconstructFn`]
//! that restores them explicitly. See [`registry`] for the rationale.

pub mod envelope;
pub mod errors;
pub mod message;
pub mod registry;
pub mod sender;

// Re-export main types
pub use envelope::{error_kind, InboundEnvelope, OutboundResponse};
pub use errors::{DecodeError, RegistryError, ValidationError};
pub use message::Message;
pub use registry::{MessageRegistry, MessageRegistryBuilder, ReconstructFn};
pub use sender::{AppIdentity, SenderMeta};
