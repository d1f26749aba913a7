//! # Signet Router - Gate, Validation, and Dispatch
//!
//! The downstream half of the message pipeline. Each inbound message moves
//! through a linear state machine with no backtracking and no retry:
//!
//! ```text
//! Received ─▶ Deserialized ─▶ Approved ─▶ Validated ─▶ Dispatched ─▶ Completed
//!      │            │             │            │            │
//!      └────────────┴─────────────┴────────────┴────────────┴──▶ Rejected
//! ```
//!
//! A transition failure at any stage moves the message directly to
//! `Rejected` with the first error encountered; later stages never run.
//! Exactly one handler is invoked per completed message.

pub mod error;
pub mod gate;
pub mod handler;
pub mod pipeline;

// Re-export main types
pub use error::DispatchError;
pub use gate::ApprovalGate;
pub use handler::{Handler, HandlerFailure, HandlerRegistry, HandlerRegistryBuilder};
pub use pipeline::{validate, MessagePipeline};
