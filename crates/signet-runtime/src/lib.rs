//! # Signet Runtime
//!
//! The background-service binary for the Signet message pipeline.
//!
//! ## Structure
//!
//! - `config/` - runtime configuration with env overrides
//! - `keyring` - the keyring route: message variants and handler
//! - `transport` - in-memory transport collaborator (channel + reply)
//! - `wiring` - registry construction; duplicate registration aborts startup
//!
//! ## Startup sequence
//!
//! 1. Initialize logging (`SIGNET_LOG` filter)
//! 2. Load and validate configuration
//! 3. Register messages and handlers (fatal on duplicates)
//! 4. Start the transport loop
//! 5. Serve until shutdown signal

pub mod config;
pub mod keyring;
pub mod transport;
pub mod wiring;

pub use config::{ConfigError, RuntimeConfig};
pub use transport::{TransportError, TransportHandle};
