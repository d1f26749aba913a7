//! # Message Registry & Structural Deserializer
//!
//! Maps a `(route, type)` discriminant pair to the reconstruction function
//! that rebuilds the typed message from the structural payload the
//! transport delivered.
//!
//! ## Registration lifecycle
//!
//! Entries are registered through [`MessageRegistryBuilder`] during process
//! initialization only, under a single-writer assumption. A duplicate
//! `(route, type)` pair is a fatal configuration error: the runtime must
//! propagate it and refuse to start. The built [`MessageRegistry`] is
//! immutable and safe for unsynchronized concurrent reads.
//!
//! ## Reconstruction contract
//!
//! Generic reconstruction (see [`MessageRegistryBuilder::register_json`])
//! rebuilds first-level fields only. Nested non-primitive fields, or arrays
//! of non-primitive objects, are not restored to their behavior-bearing
//! form automatically — recursive type recovery without reflection is
//! ambiguous for polymorphic fields, so the registry does not attempt it.
//! A message variant embedding such fields must register an explicit
//! [`ReconstructFn`] that re-establishes them.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::errors::{DecodeError, RegistryError};
use crate::message::Message;

/// Pure reconstruction of a typed message from a structural payload.
///
/// Errors are reported through `serde_json::Error` (custom reconstructions
/// can use `serde::de::Error::custom`); the registry attaches the
/// discriminant context when it surfaces the failure.
pub type ReconstructFn = fn(serde_json::Value) -> Result<Box<dyn Message>, serde_json::Error>;

/// Generic first-level reconstruction via serde.
fn decode_json<M>(payload: serde_json::Value) -> Result<Box<dyn Message>, serde_json::Error>
where
    M: Message + DeserializeOwned,
{
    Ok(Box::new(serde_json::from_value::<M>(payload)?))
}

/// Append-only builder for the process-lifetime message registry.
#[derive(Default)]
pub struct MessageRegistryBuilder {
    entries: HashMap<(String, String), ReconstructFn>,
}

impl MessageRegistryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a reconstruction function for `(route, type)`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateMessage`] if the pair is already present.
    /// Callers must treat this as fatal and abort startup.
    pub fn register(
        &mut self,
        route: impl Into<String>,
        msg_type: impl Into<String>,
        reconstruct: ReconstructFn,
    ) -> Result<(), RegistryError> {
        let key = (route.into(), msg_type.into());
        if self.entries.contains_key(&key) {
            return Err(RegistryError::DuplicateMessage {
                route: key.0,
                msg_type: key.1,
            });
        }
        self.entries.insert(key, reconstruct);
        Ok(())
    }

    /// Registers a variant whose fields are all first-level serde types.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateMessage`] if the pair is already present.
    pub fn register_json<M>(
        &mut self,
        route: impl Into<String>,
        msg_type: impl Into<String>,
    ) -> Result<(), RegistryError>
    where
        M: Message + DeserializeOwned,
    {
        self.register(route, msg_type, decode_json::<M>)
    }

    /// Freezes the registry. After this point entries can only be read.
    #[must_use]
    pub fn build(self) -> MessageRegistry {
        MessageRegistry {
            entries: self.entries,
        }
    }
}

/// Immutable process-lifetime registry of message variants.
pub struct MessageRegistry {
    entries: HashMap<(String, String), ReconstructFn>,
}

impl MessageRegistry {
    /// Reconstructs a typed message from its declared discriminants and
    /// structural payload.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::UnknownMessage`] if no entry matches.
    /// - [`DecodeError::Payload`] if reconstruction rejects the payload.
    pub fn deserialize(
        &self,
        route: &str,
        msg_type: &str,
        payload: serde_json::Value,
    ) -> Result<Box<dyn Message>, DecodeError> {
        let reconstruct = self
            .entries
            .get(&(route.to_string(), msg_type.to_string()))
            .ok_or_else(|| DecodeError::UnknownMessage {
                route: route.to_string(),
                msg_type: msg_type.to_string(),
            })?;

        reconstruct(payload).map_err(|e| DecodeError::Payload {
            route: route.to_string(),
            msg_type: msg_type.to_string(),
            reason: e.to_string(),
        })
    }

    /// Returns true if `(route, type)` has a registered entry.
    #[must_use]
    pub fn contains(&self, route: &str, msg_type: &str) -> bool {
        self.entries
            .contains_key(&(route.to_string(), msg_type.to_string()))
    }

    /// Number of registered message variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no variants are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
