//! # Handlers and Handler Registry
//!
//! Handlers are caller-supplied async functions keyed by route. Like the
//! message registry, the handler table is built once during initialization
//! and immutable afterward; duplicate routes abort startup.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use signet_message::{Message, RegistryError};
use thiserror::Error;

/// A failure produced by handler logic.
///
/// Whatever the handler's internal error type, it crosses the dispatch
/// boundary as this classified form and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct HandlerFailure {
    pub reason: String,
}

impl HandlerFailure {
    /// Convenience constructor.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A handler for one route's messages.
///
/// The dispatcher invokes `handle` at most once per message and awaits
/// exactly one outcome. Handlers may suspend internally; they receive the
/// message only after approval and validation have passed.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Handles a validated, approved message and produces a structural
    /// result for the transport.
    ///
    /// # Errors
    ///
    /// [`HandlerFailure`] with a human-readable reason.
    async fn handle(&self, msg: &dyn Message) -> Result<serde_json::Value, HandlerFailure>;
}

/// Append-only builder for the process-lifetime handler table.
#[derive(Default)]
pub struct HandlerRegistryBuilder {
    handlers: HashMap<String, Arc<dyn Handler>>,
}

impl HandlerRegistryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the handler for a route.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateHandler`] if the route already has one.
    /// Callers must treat this as fatal and abort startup.
    pub fn register(
        &mut self,
        route: impl Into<String>,
        handler: Arc<dyn Handler>,
    ) -> Result<(), RegistryError> {
        let route = route.into();
        if self.handlers.contains_key(&route) {
            return Err(RegistryError::DuplicateHandler { route });
        }
        self.handlers.insert(route, handler);
        Ok(())
    }

    /// Freezes the handler table.
    #[must_use]
    pub fn build(self) -> HandlerRegistry {
        HandlerRegistry {
            handlers: self.handlers,
        }
    }
}

/// Immutable route-to-handler table.
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn Handler>>,
}

impl HandlerRegistry {
    /// Looks up the handler for a route. Exact match only; no wildcard or
    /// fallback routing.
    #[must_use]
    pub fn get(&self, route: &str) -> Option<Arc<dyn Handler>> {
        self.handlers.get(route).cloned()
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
