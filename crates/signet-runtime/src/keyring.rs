//! # Keyring Route
//!
//! Message variants and the handler for the `keyring` handler group.
//! Key material itself is out of scope; the handler serves public metadata
//! about keys and lets in-app pages relabel them.

use std::any::Any;
use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use signet_message::{Message, ValidationError};
use signet_router::{Handler, HandlerFailure};
use signet_unit::Uint;
use tokio::sync::RwLock;
use tracing::info;

/// Route key for the keyring handler group.
pub const ROUTE: &str = "keyring";

/// Discriminant for [`GetKeyMsg`].
pub const GET_KEY_TYPE: &str = "get-key";

/// Discriminant for [`SetLabelMsg`].
pub const SET_LABEL_TYPE: &str = "set-label";

/// Longest accepted key label.
const MAX_LABEL_LEN: usize = 64;

/// Requests public metadata for one key.
#[derive(Debug, Deserialize)]
pub struct GetKeyMsg {
    /// Identifier of the key to look up.
    pub key_id: String,
}

impl Message for GetKeyMsg {
    fn route(&self) -> &'static str {
        ROUTE
    }

    fn msg_type(&self) -> &'static str {
        GET_KEY_TYPE
    }

    fn validate_basic(&self) -> Result<(), ValidationError> {
        if self.key_id.is_empty() {
            return Err(ValidationError::new("key_id must not be empty"));
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Relabels a key and updates its per-transaction spend limit.
#[derive(Debug, Deserialize)]
pub struct SetLabelMsg {
    /// Identifier of the key to update.
    pub key_id: String,
    /// New display label.
    pub label: String,
    /// New spend limit in base token units.
    pub spend_limit: Uint,
}

impl Message for SetLabelMsg {
    fn route(&self) -> &'static str {
        ROUTE
    }

    fn msg_type(&self) -> &'static str {
        SET_LABEL_TYPE
    }

    fn validate_basic(&self) -> Result<(), ValidationError> {
        if self.key_id.is_empty() {
            return Err(ValidationError::new("key_id must not be empty"));
        }
        if self.label.is_empty() {
            return Err(ValidationError::new("label must not be empty"));
        }
        if self.label.len() > MAX_LABEL_LEN {
            return Err(ValidationError::new(format!(
                "label exceeds {MAX_LABEL_LEN} bytes"
            )));
        }
        if self.spend_limit.is_zero() {
            return Err(ValidationError::new("spend_limit must be positive"));
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// One keyring entry.
#[derive(Debug, Clone)]
struct KeyEntry {
    public_key: String,
    label: String,
    spend_limit: Uint,
}

/// Handler for all `keyring` messages.
pub struct KeyringHandler {
    keys: RwLock<HashMap<String, KeyEntry>>,
}

impl KeyringHandler {
    /// Creates a handler seeded with the development key.
    #[must_use]
    pub fn new() -> Self {
        let mut keys = HashMap::new();
        keys.insert(
            "primary".to_string(),
            KeyEntry {
                public_key: "signetpub1qxyzdemo".to_string(),
                label: "Primary account".to_string(),
                spend_limit: Uint::from_u128(1_000_000),
            },
        );
        Self {
            keys: RwLock::new(keys),
        }
    }

    async fn get_key(&self, msg: &GetKeyMsg) -> Result<serde_json::Value, HandlerFailure> {
        let keys = self.keys.read().await;
        let entry = keys
            .get(&msg.key_id)
            .ok_or_else(|| HandlerFailure::new(format!("unknown key {:?}", msg.key_id)))?;
        Ok(json!({
            "key_id": msg.key_id,
            "public_key": entry.public_key,
            "label": entry.label,
            "spend_limit": entry.spend_limit.to_string(),
        }))
    }

    async fn set_label(&self, msg: &SetLabelMsg) -> Result<serde_json::Value, HandlerFailure> {
        let mut keys = self.keys.write().await;
        let entry = keys
            .get_mut(&msg.key_id)
            .ok_or_else(|| HandlerFailure::new(format!("unknown key {:?}", msg.key_id)))?;
        entry.label = msg.label.clone();
        entry.spend_limit = msg.spend_limit;
        info!("[Keyring] Relabeled {:?} to {:?}", msg.key_id, msg.label);
        Ok(json!({ "updated": true }))
    }
}

impl Default for KeyringHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Handler for KeyringHandler {
    async fn handle(&self, msg: &dyn Message) -> Result<serde_json::Value, HandlerFailure> {
        if let Some(get) = msg.as_any().downcast_ref::<GetKeyMsg>() {
            return self.get_key(get).await;
        }
        if let Some(set) = msg.as_any().downcast_ref::<SetLabelMsg>() {
            return self.set_label(set).await;
        }
        Err(HandlerFailure::new(format!(
            "keyring route cannot handle message type {:?}",
            msg.msg_type()
        )))
    }
}

// =============================================================================
// TESTS
// =============================================================================
