//! # Sender Metadata and Application Identity
//!
//! [`SenderMeta`] is produced only by the host transport and is treated as
//! untrusted input everywhere in the pipeline. [`AppIdentity`] is this
//! process's own identity, supplied by runtime configuration, against which
//! the default approval policy compares senders.

use serde::{Deserialize, Serialize};

/// Untrusted metadata about the execution context a message came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderMeta {
    /// Full URL of the sending context, if the transport knows it.
    pub origin_url: Option<String>,
    /// Identifier of the application the sending context belongs to.
    pub application_id: String,
}

impl SenderMeta {
    /// The origin (scheme + authority) of `origin_url`, if present and
    /// well-formed.
    #[must_use]
    pub fn origin(&self) -> Option<String> {
        self.origin_url.as_deref().and_then(origin_of)
    }
}

/// The running application's own identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppIdentity {
    /// URL scheme of in-process pages (e.g. `chrome-extension`).
    pub scheme: String,
    /// The application's unique identifier.
    pub application_id: String,
}

impl AppIdentity {
    /// Creates an identity from scheme and application id.
    pub fn new(scheme: impl Into<String>, application_id: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            application_id: application_id.into(),
        }
    }

    /// The expected origin of self-originated messages.
    #[must_use]
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.application_id)
    }
}

/// Extracts the origin (everything up to the first path segment) from a URL.
///
/// Returns `None` when the text has no `scheme://` prefix.
#[must_use]
pub fn origin_of(url: &str) -> Option<String> {
    let scheme_end = url.find("://")?;
    let rest = &url[scheme_end + 3..];
    let authority_end = rest
        .find(['/', '?', '#'])
        .map_or(url.len(), |i| scheme_end + 3 + i);
    Some(url[..authority_end].to_string())
}
