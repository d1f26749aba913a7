//! # Runtime Configuration
//!
//! Sectioned configuration with sane defaults and environment overrides.
//! Validated before startup; an invalid configuration prevents the process
//! from serving any message.

use signet_message::AppIdentity;
use thiserror::Error;

/// Complete runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Application identity configuration.
    pub app: AppConfig,
    /// Transport configuration.
    pub transport: TransportConfig,
}

impl RuntimeConfig {
    /// Loads configuration from defaults plus environment overrides.
    ///
    /// Recognized variables: `SIGNET_APP_SCHEME`, `SIGNET_APP_ID`.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(scheme) = std::env::var("SIGNET_APP_SCHEME") {
            config.app.scheme = scheme;
        }
        if let Ok(id) = std::env::var("SIGNET_APP_ID") {
            config.app.application_id = id;
        }
        config
    }

    /// Validates the configuration for startup.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app.scheme.is_empty() {
            return Err(ConfigError::EmptyScheme);
        }
        if self.app.application_id.is_empty() {
            return Err(ConfigError::EmptyApplicationId);
        }
        if self.transport.channel_capacity == 0 {
            return Err(ConfigError::ZeroChannelCapacity);
        }
        Ok(())
    }

    /// The application identity the approval gate compares senders against.
    #[must_use]
    pub fn identity(&self) -> AppIdentity {
        AppIdentity::new(self.app.scheme.clone(), self.app.application_id.clone())
    }
}

/// Application identity configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL scheme of in-process pages.
    pub scheme: String,
    /// This application's unique identifier.
    pub application_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scheme: "chrome-extension".to_string(),
            application_id: "signet-dev".to_string(),
        }
    }
}

/// Transport configuration.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Capacity of the inbound request channel before backpressure.
    pub channel_capacity: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The application scheme is empty.
    #[error("application scheme must not be empty")]
    EmptyScheme,

    /// The application id is empty.
    #[error("application id must not be empty; set SIGNET_APP_ID")]
    EmptyApplicationId,

    /// The transport channel capacity is zero.
    #[error("transport channel capacity must be at least 1")]
    ZeroChannelCapacity,
}
