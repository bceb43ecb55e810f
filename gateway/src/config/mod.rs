//! Configuration module for the practice gateway
//!
//! This module handles server configuration from various sources: .env files, YAML files,
//! and environment variables. Priority: YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `merge`: Merging YAML and environment configurations
//! - `validation`: Configuration validation logic
//!
//! # Example
//! ```rust,no_run
//! use practice_gateway::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ServerConfig::from_env()?;
//!
//! // Load from YAML file with environment variable overrides
//! let config_path = PathBuf::from("config.yaml");
//! let config = ServerConfig::from_file(&config_path)?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

mod env;
mod merge;
mod validation;
mod yaml;

use crate::core::tts::playht::{FALLBACK_API_KEY, FALLBACK_USER_ID};
use crate::practice::PracticeRegistry;

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("{key} refers to unknown practice '{id}'")]
    UnknownPractice { key: &'static str, id: String },

    #[error("Invalid TLS configuration: {0}")]
    Tls(String),
}

/// TLS configuration for HTTPS
#[derive(Debug, Clone)]
pub struct TlsConfig {
    /// Path to the TLS certificate file (PEM format)
    pub cert_path: PathBuf,
    /// Path to the TLS private key file (PEM format)
    pub key_path: PathBuf,
}

/// Server configuration
///
/// Contains all configuration needed to run the gateway:
/// - Server settings (host, port, TLS)
/// - Practice selection (pinned practice, default practice)
/// - Play.ht credentials and endpoint
/// - CORS settings for the practice API
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // TLS configuration (optional)
    pub tls: Option<TlsConfig>,

    // Practice selection
    /// When set, every request is served this practice regardless of host
    pub pinned_practice_id: Option<String>,
    /// Practice used when the request host matches no practice
    pub default_practice_id: String,

    // Play.ht
    /// API key used when a caller does not send one
    pub playht_api_key: Option<String>,
    /// Play.ht user ID sent as `X-USER-ID`
    pub playht_user_id: Option<String>,
    /// Play.ht streaming endpoint
    pub playht_tts_url: String,

    // Security configuration
    /// CORS allowed origins (comma-separated list or "*" for all)
    /// Default: None (CORS disabled, same-origin only)
    pub cors_allowed_origins: Option<String>,
}

/// Zeroize secret fields when ServerConfig is dropped.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        if let Some(ref mut key) = self.playht_api_key {
            key.zeroize();
        }
        if let Some(ref mut user_id) = self.playht_user_id {
            user_id.zeroize();
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables only.
    ///
    /// # Errors
    /// Returns an error if a variable has an invalid format or validation fails.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = merge::merge_config(None)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file with environment variable base
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    ///
    /// # Errors
    /// Returns an error if:
    /// - The YAML file cannot be read or is malformed
    /// - Environment variables have invalid formats
    /// - Configuration validation fails
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        // Note: .env file is loaded in main.rs at application startup
        let yaml_config = yaml::YamlConfig::from_file(path)?;

        let config = merge::merge_config(Some(yaml_config))?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_practice_ids(
            self.pinned_practice_id.as_deref(),
            &self.default_practice_id,
        )
    }

    /// Get the server address as a string
    ///
    /// Returns the address in the format "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if TLS is enabled
    ///
    /// Returns true if TLS configuration is present
    pub fn is_tls_enabled(&self) -> bool {
        self.tls.is_some()
    }

    /// Builds the practice registry this deployment serves.
    ///
    /// # Errors
    /// `ConfigError::UnknownPractice` when a configured id is not in the catalog.
    pub fn practice_registry(&self) -> Result<PracticeRegistry, ConfigError> {
        let registry = PracticeRegistry::with_default(&self.default_practice_id).ok_or_else(
            || ConfigError::UnknownPractice {
                key: "DEFAULT_PRACTICE_ID",
                id: self.default_practice_id.clone(),
            },
        )?;

        match self.pinned_practice_id.as_deref() {
            Some(id) => {
                let practice =
                    registry
                        .lookup(id)
                        .ok_or_else(|| ConfigError::UnknownPractice {
                            key: "PRACTICE_ID",
                            id: id.to_string(),
                        })?;
                Ok(registry.pin_to(practice))
            }
            None => Ok(registry),
        }
    }

    /// Get Play.ht credentials (API key and user ID)
    ///
    /// The caller's key wins when it is non-empty, then the configured key,
    /// then the built-in fallback. The user ID falls back the same way.
    ///
    /// # Returns
    /// * `(String, String)` - Tuple of (api_key, user_id)
    pub fn get_playht_credentials(&self, request_api_key: Option<&str>) -> (String, String) {
        let api_key = request_api_key
            .filter(|key| !key.is_empty())
            .or(self.playht_api_key.as_deref())
            .unwrap_or(FALLBACK_API_KEY)
            .to_string();
        let user_id = self
            .playht_user_id
            .as_deref()
            .unwrap_or(FALLBACK_USER_ID)
            .to_string();
        (api_key, user_id)
    }
}
