use serde::Deserialize;
use std::path::PathBuf;

use super::ConfigError;

/// Complete YAML configuration structure
///
/// All fields are optional to allow partial configuration. Values present
/// here override environment variables.
///
/// # Example YAML structure
/// ```yaml
/// server:
///   host: "0.0.0.0"
///   port: 3000
///   tls:
///     enabled: true
///     cert_path: "/etc/ssl/practice.pem"
///     key_path: "/etc/ssl/practice.key"
///
/// practice:
///   pinned_id: "arena-fysio-amsterdam"
///   default_id: "shafer-clinic"
///
/// providers:
///   playht_api_key: "your-playht-key"
///   playht_user_id: "your-playht-user"
///   playht_tts_url: "https://api.play.ht/api/v2/tts/stream"
///
/// security:
///   cors_allowed_origins: "https://shafer-clinic.example.com"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: Option<ServerYaml>,
    pub practice: Option<PracticeYaml>,
    pub providers: Option<ProvidersYaml>,
    pub security: Option<SecurityYaml>,
}

/// Server configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ServerYaml {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub tls: Option<TlsYaml>,
}

/// TLS configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TlsYaml {
    pub enabled: Option<bool>,
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
}

/// Practice selection from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PracticeYaml {
    /// Serve this practice for every request, ignoring the host
    pub pinned_id: Option<String>,
    /// Practice used when the host matches nothing
    pub default_id: Option<String>,
}

/// Provider credentials from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ProvidersYaml {
    /// Play.ht API key used when a caller does not send one
    pub playht_api_key: Option<String>,
    /// Play.ht user ID
    pub playht_user_id: Option<String>,
    /// Play.ht streaming endpoint
    pub playht_tts_url: Option<String>,
}

/// Security configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SecurityYaml {
    /// Comma-separated list of origins, or "*"
    pub cors_allowed_origins: Option<String>,
}

impl YamlConfig {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The YAML is malformed
    /// - Fields have invalid types
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        let config: YamlConfig = serde_yaml::from_str(&contents)?;

        Ok(config)
    }
}
