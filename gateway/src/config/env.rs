//! Environment variable loading.
//!
//! `.env` is loaded into the process environment by `main` before this runs,
//! so real environment variables and `.env` values look the same here.

use std::env;
use std::path::PathBuf;

use super::ConfigError;

pub(super) const DEFAULT_HOST: &str = "0.0.0.0";
pub(super) const DEFAULT_PORT: u16 = 3000;

/// Raw configuration values read from the environment.
///
/// Nothing is validated yet; `merge` overlays YAML and builds the final
/// `ServerConfig`.
#[derive(Debug, Default)]
pub(super) struct EnvConfig {
    pub host: String,
    pub port: u16,
    pub tls_enabled: bool,
    pub tls_cert_path: Option<PathBuf>,
    pub tls_key_path: Option<PathBuf>,
    pub pinned_practice_id: Option<String>,
    pub default_practice_id: Option<String>,
    pub playht_api_key: Option<String>,
    pub playht_user_id: Option<String>,
    pub playht_tts_url: Option<String>,
    pub cors_allowed_origins: Option<String>,
}

impl EnvConfig {
    pub(super) fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: match var("PORT") {
                Some(port) => parse_port("PORT", &port)?,
                None => DEFAULT_PORT,
            },
            tls_enabled: match var("TLS_ENABLED") {
                Some(value) => parse_bool("TLS_ENABLED", &value)?,
                None => false,
            },
            tls_cert_path: var("TLS_CERT_PATH").map(PathBuf::from),
            tls_key_path: var("TLS_KEY_PATH").map(PathBuf::from),
            pinned_practice_id: var("PRACTICE_ID"),
            default_practice_id: var("DEFAULT_PRACTICE_ID"),
            playht_api_key: var("PLAYHT_API_KEY"),
            playht_user_id: var("PLAYHT_USER_ID"),
            playht_tts_url: var("PLAYHT_TTS_URL"),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS"),
        })
    }
}

/// Reads a variable, treating empty and whitespace-only values as unset.
fn var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub(super) fn parse_port(key: &str, value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

pub(super) fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("X", "true").unwrap());
        assert!(parse_bool("X", "YES").unwrap());
        assert!(parse_bool("X", "1").unwrap());
        assert!(!parse_bool("X", "false").unwrap());
        assert!(!parse_bool("X", "off").unwrap());

        let err = parse_bool("TLS_ENABLED", "maybe").unwrap_err();
        assert!(err.to_string().contains("TLS_ENABLED"));
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("PORT", "3020").unwrap(), 3020);
        assert!(parse_port("PORT", "70000").is_err());
        assert!(parse_port("PORT", "http").is_err());
    }
}
