use std::path::PathBuf;

use super::{ConfigError, TlsConfig};
use crate::practice::PracticeRegistry;

/// Builds the TLS configuration.
///
/// TLS needs both a certificate and a key path when enabled. Paths given
/// while TLS is disabled are ignored.
pub(super) fn validate_tls(
    enabled: bool,
    cert_path: Option<PathBuf>,
    key_path: Option<PathBuf>,
) -> Result<Option<TlsConfig>, ConfigError> {
    if !enabled {
        return Ok(None);
    }

    match (cert_path, key_path) {
        (Some(cert_path), Some(key_path)) => Ok(Some(TlsConfig {
            cert_path,
            key_path,
        })),
        (None, _) => Err(ConfigError::Tls(
            "TLS is enabled but TLS_CERT_PATH (server.tls.cert_path) is not set".to_string(),
        )),
        (_, None) => Err(ConfigError::Tls(
            "TLS is enabled but TLS_KEY_PATH (server.tls.key_path) is not set".to_string(),
        )),
    }
}

/// Checks that configured practice ids exist in the catalog.
pub(super) fn validate_practice_ids(
    pinned_id: Option<&str>,
    default_id: &str,
) -> Result<(), ConfigError> {
    let registry = PracticeRegistry::new();

    if let Some(id) = pinned_id {
        if registry.lookup(id).is_none() {
            return Err(ConfigError::UnknownPractice {
                key: "PRACTICE_ID",
                id: id.to_string(),
            });
        }
    }

    if registry.lookup(default_id).is_none() {
        return Err(ConfigError::UnknownPractice {
            key: "DEFAULT_PRACTICE_ID",
            id: default_id.to_string(),
        });
    }

    Ok(())
}
