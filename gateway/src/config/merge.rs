use std::path::PathBuf;

use super::env::EnvConfig;
use super::validation;
use super::yaml::YamlConfig;
use super::{ConfigError, ServerConfig};
use crate::core::tts::PLAYHT_TTS_URL;
use crate::practice::DEFAULT_PRACTICE_ID;

/// Builds the server configuration from environment variables, with values
/// from `yaml` taking precedence.
pub(super) fn merge_config(yaml: Option<YamlConfig>) -> Result<ServerConfig, ConfigError> {
    let env = EnvConfig::load()?;
    let yaml = yaml.unwrap_or_default();

    let server = yaml.server.unwrap_or_default();
    let tls = server.tls.unwrap_or_default();
    let practice = yaml.practice.unwrap_or_default();
    let providers = yaml.providers.unwrap_or_default();
    let security = yaml.security.unwrap_or_default();

    let tls = validation::validate_tls(
        tls.enabled.unwrap_or(env.tls_enabled),
        tls.cert_path.map(PathBuf::from).or(env.tls_cert_path),
        tls.key_path.map(PathBuf::from).or(env.tls_key_path),
    )?;

    let pinned_practice_id = non_empty(practice.pinned_id).or(env.pinned_practice_id);
    let default_practice_id = non_empty(practice.default_id)
        .or(env.default_practice_id)
        .unwrap_or_else(|| DEFAULT_PRACTICE_ID.to_string());

    Ok(ServerConfig {
        host: server.host.unwrap_or(env.host),
        port: server.port.unwrap_or(env.port),
        tls,
        pinned_practice_id,
        default_practice_id,
        playht_api_key: non_empty(providers.playht_api_key).or(env.playht_api_key),
        playht_user_id: non_empty(providers.playht_user_id).or(env.playht_user_id),
        playht_tts_url: non_empty(providers.playht_tts_url)
            .or(env.playht_tts_url)
            .unwrap_or_else(|| PLAYHT_TTS_URL.to_string()),
        cors_allowed_origins: non_empty(security.cors_allowed_origins)
            .or(env.cors_allowed_origins),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
