use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "crosstalk.toml",
    "config/crosstalk.toml",
    ".config/crosstalk.toml",
    "../crosstalk.toml",
    "../config/crosstalk.toml",
];

/// Connection settings for the Crosstalk chat service.
///
/// ```
/// use crosstalk_config::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(config.base_url, "https://chat.crosstalk.dev");
/// assert_eq!(config.request_timeout_seconds, 30);
/// assert!(config.api_key.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Application key identifying the tenant, sent with every request.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Application secret used to sign server tokens. Never sent over the wire.
    #[serde(default)]
    pub api_secret: Option<String>,
    #[serde(default = "ClientConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "ClientConfig::default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl ClientConfig {
    fn default_base_url() -> String {
        "https://chat.crosstalk.dev".to_string()
    }

    const fn default_request_timeout() -> u64 {
        30
    }

    /// Return the key/secret pair, failing when either is missing or empty.
    pub fn credentials(&self) -> anyhow::Result<(&str, &str)> {
        let key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .context("missing Crosstalk API key")?;
        let secret = self
            .api_secret
            .as_deref()
            .filter(|secret| !secret.is_empty())
            .context("missing Crosstalk API secret")?;

        Ok((key, secret))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            base_url: Self::default_base_url(),
            request_timeout_seconds: Self::default_request_timeout(),
        }
    }
}

/// Load the client configuration by combining defaults, files, and environment overrides.
///
/// The file is taken from `CROSSTALK_CONFIG` when set, otherwise the first
/// existing candidate relative to the working directory. Environment variables
/// use the `CROSSTALK` prefix with `__` as the separator, e.g.
/// `CROSSTALK__API_KEY`.
pub fn load() -> anyhow::Result<ClientConfig> {
    let defaults = ClientConfig::default();

    let mut builder = config::Config::builder();
    builder = builder
        .set_default("base_url", defaults.base_url.clone())
        .unwrap()
        .set_default(
            "request_timeout_seconds",
            i64::try_from(defaults.request_timeout_seconds).unwrap_or(i64::MAX),
        )
        .unwrap();

    let environment_overrides = config::Environment::with_prefix("CROSSTALK").separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("CROSSTALK_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via CROSSTALK_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<ClientConfig>()
        .context("invalid configuration")?;

    debug!(base_url = %config.base_url, "loaded client configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_credentials() {
        let config = ClientConfig::default();
        assert!(config.api_key.is_none());
        assert!(config.api_secret.is_none());
        assert!(config.credentials().is_err());
    }

    #[test]
    fn credentials_require_both_halves() {
        let mut config = ClientConfig::default();
        config.api_key = Some("key".to_string());
        assert!(config.credentials().is_err());

        config.api_secret = Some(String::new());
        assert!(config.credentials().is_err());

        config.api_secret = Some("secret".to_string());
        let (key, secret) = config.credentials().expect("credentials present");
        assert_eq!(key, "key");
        assert_eq!(secret, "secret");
    }
}
