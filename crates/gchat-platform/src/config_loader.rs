//! Webhook configuration discovery and loading.
//!
//! The webhook URL is resolved in this order:
//! 1. An explicit override (e.g. the CLI's `--url` flag).
//! 2. The `WEBHOOK_URL` environment variable.
//! 3. The `url` key of a JSON config file. The file path comes from the
//!    caller or, failing that, the `GCHAT_WEBHOOK_CONFIG` environment variable.
//!
//! The timeout is taken from the config file when one is loaded, otherwise
//! the default applies.

use std::path::{Path, PathBuf};

use gchat_types::WebhookConfig;

use super::env::Environment;

/// Environment variable holding the webhook URL.
pub const URL_ENV_VAR: &str = "WEBHOOK_URL";

/// Environment variable holding the config file path.
pub const CONFIG_PATH_ENV_VAR: &str = "GCHAT_WEBHOOK_CONFIG";

/// Errors produced while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no webhook URL configured (tried --url, $WEBHOOK_URL and the config file)")]
    MissingUrl,
}

/// Pick the config file path: the explicit one, else `GCHAT_WEBHOOK_CONFIG`.
pub fn discover_config_path(env: &dyn Environment, explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    env.get_var(CONFIG_PATH_ENV_VAR)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

/// Parse a JSON config document.
pub fn parse_config(path: &Path, contents: &str) -> Result<WebhookConfig, ConfigError> {
    serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Combine the override, the environment and an optional file config.
pub fn resolve_config(
    env: &dyn Environment,
    url_override: Option<&str>,
    file_config: Option<WebhookConfig>,
) -> Result<WebhookConfig, ConfigError> {
    let mut config = file_config.unwrap_or_default();

    if let Some(url) = url_override.filter(|u| !u.is_empty()) {
        tracing::debug!("webhook url taken from override");
        config.url = url.to_owned();
    } else if let Some(url) = env.get_var(URL_ENV_VAR).filter(|u| !u.is_empty()) {
        tracing::debug!(var = URL_ENV_VAR, "webhook url taken from environment");
        config.url = url;
    }

    if config.url.is_empty() {
        return Err(ConfigError::MissingUrl);
    }
    Ok(config)
}

/// Load the configuration from every source.
#[cfg(feature = "native")]
pub async fn load_config(
    env: &dyn Environment,
    url_override: Option<&str>,
    config_path: Option<&Path>,
) -> Result<WebhookConfig, ConfigError> {
    let file_config = match discover_config_path(env, config_path) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config file");
            let contents = tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?;
            Some(parse_config(&path, &contents)?)
        }
        None => None,
    };

    resolve_config(env, url_override, file_config)
}
