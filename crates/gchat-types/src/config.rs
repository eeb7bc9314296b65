//! Webhook client configuration.

use serde::{Deserialize, Serialize};

/// Default request timeout applied by the native transport, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Configuration for `gchat_webhook::WebhookClient`.
///
/// The `url` is the full incoming-webhook URL of a Google Chat space,
/// including its `key` and `token` query parameters. It grants posting
/// rights, so treat it as a secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Webhook endpoint.
    #[serde(default, alias = "webhookUrl")]
    pub url: String,

    /// Request timeout for the default transport.
    #[serde(default = "default_timeout_secs", alias = "timeoutSecs")]
    pub timeout_secs: u64,
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// The URL with its query string removed, safe to put in logs.
    pub fn redacted_url(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}
