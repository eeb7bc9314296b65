//! CLI command implementations for `gchat`.
//!
//! - [`text`] -- Send a formatted text message.
//! - [`card`] -- Send a card read from a JSON file.
//! - [`demo`] -- Send the sample status text and card.

pub mod card;
pub mod demo;
pub mod text;

use std::path::Path;

use gchat_platform::config_loader;
use gchat_platform::env::NativeEnvironment;
use gchat_webhook::{SuccessResponse, WebhookClient};

/// Resolve the webhook configuration and build a client from it.
///
/// The URL comes from `url_override`, then `$WEBHOOK_URL`, then the config
/// file (`config_path` or `$GCHAT_WEBHOOK_CONFIG`).
pub async fn build_client(
    url_override: Option<&str>,
    config_path: Option<&Path>,
) -> anyhow::Result<WebhookClient> {
    let config = config_loader::load_config(&NativeEnvironment, url_override, config_path).await?;
    tracing::debug!(url = %config.redacted_url(), timeout_secs = config.timeout_secs, "webhook configured");
    Ok(WebhookClient::new(config)?)
}

/// Print the created message as pretty JSON on stdout.
pub fn print_response(response: &SuccessResponse) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}
