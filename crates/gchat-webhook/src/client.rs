//! Webhook client.
//!
//! [`WebhookClient`] validates a message, POSTs it to the configured
//! incoming-webhook URL and decodes the created message from the reply.
//! Every failure after validation is logged here and surfaced to the caller
//! as the opaque [`WebhookError::Unknown`].

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, warn};

use gchat_platform::http::{HttpClient, HttpResponse};
use gchat_types::response::ErrorResponse;
use gchat_types::{
    CardMessage, InvalidArgumentError, Result, SuccessResponse, TextMessage, ValidationError,
    WebhookConfig, WebhookError,
};

use crate::validate::{CardValidator, check_uri, validate_text};

/// Longest slice of a failed reply body copied into the error log.
const BODY_EXCERPT_LEN: usize = 512;

/// Client for one Google Chat incoming webhook.
///
/// Holds only immutable state and is cheap to share: wrap it in an `Arc`
/// (or clone it) to send from several tasks at once.
#[derive(Clone)]
pub struct WebhookClient {
    config: WebhookConfig,
    http: Arc<dyn HttpClient>,
    validator: CardValidator,
}

impl std::fmt::Debug for WebhookClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookClient")
            .field("url", &self.config.redacted_url())
            .field("timeout_secs", &self.config.timeout_secs)
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

impl WebhookClient {
    /// Create a client backed by the native HTTP transport.
    #[cfg(feature = "native")]
    pub fn new(config: WebhookConfig) -> Result<Self> {
        let timeout = std::time::Duration::from_secs(config.timeout_secs);
        let http = Arc::new(gchat_platform::http::NativeHttpClient::with_timeout(timeout));
        Self::with_http(config, http)
    }

    /// Create a client that sends through `http`.
    ///
    /// Fails with an invalid-argument error (field `url`) when the
    /// configured URL is not an absolute URI.
    pub fn with_http(config: WebhookConfig, http: Arc<dyn HttpClient>) -> Result<Self> {
        if check_uri(&config.url).is_err() {
            return Err(InvalidArgumentError::new("url", Some(config.redacted_url().to_owned()))
                .with_message("webhook url must be an absolute URI")
                .into());
        }
        Ok(Self {
            config,
            http,
            validator: CardValidator::default(),
        })
    }

    /// Replace the validator used by [`send_card`](Self::send_card).
    pub fn with_validator(mut self, validator: CardValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn config(&self) -> &WebhookConfig {
        &self.config
    }

    /// Send a plain text message.
    ///
    /// On a 2xx reply the created message is returned. An empty 2xx body
    /// yields a default [`SuccessResponse`]. A 2xx body that is not a JSON
    /// object is reported as [`WebhookError::Unknown`] even though the
    /// service has accepted the message.
    pub async fn send_text(&self, text: &str) -> Result<SuccessResponse> {
        validate_text(text).map_err(|e| self.rejected("text", e))?;
        self.post("text", &TextMessage::new(text)).await
    }

    /// Send a card message. Replies are handled as in
    /// [`send_text`](Self::send_text).
    pub async fn send_card(&self, card: &CardMessage) -> Result<SuccessResponse> {
        self.validator
            .validate(card)
            .map_err(|e| self.rejected("card", e))?;
        self.post("card", card).await
    }

    fn rejected(&self, kind: &'static str, err: ValidationError) -> WebhookError {
        warn!(
            kind,
            violations = err.violations().len(),
            error = %err,
            "message rejected by validation"
        );
        err.into()
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        kind: &'static str,
        message: &T,
    ) -> Result<SuccessResponse> {
        let url = self.config.redacted_url();
        let body = serde_json::to_vec(message).map_err(|e| {
            error!(kind, error = %e, "failed to encode message");
            WebhookError::unknown()
        })?;

        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_owned(), "application/json".to_owned());

        debug!(kind, url = %url, bytes = body.len(), "sending webhook message");

        let response = self
            .http
            .post(&self.config.url, &headers, &body)
            .await
            .map_err(|e| {
                error!(kind, url = %url, error = %e, "webhook request failed");
                WebhookError::unknown()
            })?;

        if !response.is_success() {
            log_rejection(kind, url, &response);
            return Err(WebhookError::unknown());
        }

        if response.body.iter().all(u8::is_ascii_whitespace) {
            debug!(kind, status = response.status, "webhook message accepted with empty reply");
            return Ok(SuccessResponse::default());
        }

        let created: SuccessResponse = response.json().map_err(|e| {
            error!(
                kind,
                url = %url,
                status = response.status,
                content_type = response.header("content-type").unwrap_or_default(),
                error = %e,
                body = %excerpt(&response),
                "could not decode webhook response"
            );
            WebhookError::unknown()
        })?;

        debug!(
            kind,
            status = response.status,
            name = created.name.as_deref().unwrap_or_default(),
            "webhook message created"
        );
        Ok(created)
    }
}

fn log_rejection(kind: &str, url: &str, response: &HttpResponse) {
    let decoded = response.json::<ErrorResponse>().ok();
    match decoded.as_ref().and_then(|d| d.error.as_ref().map(|api| (d, api))) {
        Some((decoded, api)) => {
            let fields: Vec<String> = decoded
                .field_violations()
                .into_iter()
                .map(|(field, description)| format!("{field}: {description}"))
                .collect();
            error!(
                kind,
                url = %url,
                status = response.status,
                code = ?api.code,
                api_status = api.status.as_deref().unwrap_or_default(),
                message = api.message.as_deref().unwrap_or_default(),
                field_violations = ?fields,
                "webhook rejected message"
            );
        }
        None => {
            error!(
                kind,
                url = %url,
                status = response.status,
                content_type = response.header("content-type").unwrap_or_default(),
                body = %excerpt(response),
                "webhook rejected message"
            );
        }
    }
}

fn excerpt(response: &HttpResponse) -> String {
    let text = response.text_lossy();
    match text.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text,
    }
}
