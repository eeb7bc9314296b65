//! # gchat-webhook
//!
//! Send text and card messages to a Google Chat space through its incoming
//! webhook.
//!
//! - **[`client`]** -- [`WebhookClient`], which validates a message and
//!   POSTs it to the webhook URL.
//! - **[`validate`]** -- the client-side checks applied before sending,
//!   usable on their own ([`validate_text`], [`validate_card`],
//!   [`parse_card`]).
//! - **[`markup`]** -- helpers producing Google Chat inline markup
//!   ([`format`], [`mention`], [`link`]).
//!
//! # Example
//!
//! ```rust,no_run
//! use gchat_webhook::{FormatOptions, WebhookClient, WebhookConfig, format};
//!
//! # async fn example() -> gchat_webhook::Result<()> {
//! let client = WebhookClient::new(WebhookConfig::new(
//!     "https://chat.googleapis.com/v1/spaces/AAAA/messages?key=KEY&token=TOKEN",
//! ))?;
//! let heading = format("Deploy finished", &FormatOptions::new().bold());
//! let created = client.send_text(&heading).await?;
//! println!("created {:?}", created.name);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod markup;
pub mod validate;

pub use client::WebhookClient;
pub use markup::{FormatOptions, MentionType, format, link, mention};
pub use validate::{CardValidator, parse_card, validate_card, validate_text, validate_text_value};

pub use gchat_platform::http::{HttpClient, HttpResponse};
pub use gchat_types::card;
pub use gchat_types::{
    CardMessage, InvalidArgumentError, Result, SuccessResponse, ValidationError, Violation,
    ViolationKind, WebhookConfig, WebhookError,
};
