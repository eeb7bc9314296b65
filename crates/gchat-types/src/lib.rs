//! # gchat-types
//!
//! Core type definitions for the Google Chat webhook client.
//!
//! This crate is the foundation of the dependency graph -- the other
//! gchat crates depend on it. It contains:
//!
//! - **[`error`]** -- [`WebhookError`], [`InvalidArgumentError`] and
//!   [`ValidationError`]
//! - **[`card`]** -- the card and text message model
//! - **[`response`]** -- the service's success and error replies
//! - **[`config`]** -- [`WebhookConfig`]

pub mod card;
pub mod config;
pub mod error;
pub mod response;

pub use card::{CardMessage, MAX_TEXT_MESSAGE_LENGTH, TextMessage};
pub use config::WebhookConfig;
pub use error::{
    InvalidArgumentError, Result, ValidationError, Violation, ViolationKind, WebhookError,
};
pub use response::SuccessResponse;
