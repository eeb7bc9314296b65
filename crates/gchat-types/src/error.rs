//! Error types for the Google Chat webhook client.
//!
//! [`WebhookError`] is the top-level error returned by every fallible
//! operation. It has three kinds:
//!
//! - [`InvalidArgumentError`] -- a helper function was called with a bad
//!   argument (or the API rejected one).
//! - [`ValidationError`] -- a message failed client-side validation before
//!   anything was sent. Carries every [`Violation`] found.
//! - [`WebhookError::Unknown`] -- the transport failed. The underlying cause
//!   is logged by the client and deliberately not exposed here.

use std::fmt;

use thiserror::Error;

/// Message used by [`WebhookError::Unknown`] when none is given.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Top-level error type for the webhook client.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WebhookError {
    /// A helper received an argument it cannot work with.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),

    /// A message was rejected by client-side validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request could not be delivered or the service refused it.
    #[error("{message}")]
    Unknown {
        /// Generic, caller-facing description.
        message: String,
    },
}

impl WebhookError {
    /// The opaque transport failure with the default message.
    pub fn unknown() -> Self {
        Self::Unknown {
            message: UNKNOWN_ERROR_MESSAGE.into(),
        }
    }

    /// Returns `true` for [`WebhookError::Validation`].
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` for [`WebhookError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` for [`WebhookError::Unknown`].
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}

/// A convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, WebhookError>;

// ── InvalidArgumentError ────────────────────────────────────────────────

/// An argument passed to a helper (or rejected by the API) was invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidArgumentError {
    /// Name of the offending parameter (e.g. `"userId"`).
    pub field: String,
    /// The rejected value, when there was one.
    pub value: Option<String>,
    /// Human-readable description.
    pub message: String,
    /// `true` when the remote API rejected the argument rather than a
    /// local helper.
    pub from_api: bool,
}

impl InvalidArgumentError {
    /// An invalid argument passed to a local helper function.
    pub fn new(field: impl Into<String>, value: Option<String>) -> Self {
        Self::build(field.into(), value, false)
    }

    /// An argument the remote API reported as invalid.
    pub fn from_api(field: impl Into<String>, value: Option<String>) -> Self {
        Self::build(field.into(), value, true)
    }

    /// Replace the default message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    fn build(field: String, value: Option<String>, from_api: bool) -> Self {
        let message = if from_api {
            format!("Google Chat Webhook API: InvalidArgumentError. Field: '{field}'")
        } else {
            format!("Invalid argument provided to function call: '{field}'")
        };
        Self {
            field,
            value,
            message,
            from_api,
        }
    }
}

// ── ValidationError ─────────────────────────────────────────────────────

/// The rule a [`Violation`] broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// A required field is missing.
    Required,
    /// A string field is present but empty.
    EmptyString,
    /// A string is shorter than allowed.
    MinLength { min: usize, actual: usize },
    /// A string is longer than allowed.
    MaxLength { max: usize, actual: usize },
    /// A list is present but has fewer items than allowed.
    MinItems { min: usize },
    /// Exactly one of `fields` must be set; `present` lists the ones that are.
    ExactlyOneOf {
        fields: &'static [&'static str],
        present: Vec<&'static str>,
    },
    /// At most one of `fields` may be set.
    MutuallyExclusive { fields: &'static [&'static str] },
    /// The value is not an absolute URI.
    InvalidUri { value: String, reason: String },
    /// The value has the wrong JSON type.
    InvalidType {
        expected: &'static str,
        found: &'static str,
    },
    /// The document could not be decoded into the message model.
    Malformed { reason: String },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "is required"),
            Self::EmptyString => write!(f, "must not be empty"),
            Self::MinLength { min, actual } => {
                write!(f, "length must be at least {min} (got {actual})")
            }
            Self::MaxLength { max, actual } => {
                write!(f, "length must be at most {max} (got {actual})")
            }
            Self::MinItems { min } => write!(f, "must contain at least {min} item(s)"),
            Self::ExactlyOneOf { fields, present } if present.is_empty() => {
                write!(f, "exactly one of [{}] must be set, none is", fields.join(", "))
            }
            Self::ExactlyOneOf { fields, present } => write!(
                f,
                "exactly one of [{}] must be set, found [{}]",
                fields.join(", "),
                present.join(", ")
            ),
            Self::MutuallyExclusive { fields } => {
                write!(f, "only one of [{}] may be set", fields.join(", "))
            }
            Self::InvalidUri { value, reason } => {
                write!(f, "'{value}' is not a valid URI: {reason}")
            }
            Self::InvalidType { expected, found } => {
                write!(f, "must be a {expected} (got {found})")
            }
            Self::Malformed { reason } => write!(f, "malformed message: {reason}"),
        }
    }
}

/// One failed rule at one location in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Location of the offending value, e.g.
    /// `"cards[0].sections[0].widgets[1].buttons[0]"`. Empty for the root.
    pub path: String,
    /// The rule that was broken.
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(path: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "value {}", self.kind)
        } else {
            write!(f, "{} {}", self.path, self.kind)
        }
    }
}

/// A message failed client-side validation.
///
/// Always holds at least one [`Violation`]. The display form reports the
/// first one and how many others were found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed: {}", summarize(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

fn summarize(violations: &[Violation]) -> String {
    match violations {
        [] => "no violations recorded".into(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (and {} more)", rest.len()),
    }
}

impl ValidationError {
    /// Wrap a single violation.
    pub fn single(path: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            violations: vec![Violation::new(path, kind)],
        }
    }

    /// `Ok(())` when `violations` is empty, otherwise an error holding all
    /// of them.
    pub fn check(violations: Vec<Violation>) -> std::result::Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self { violations })
        }
    }

    /// Every violation, in document order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The first violation found.
    pub fn first(&self) -> Option<&Violation> {
        self.violations.first()
    }

    /// Returns `true` if any violation is located at `path`.
    pub fn has_path(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}
