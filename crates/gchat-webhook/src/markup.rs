//! Google Chat text markup helpers.
//!
//! Pure string builders for the inline formatting Google Chat understands:
//! emphasis delimiters, user mentions and labelled links.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use gchat_types::{InvalidArgumentError, Result, ValidationError, ViolationKind};

use crate::validate::check_uri;

/// Which emphasis styles [`format`] applies. All off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub monospace: bool,
    pub monospace_block: bool,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    pub fn monospace(mut self) -> Self {
        self.monospace = true;
        self
    }

    pub fn monospace_block(mut self) -> Self {
        self.monospace_block = true;
        self
    }
}

/// Wrap `text` in the delimiters selected by `options`.
///
/// Wrapping always happens in the same order regardless of which flags are
/// set: bold innermost, then italic, strikethrough, monospace, and the
/// monospace block outermost.
///
/// ```
/// use gchat_webhook::markup::{format, FormatOptions};
///
/// let opts = FormatOptions::new().bold().italic().strikethrough();
/// assert_eq!(format("test", &opts), "~_*test*_~");
/// ```
pub fn format(text: impl Display, options: &FormatOptions) -> String {
    let mut text = text.to_string();
    if options.bold {
        text = format!("*{text}*");
    }
    if options.italic {
        text = format!("_{text}_");
    }
    if options.strikethrough {
        text = format!("~{text}~");
    }
    if options.monospace {
        text = format!("`{text}`");
    }
    if options.monospace_block {
        text = format!("```\n{text}\n```");
    }
    text
}

/// Who a mention notifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MentionType {
    /// Everyone in the space.
    All,
    /// One user, identified by id.
    SpecificUser,
}

impl FromStr for MentionType {
    type Err = InvalidArgumentError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(Self::All),
            "SPECIFIC_USER" => Ok(Self::SpecificUser),
            other => Err(InvalidArgumentError::new("type", Some(other.to_owned()))),
        }
    }
}

/// Mention markup: `<users/all>` or `<users/{user_id}>`.
///
/// A [`MentionType::SpecificUser`] mention needs a non-empty `user_id`.
pub fn mention(kind: MentionType, user_id: Option<&str>) -> Result<String> {
    match kind {
        MentionType::All => Ok("<users/all>".to_owned()),
        MentionType::SpecificUser => match user_id {
            Some(id) if !id.is_empty() => Ok(format!("<users/{id}>")),
            _ => Err(InvalidArgumentError::new("userId", user_id.map(str::to_owned))
                .with_message("UserId must be set if type is 'SPECIFIC_USER'")
                .into()),
        },
    }
}

/// Link markup `<uri|text>`. The text defaults to the URI itself.
///
/// Fails with a validation error when `uri` is not an absolute URI.
pub fn link(uri: &str, text: Option<&str>) -> Result<String> {
    if uri.is_empty() {
        return Err(ValidationError::single("uri", ViolationKind::Required).into());
    }
    check_uri(uri).map_err(|kind| ValidationError::single("uri", kind))?;
    let text = text.filter(|t| !t.is_empty()).unwrap_or(uri);
    Ok(format!("<{uri}|{text}>"))
}
