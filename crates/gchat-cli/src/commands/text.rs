//! `gchat text` -- send a text message.

use clap::Args;

use gchat_webhook::{FormatOptions, WebhookClient, format};

/// Arguments for the `text` subcommand.
#[derive(Args, Debug)]
pub struct TextArgs {
    /// Message text.
    pub text: String,

    /// Wrap the text in bold markup.
    #[arg(long)]
    pub bold: bool,

    /// Wrap the text in italic markup.
    #[arg(long)]
    pub italic: bool,

    /// Wrap the text in strikethrough markup.
    #[arg(long)]
    pub strikethrough: bool,

    /// Wrap the text in inline monospace markup.
    #[arg(long)]
    pub monospace: bool,

    /// Wrap the text in a monospace block.
    #[arg(long)]
    pub monospace_block: bool,
}

impl TextArgs {
    fn format_options(&self) -> FormatOptions {
        FormatOptions {
            bold: self.bold,
            italic: self.italic,
            strikethrough: self.strikethrough,
            monospace: self.monospace,
            monospace_block: self.monospace_block,
        }
    }

    /// The message as it will be sent.
    pub fn message(&self) -> String {
        format(&self.text, &self.format_options())
    }
}

pub async fn run(client: &WebhookClient, args: TextArgs) -> anyhow::Result<()> {
    let response = client.send_text(&args.message()).await?;
    super::print_response(&response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: &str) -> TextArgs {
        TextArgs {
            text: text.into(),
            bold: false,
            italic: false,
            strikethrough: false,
            monospace: false,
            monospace_block: false,
        }
    }

    #[test]
    fn plain_message_is_unchanged() {
        assert_eq!(args("hello").message(), "hello");
    }

    #[test]
    fn flags_apply_markup() {
        let mut a = args("hello");
        a.bold = true;
        a.strikethrough = true;
        assert_eq!(a.message(), "~*hello*~");
    }
}
