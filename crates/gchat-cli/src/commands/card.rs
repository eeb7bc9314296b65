//! `gchat card` -- send a card message from a JSON file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use gchat_webhook::{CardMessage, WebhookClient, parse_card};

/// Arguments for the `card` subcommand.
#[derive(Args, Debug)]
pub struct CardArgs {
    /// Path to a JSON card document (`{"cards": [...]}`).
    pub file: PathBuf,
}

/// Read and validate a card document.
pub async fn read_card(path: &Path) -> anyhow::Result<CardMessage> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read card file {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse card file {}", path.display()))?;
    let card = parse_card(value).with_context(|| format!("invalid card in {}", path.display()))?;
    Ok(card)
}

pub async fn run(client: &WebhookClient, args: CardArgs) -> anyhow::Result<()> {
    let card = read_card(&args.file).await?;
    let response = client.send_card(&card).await?;
    super::print_response(&response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_valid_card() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"cards": [{{"sections": [{{"widgets": [{{"textParagraph": {{"text": "hi"}}}}]}}]}}]}}"#
        )
        .unwrap();
        let card = read_card(file.path()).await.unwrap();
        assert_eq!(card.cards.map(|c| c.len()), Some(1));
    }

    #[tokio::test]
    async fn rejects_invalid_card() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"cards": []}}"#).unwrap();
        let err = read_card(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("invalid card"));
    }

    #[tokio::test]
    async fn rejects_non_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "cards:").unwrap();
        let err = read_card(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
