//! `gchat demo` -- send a sample status text and a sample card.

use chrono::{SecondsFormat, Utc};

use gchat_webhook::card::{BuiltInIcon, Button, Card, CardImageStyle, Header, Section, Widget};
use gchat_webhook::{CardMessage, FormatOptions, WebhookClient, format};

const HEADER_IMAGE: &str = "https://www.appgefahren.de/wp-content/uploads/2020/01/unsplash-icon.jpg";
const PHOTO: &str = "https://images.unsplash.com/photo-1541960071727-c531398e7494?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=1350&q=80";
const DOWNLOAD: &str = "https://unsplash.com/photos/wxWulfjN-G0/download?force=true&w=640";
const EXPLORE: &str = "https://unsplash.com/";

/// Bold status heading followed by a monospace block.
pub fn status_text(now: chrono::DateTime<Utc>) -> String {
    let heading = format(
        format!(
            "Status update ({})",
            now.to_rfc3339_opts(SecondsFormat::Millis, true)
        ),
        &FormatOptions::new().bold(),
    );
    let code = format(
        "This is a monospace block.\nWe can use it for code or other special markup needs.",
        &FormatOptions::new().monospace_block(),
    );
    format!("{heading}\n{code}")
}

/// A photo card with a bookmark image button and a text button.
pub fn sample_card() -> CardMessage {
    CardMessage::new(vec![
        Card::new(vec![Section::new(vec![
            Widget::image(PHOTO),
            Widget::buttons(vec![
                Button::image_icon(BuiltInIcon::Bookmark, DOWNLOAD),
                Button::text("Explore more...", EXPLORE),
            ]),
        ])])
        .with_header(
            Header::new("Unsplash daily bot")
                .subtitle("Fresh inspiration every day")
                .image(HEADER_IMAGE, CardImageStyle::Avatar),
        ),
    ])
}

pub async fn run(client: &WebhookClient) -> anyhow::Result<()> {
    let text = client.send_text(&status_text(Utc::now())).await?;
    super::print_response(&text)?;
    let card = client.send_card(&sample_card()).await?;
    super::print_response(&card)
}
