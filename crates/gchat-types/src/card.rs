//! Card message model.
//!
//! Mirrors the webhook's card wire format: a [`CardMessage`] holds cards,
//! cards hold sections, sections hold widgets, and a [`Widget`] holds exactly
//! one kind of content. Every field the wire format treats as optional is an
//! `Option` here, so a value can represent shapes the service would reject;
//! the validator in `gchat-webhook` is what enforces the rules.
//!
//! Unknown JSON fields are rejected on deserialization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Longest text message the service accepts, in UTF-16 code units.
pub const MAX_TEXT_MESSAGE_LENGTH: usize = 4096;

/// Body of a text message: `{"text": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMessage {
    pub text: String,
}

impl TextMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A card message document. Sent as the request body unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CardMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<Card>>,
}

impl CardMessage {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards: Some(cards) }
    }
}

/// One card: an optional header followed by sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Card {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
}

impl Card {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            header: None,
            sections: Some(sections),
        }
    }

    pub fn with_header(mut self, header: Header) -> Self {
        self.header = Some(header);
        self
    }
}

/// How the header image is cropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardImageStyle {
    Image,
    Avatar,
}

/// Card header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Header {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_style: Option<CardImageStyle>,
}

impl Header {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>, style: CardImageStyle) -> Self {
        self.image_url = Some(url.into());
        self.image_style = Some(style);
        self
    }
}

/// A group of widgets inside a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widgets: Option<Vec<Widget>>,
}

impl Section {
    pub fn new(widgets: Vec<Widget>) -> Self {
        Self {
            widgets: Some(widgets),
        }
    }
}

/// A single content unit. Exactly one field must be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Widget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_paragraph: Option<TextParagraph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_value: Option<KeyValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<Button>>,
}

impl Widget {
    /// Names of the mutually exclusive widget members, in wire spelling.
    pub const MEMBERS: &'static [&'static str] = &["textParagraph", "keyValue", "image", "buttons"];

    pub fn text_paragraph(text: impl Into<String>) -> Self {
        Self {
            text_paragraph: Some(TextParagraph {
                text: Some(text.into()),
            }),
            ..Default::default()
        }
    }

    pub fn key_value(key_value: KeyValue) -> Self {
        Self {
            key_value: Some(key_value),
            ..Default::default()
        }
    }

    pub fn image(image_url: impl Into<String>) -> Self {
        Self {
            image: Some(Image {
                image_url: Some(image_url.into()),
                on_click: None,
            }),
            ..Default::default()
        }
    }

    pub fn buttons(buttons: Vec<Button>) -> Self {
        Self {
            buttons: Some(buttons),
            ..Default::default()
        }
    }

    /// Wire names of the members that are set.
    pub fn present_members(&self) -> Vec<&'static str> {
        let flags = [
            self.text_paragraph.is_some(),
            self.key_value.is_some(),
            self.image.is_some(),
            self.buttons.is_some(),
        ];
        Self::MEMBERS
            .iter()
            .zip(flags)
            .filter_map(|(name, set)| set.then_some(*name))
            .collect()
    }
}

/// A paragraph of (optionally formatted) text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextParagraph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// An image, optionally clickable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click: Option<OnClick>,
}

/// A labelled value with an optional icon and button.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KeyValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_multiline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click: Option<OnClick>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<BuiltInIcon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<Button>,
}

/// A button. Exactly one field must be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Button {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_button: Option<TextButton>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_button: Option<ImageButton>,
}

impl Button {
    pub const MEMBERS: &'static [&'static str] = &["textButton", "imageButton"];

    /// A text button opening `url` when clicked.
    pub fn text(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text_button: Some(TextButton {
                text: Some(text.into()),
                on_click: Some(OnClick::open_link(url)),
            }),
            image_button: None,
        }
    }

    /// A built-in icon button opening `url` when clicked.
    pub fn image_icon(icon: BuiltInIcon, url: impl Into<String>) -> Self {
        Self {
            text_button: None,
            image_button: Some(ImageButton {
                icon: Some(icon),
                icon_url: None,
                on_click: Some(OnClick::open_link(url)),
            }),
        }
    }

    /// A custom-image button opening `url` when clicked.
    pub fn image_url(icon_url: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text_button: None,
            image_button: Some(ImageButton {
                icon: None,
                icon_url: Some(icon_url.into()),
                on_click: Some(OnClick::open_link(url)),
            }),
        }
    }

    pub fn present_members(&self) -> Vec<&'static str> {
        let flags = [self.text_button.is_some(), self.image_button.is_some()];
        Self::MEMBERS
            .iter()
            .zip(flags)
            .filter_map(|(name, set)| set.then_some(*name))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextButton {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click: Option<OnClick>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ImageButton {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<BuiltInIcon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click: Option<OnClick>,
}

/// Click action. Only opening a link is supported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OnClick {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_link: Option<OpenLink>,
}

impl OnClick {
    pub fn open_link(url: impl Into<String>) -> Self {
        Self {
            open_link: Some(OpenLink {
                url: Some(url.into()),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OpenLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Icons built into Google Chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuiltInIcon {
    Airplane,
    Bookmark,
    Bus,
    Car,
    Clock,
    ConfirmationNumberIcon,
    Description,
    Dollar,
    Email,
    EventSeat,
    FlightArrival,
    FlightDeparture,
    Hotel,
    HotelRoomType,
    Invite,
    MapPin,
    Membership,
    MultiplePeople,
    Person,
    Phone,
    RestaurantIcon,
    ShoppingCart,
    Star,
    Store,
    Ticket,
    Train,
    VideoCamera,
    VideoPlay,
}

impl BuiltInIcon {
    pub const ALL: [BuiltInIcon; 28] = [
        Self::Airplane,
        Self::Bookmark,
        Self::Bus,
        Self::Car,
        Self::Clock,
        Self::ConfirmationNumberIcon,
        Self::Description,
        Self::Dollar,
        Self::Email,
        Self::EventSeat,
        Self::FlightArrival,
        Self::FlightDeparture,
        Self::Hotel,
        Self::HotelRoomType,
        Self::Invite,
        Self::MapPin,
        Self::Membership,
        Self::MultiplePeople,
        Self::Person,
        Self::Phone,
        Self::RestaurantIcon,
        Self::ShoppingCart,
        Self::Star,
        Self::Store,
        Self::Ticket,
        Self::Train,
        Self::VideoCamera,
        Self::VideoPlay,
    ];

    /// Wire spelling, e.g. `"MAP_PIN"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Airplane => "AIRPLANE",
            Self::Bookmark => "BOOKMARK",
            Self::Bus => "BUS",
            Self::Car => "CAR",
            Self::Clock => "CLOCK",
            Self::ConfirmationNumberIcon => "CONFIRMATION_NUMBER_ICON",
            Self::Description => "DESCRIPTION",
            Self::Dollar => "DOLLAR",
            Self::Email => "EMAIL",
            Self::EventSeat => "EVENT_SEAT",
            Self::FlightArrival => "FLIGHT_ARRIVAL",
            Self::FlightDeparture => "FLIGHT_DEPARTURE",
            Self::Hotel => "HOTEL",
            Self::HotelRoomType => "HOTEL_ROOM_TYPE",
            Self::Invite => "INVITE",
            Self::MapPin => "MAP_PIN",
            Self::Membership => "MEMBERSHIP",
            Self::MultiplePeople => "MULTIPLE_PEOPLE",
            Self::Person => "PERSON",
            Self::Phone => "PHONE",
            Self::RestaurantIcon => "RESTAURANT_ICON",
            Self::ShoppingCart => "SHOPPING_CART",
            Self::Star => "STAR",
            Self::Store => "STORE",
            Self::Ticket => "TICKET",
            Self::Train => "TRAIN",
            Self::VideoCamera => "VIDEO_CAMERA",
            Self::VideoPlay => "VIDEO_PLAY",
        }
    }
}

impl fmt::Display for BuiltInIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuiltInIcon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| format!("unknown built-in icon '{s}'"))
    }
}
