//! Client-side message validation.
//!
//! Mirrors the rules the webhook applies to incoming messages so that a bad
//! message is rejected locally, with the exact location of every problem,
//! instead of coming back as an opaque HTTP 400.
//!
//! All checks are read-only. The card walk never stops at the first
//! problem: every [`Violation`] is collected and returned together in one
//! [`ValidationError`].

use serde_json::Value;
use tracing::warn;

use gchat_types::MAX_TEXT_MESSAGE_LENGTH;
use gchat_types::card::{
    Button, Card, CardMessage, Header, Image, ImageButton, KeyValue, OnClick, Section,
    TextButton, TextParagraph, Widget,
};
use gchat_types::{ValidationError, Violation, ViolationKind};

const ICON_FIELDS: &[&str] = &["icon", "iconUrl"];

// ── Text messages ───────────────────────────────────────────────────────

/// Check a text message: 1 to 4096 UTF-16 code units.
pub fn validate_text(text: &str) -> Result<(), ValidationError> {
    let len = text.encode_utf16().count();
    if len < 1 {
        return Err(ValidationError::single(
            "",
            ViolationKind::MinLength { min: 1, actual: len },
        ));
    }
    if len > MAX_TEXT_MESSAGE_LENGTH {
        return Err(ValidationError::single(
            "",
            ViolationKind::MaxLength {
                max: MAX_TEXT_MESSAGE_LENGTH,
                actual: len,
            },
        ));
    }
    Ok(())
}

/// Check an untyped value as a text message. Anything but a JSON string fails.
pub fn validate_text_value(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::String(text) => validate_text(text),
        other => Err(ValidationError::single(
            "",
            ViolationKind::InvalidType {
                expected: "string",
                found: json_type_name(other),
            },
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ── URIs ────────────────────────────────────────────────────────────────

/// Check that `value` is an absolute URI.
///
/// The WHATWG parser trims surrounding whitespace and drops embedded tabs
/// and newlines, so those are rejected up front: the value is sent as
/// written, not as the parser normalized it.
pub(crate) fn check_uri(value: &str) -> Result<(), ViolationKind> {
    if let Some(c) = value
        .chars()
        .find(|c| c.is_whitespace() || c.is_control())
    {
        return Err(ViolationKind::InvalidUri {
            value: value.to_owned(),
            reason: format!("contains disallowed character {c:?}"),
        });
    }
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| ViolationKind::InvalidUri {
            value: value.to_owned(),
            reason: e.to_string(),
        })
}

// ── Card messages ───────────────────────────────────────────────────────

/// Check a card message with the default [`CardValidator`].
pub fn validate_card(card: &CardMessage) -> Result<(), ValidationError> {
    CardValidator::default().validate(card)
}

/// Decode an untyped JSON document into a [`CardMessage`] and validate it.
///
/// Unknown fields and values outside the closed enumerations (`icon`,
/// `imageStyle`) are reported as a single `Malformed` violation.
pub fn parse_card(value: Value) -> Result<CardMessage, ValidationError> {
    CardValidator::default().parse(value)
}

/// Structural validator for card messages.
///
/// The one tunable is how image buttons treat their icon. `icon` and
/// `iconUrl` are alternatives, and by default exactly one of them is
/// required. Turning
/// [`strict_image_button_icons`](Self::strict_image_button_icons) off makes
/// both optional; a button setting both is then logged and accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardValidator {
    strict_image_button_icons: bool,
}

impl Default for CardValidator {
    fn default() -> Self {
        Self {
            strict_image_button_icons: true,
        }
    }
}

impl CardValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every image button needs exactly one of `icon`/`iconUrl`.
    /// On by default.
    pub fn strict_image_button_icons(mut self, strict: bool) -> Self {
        self.strict_image_button_icons = strict;
        self
    }

    /// Validate `card`, returning every violation found.
    pub fn validate(&self, card: &CardMessage) -> Result<(), ValidationError> {
        ValidationError::check(self.violations(card))
    }

    /// Collect violations without wrapping them in an error.
    pub fn violations(&self, card: &CardMessage) -> Vec<Violation> {
        let mut walk = Walk {
            strict_image_button_icons: self.strict_image_button_icons,
            violations: Vec::new(),
        };
        walk.card_message(card);
        walk.violations
    }

    /// Decode and validate an untyped card document.
    pub fn parse(&self, value: Value) -> Result<CardMessage, ValidationError> {
        let card: CardMessage = serde_json::from_value(value).map_err(|e| {
            ValidationError::single(
                "",
                ViolationKind::Malformed {
                    reason: e.to_string(),
                },
            )
        })?;
        self.validate(&card)?;
        Ok(card)
    }
}

fn join(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_owned()
    } else {
        format!("{path}.{field}")
    }
}

fn index(path: &str, i: usize) -> String {
    format!("{path}[{i}]")
}

/// One pass over a card document.
struct Walk {
    strict_image_button_icons: bool,
    violations: Vec<Violation>,
}

impl Walk {
    fn push(&mut self, path: String, kind: ViolationKind) {
        self.violations.push(Violation::new(path, kind));
    }

    // ── Field rules ─────────────────────────────────────────────────

    /// A list that may be absent but, when present, must not be empty.
    fn non_empty_list<'a, T>(&mut self, path: &str, list: Option<&'a Vec<T>>) -> &'a [T] {
        match list {
            Some(items) if items.is_empty() => {
                self.push(path.to_owned(), ViolationKind::MinItems { min: 1 });
                &[]
            }
            Some(items) => items,
            None => &[],
        }
    }

    fn optional_str(&mut self, path: String, value: Option<&String>) {
        if value.is_some_and(|v| v.is_empty()) {
            self.push(path, ViolationKind::EmptyString);
        }
    }

    fn required_str(&mut self, path: String, value: Option<&String>) {
        match value {
            None => self.push(path, ViolationKind::Required),
            Some(v) if v.is_empty() => self.push(path, ViolationKind::EmptyString),
            Some(_) => {}
        }
    }

    fn optional_uri(&mut self, path: String, value: Option<&String>) {
        match value {
            None => {}
            Some(v) if v.is_empty() => self.push(path, ViolationKind::EmptyString),
            Some(v) => {
                if let Err(kind) = check_uri(v) {
                    self.push(path, kind);
                }
            }
        }
    }

    fn required_uri(&mut self, path: String, value: Option<&String>) {
        if value.is_none() {
            self.push(path, ViolationKind::Required);
        } else {
            self.optional_uri(path, value);
        }
    }

    fn exactly_one(&mut self, path: &str, fields: &'static [&'static str], present: Vec<&'static str>) {
        if present.len() != 1 {
            self.push(path.to_owned(), ViolationKind::ExactlyOneOf { fields, present });
        }
    }

    // ── Document structure ──────────────────────────────────────────

    fn card_message(&mut self, message: &CardMessage) {
        for (i, card) in self
            .non_empty_list("cards", message.cards.as_ref())
            .iter()
            .enumerate()
        {
            self.card(&index("cards", i), card);
        }
    }

    fn card(&mut self, path: &str, card: &Card) {
        if let Some(header) = &card.header {
            self.header(&join(path, "header"), header);
        }
        let sections_path = join(path, "sections");
        for (i, section) in self
            .non_empty_list(&sections_path, card.sections.as_ref())
            .iter()
            .enumerate()
        {
            self.section(&index(&sections_path, i), section);
        }
    }

    fn header(&mut self, path: &str, header: &Header) {
        self.optional_str(join(path, "title"), header.title.as_ref());
        self.optional_str(join(path, "subtitle"), header.subtitle.as_ref());
        self.optional_uri(join(path, "imageUrl"), header.image_url.as_ref());
    }

    fn section(&mut self, path: &str, section: &Section) {
        let widgets_path = join(path, "widgets");
        for (i, widget) in self
            .non_empty_list(&widgets_path, section.widgets.as_ref())
            .iter()
            .enumerate()
        {
            self.widget(&index(&widgets_path, i), widget);
        }
    }

    fn widget(&mut self, path: &str, widget: &Widget) {
        self.exactly_one(path, Widget::MEMBERS, widget.present_members());

        // Members are checked even when several are set so nested problems
        // are reported in the same pass.
        if let Some(paragraph) = &widget.text_paragraph {
            self.text_paragraph(&join(path, "textParagraph"), paragraph);
        }
        if let Some(key_value) = &widget.key_value {
            self.key_value(&join(path, "keyValue"), key_value);
        }
        if let Some(image) = &widget.image {
            self.image(&join(path, "image"), image);
        }
        let buttons_path = join(path, "buttons");
        for (i, button) in self
            .non_empty_list(&buttons_path, widget.buttons.as_ref())
            .iter()
            .enumerate()
        {
            self.button(&index(&buttons_path, i), button);
        }
    }

    fn text_paragraph(&mut self, path: &str, paragraph: &TextParagraph) {
        self.required_str(join(path, "text"), paragraph.text.as_ref());
    }

    fn key_value(&mut self, path: &str, kv: &KeyValue) {
        self.optional_str(join(path, "topLabel"), kv.top_label.as_ref());
        self.optional_str(join(path, "content"), kv.content.as_ref());
        self.optional_str(join(path, "bottomLabel"), kv.bottom_label.as_ref());
        if let Some(on_click) = &kv.on_click {
            self.on_click(&join(path, "onClick"), on_click);
        }
        if kv.icon.is_some() && kv.icon_url.is_some() {
            self.push(
                path.to_owned(),
                ViolationKind::MutuallyExclusive {
                    fields: ICON_FIELDS,
                },
            );
        }
        self.optional_uri(join(path, "iconUrl"), kv.icon_url.as_ref());
        if let Some(button) = &kv.button {
            self.button(&join(path, "button"), button);
        }
    }

    fn image(&mut self, path: &str, image: &Image) {
        self.required_uri(join(path, "imageUrl"), image.image_url.as_ref());
        if let Some(on_click) = &image.on_click {
            self.on_click(&join(path, "onClick"), on_click);
        }
    }

    fn button(&mut self, path: &str, button: &Button) {
        self.exactly_one(path, Button::MEMBERS, button.present_members());
        if let Some(text_button) = &button.text_button {
            self.text_button(&join(path, "textButton"), text_button);
        }
        if let Some(image_button) = &button.image_button {
            self.image_button(&join(path, "imageButton"), image_button);
        }
    }

    fn text_button(&mut self, path: &str, button: &TextButton) {
        self.required_str(join(path, "text"), button.text.as_ref());
        self.required_on_click(&join(path, "onClick"), button.on_click.as_ref());
    }

    fn image_button(&mut self, path: &str, button: &ImageButton) {
        let has_icon = button.icon.is_some();
        let has_icon_url = button.icon_url.is_some();
        if self.strict_image_button_icons {
            let present = ICON_FIELDS
                .iter()
                .zip([has_icon, has_icon_url])
                .filter_map(|(name, set)| set.then_some(*name))
                .collect();
            self.exactly_one(path, ICON_FIELDS, present);
        } else if has_icon && has_icon_url {
            warn!(path = %path, "image button sets both icon and iconUrl");
        }
        self.optional_uri(join(path, "iconUrl"), button.icon_url.as_ref());
        self.required_on_click(&join(path, "onClick"), button.on_click.as_ref());
    }

    fn required_on_click(&mut self, path: &str, on_click: Option<&OnClick>) {
        match on_click {
            Some(on_click) => self.on_click(path, on_click),
            None => self.push(path.to_owned(), ViolationKind::Required),
        }
    }

    fn on_click(&mut self, path: &str, on_click: &OnClick) {
        let link_path = join(path, "openLink");
        match &on_click.open_link {
            Some(link) => self.required_uri(join(&link_path, "url"), link.url.as_ref()),
            None => self.push(link_path, ViolationKind::Required),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gchat_types::card::{BuiltInIcon, CardImageStyle, OpenLink};
    use serde_json::json;

    fn kinds_at(err: &ValidationError, path: &str) -> Vec<ViolationKind> {
        err.violations()
            .iter()
            .filter(|v| v.path == path)
            .map(|v| v.kind.clone())
            .collect()
    }

    fn single_widget(widget: Widget) -> CardMessage {
        CardMessage::new(vec![Card::new(vec![Section::new(vec![widget])])])
    }

    // ── text ────────────────────────────────────────────────────────

    #[test]
    fn text_within_bounds_is_valid() {
        assert!(validate_text("test message").is_ok());
        assert!(validate_text("a").is_ok());
        assert!(validate_text(&"a".repeat(MAX_TEXT_MESSAGE_LENGTH)).is_ok());
    }

    #[test]
    fn empty_text_fails() {
        let err = validate_text("").unwrap_err();
        assert_eq!(
            err.first().unwrap().kind,
            ViolationKind::MinLength { min: 1, actual: 0 }
        );
    }

    #[test]
    fn too_long_text_fails() {
        let err = validate_text(&"a".repeat(MAX_TEXT_MESSAGE_LENGTH + 1)).unwrap_err();
        assert_eq!(
            err.first().unwrap().kind,
            ViolationKind::MaxLength {
                max: MAX_TEXT_MESSAGE_LENGTH,
                actual: MAX_TEXT_MESSAGE_LENGTH + 1
            }
        );
    }

    #[test]
    fn text_length_counts_utf16_units() {
        // Each of these is two UTF-16 code units.
        let emoji = "\u{1F600}".repeat(MAX_TEXT_MESSAGE_LENGTH / 2);
        assert!(validate_text(&emoji).is_ok());
        let over = format!("{emoji}a");
        assert!(validate_text(&over).is_err());
    }

    #[test]
    fn non_string_text_values_fail() {
        for value in [json!(1234), json!(null), json!(["a"]), json!({"text": "a"})] {
            let err = validate_text_value(&value).unwrap_err();
            assert!(matches!(
                err.first().unwrap().kind,
                ViolationKind::InvalidType { expected: "string", .. }
            ));
        }
        assert!(validate_text_value(&json!("ok")).is_ok());
        assert!(validate_text_value(&json!("")).is_err());
    }

    // ── cards: valid shapes ─────────────────────────────────────────

    #[test]
    fn text_paragraph_card_is_valid() {
        let card = CardMessage::new(vec![
            Card::new(vec![Section::new(vec![Widget::text_paragraph("Test paragraph")])])
                .with_header(
                    Header::new("Test title")
                        .subtitle("Test subtitle")
                        .image("https://google.com/", CardImageStyle::Avatar),
                ),
        ]);
        assert!(validate_card(&card).is_ok());
    }

    #[test]
    fn mixed_widgets_card_is_valid() {
        let key_value = KeyValue {
            top_label: Some("Some top label".into()),
            content: Some("This is some multiline content\nNext line begins here".into()),
            content_multiline: Some(true),
            bottom_label: Some("Some bottom label".into()),
            on_click: Some(OnClick::open_link("https://google.com/")),
            icon: Some(BuiltInIcon::Airplane),
            ..Default::default()
        };
        let card = CardMessage::new(vec![Card::new(vec![Section::new(vec![
            Widget::text_paragraph("Test paragraph"),
            Widget::image("https://image.com/"),
            Widget::key_value(key_value),
            Widget::buttons(vec![
                Button::text("Click me", "https://some.de/"),
                Button::image_icon(BuiltInIcon::Airplane, "https://some.other.de/"),
            ]),
        ])])]);
        assert!(validate_card(&card).is_ok());
    }

    #[test]
    fn absent_lists_are_allowed() {
        assert!(validate_card(&CardMessage::default()).is_ok());
        assert!(validate_card(&CardMessage::new(vec![Card::default()])).is_ok());
        assert!(validate_card(&CardMessage::new(vec![Card::new(vec![Section::default()])])).is_ok());
    }

    // ── cards: cardinality ──────────────────────────────────────────

    #[test]
    fn no_cards_fails() {
        let err = validate_card(&CardMessage::new(vec![])).unwrap_err();
        assert_eq!(kinds_at(&err, "cards"), vec![ViolationKind::MinItems { min: 1 }]);
    }

    #[test]
    fn empty_sections_fails() {
        let err = validate_card(&CardMessage::new(vec![Card::new(vec![])])).unwrap_err();
        assert_eq!(
            kinds_at(&err, "cards[0].sections"),
            vec![ViolationKind::MinItems { min: 1 }]
        );
    }

    #[test]
    fn empty_widgets_and_buttons_fail() {
        let card = CardMessage::new(vec![
            Card::new(vec![Section::new(vec![])]),
            Card::new(vec![Section::new(vec![Widget::buttons(vec![])])]),
        ]);
        let err = validate_card(&card).unwrap_err();
        assert!(err.has_path("cards[0].sections[0].widgets"));
        assert!(err.has_path("cards[1].sections[0].widgets[0].buttons"));
    }

    // ── cards: unions ───────────────────────────────────────────────

    #[test]
    fn widget_with_two_members_fails() {
        let mut widget = Widget::text_paragraph("text");
        widget.image = Some(Image {
            image_url: Some("https://image.com/".into()),
            on_click: None,
        });
        let err = validate_card(&single_widget(widget)).unwrap_err();
        assert_eq!(
            kinds_at(&err, "cards[0].sections[0].widgets[0]"),
            vec![ViolationKind::ExactlyOneOf {
                fields: Widget::MEMBERS,
                present: vec!["textParagraph", "image"],
            }]
        );
    }

    #[test]
    fn empty_widget_fails() {
        let err = validate_card(&single_widget(Widget::default())).unwrap_err();
        assert_eq!(
            kinds_at(&err, "cards[0].sections[0].widgets[0]"),
            vec![ViolationKind::ExactlyOneOf {
                fields: Widget::MEMBERS,
                present: vec![],
            }]
        );
    }

    #[test]
    fn button_with_both_kinds_fails() {
        let mut button = Button::image_icon(BuiltInIcon::Airplane, "https://test.de/");
        button.text_button = Some(TextButton {
            text: Some("Testing".into()),
            on_click: Some(OnClick::open_link("https://hallo.de")),
        });
        let err = validate_card(&single_widget(Widget::buttons(vec![button]))).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(
            err.first().unwrap().path,
            "cards[0].sections[0].widgets[0].buttons[0]"
        );
    }

    #[test]
    fn key_value_with_icon_and_icon_url_fails() {
        let kv = KeyValue {
            icon: Some(BuiltInIcon::Airplane),
            icon_url: Some("https://image.com/url.png".into()),
            ..Default::default()
        };
        let err = validate_card(&single_widget(Widget::key_value(kv))).unwrap_err();
        assert_eq!(
            kinds_at(&err, "cards[0].sections[0].widgets[0].keyValue"),
            vec![ViolationKind::MutuallyExclusive {
                fields: &["icon", "iconUrl"]
            }]
        );
    }

    #[test]
    fn key_value_without_icon_is_valid() {
        let kv = KeyValue {
            content: Some("content".into()),
            ..Default::default()
        };
        assert!(validate_card(&single_widget(Widget::key_value(kv))).is_ok());
    }

    #[test]
    fn key_value_button_is_validated() {
        let kv = KeyValue {
            content: Some("content".into()),
            button: Some(Button::default()),
            ..Default::default()
        };
        let err = validate_card(&single_widget(Widget::key_value(kv))).unwrap_err();
        assert!(err.has_path("cards[0].sections[0].widgets[0].keyValue.button"));
    }

    // ── cards: required, URI and string rules ───────────────────────

    #[test]
    fn missing_required_fields_are_reported_with_paths() {
        let widget = Widget::buttons(vec![
            Button {
                text_button: Some(TextButton::default()),
                image_button: None,
            },
            Button {
                text_button: None,
                image_button: Some(ImageButton {
                    icon: Some(BuiltInIcon::Star),
                    ..Default::default()
                }),
            },
        ]);
        let err = validate_card(&single_widget(widget)).unwrap_err();
        let base = "cards[0].sections[0].widgets[0].buttons";
        assert!(err.has_path(&format!("{base}[0].textButton.text")));
        assert!(err.has_path(&format!("{base}[0].textButton.onClick")));
        assert!(err.has_path(&format!("{base}[1].imageButton.onClick")));
        assert_eq!(err.violations().len(), 3);
    }

    #[test]
    fn on_click_requires_open_link_url() {
        let mut image = Image {
            image_url: Some("https://image.com/".into()),
            on_click: Some(OnClick { open_link: None }),
        };
        let err = validate_card(&single_widget(Widget {
            image: Some(image.clone()),
            ..Default::default()
        }))
        .unwrap_err();
        assert!(err.has_path("cards[0].sections[0].widgets[0].image.onClick.openLink"));

        image.on_click = Some(OnClick {
            open_link: Some(OpenLink { url: None }),
        });
        let err = validate_card(&single_widget(Widget {
            image: Some(image),
            ..Default::default()
        }))
        .unwrap_err();
        assert!(err.has_path("cards[0].sections[0].widgets[0].image.onClick.openLink.url"));
    }

    #[test]
    fn icon_urls_must_be_uris() {
        let kv = KeyValue {
            content: Some("content".into()),
            icon_url: Some("icon.png".into()),
            ..Default::default()
        };
        let button = Button::image_url("not a uri", "https://some.de/");
        let card = CardMessage::new(vec![Card::new(vec![Section::new(vec![
            Widget::key_value(kv),
            Widget::buttons(vec![button]),
        ])])]);
        let err = validate_card(&card).unwrap_err();
        for path in [
            "cards[0].sections[0].widgets[0].keyValue.iconUrl",
            "cards[0].sections[0].widgets[1].buttons[0].imageButton.iconUrl",
        ] {
            let kinds = kinds_at(&err, path);
            assert!(
                matches!(kinds.as_slice(), [ViolationKind::InvalidUri { .. }]),
                "expected InvalidUri at {path}, got {kinds:?}"
            );
        }
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn uris_with_whitespace_or_control_chars_fail() {
        for url in [
            " https://image.com/x.png",
            "https://image.com/x.png\n",
            "https://ima\tge.com/x.png",
            "https://image.com/a b.png",
            "https://image.com/\u{7f}",
        ] {
            let err = validate_card(&single_widget(Widget::image(url))).unwrap_err();
            let kinds = kinds_at(&err, "cards[0].sections[0].widgets[0].image.imageUrl");
            assert!(
                matches!(kinds.as_slice(), [ViolationKind::InvalidUri { .. }]),
                "{url:?} should be rejected, got {kinds:?}"
            );
        }
    }

    #[test]
    fn invalid_uris_fail() {
        let card = CardMessage::new(vec![
            Card::new(vec![Section::new(vec![
                Widget::image("not a uri"),
                Widget::buttons(vec![Button::text("Go", "no-uri")]),
            ])])
            .with_header(Header::new("t").image("relative/path.png", CardImageStyle::Image)),
        ]);
        let err = validate_card(&card).unwrap_err();
        for path in [
            "cards[0].header.imageUrl",
            "cards[0].sections[0].widgets[0].image.imageUrl",
            "cards[0].sections[0].widgets[1].buttons[0].textButton.onClick.openLink.url",
        ] {
            let kinds = kinds_at(&err, path);
            assert!(
                matches!(kinds.as_slice(), [ViolationKind::InvalidUri { .. }]),
                "expected InvalidUri at {path}, got {kinds:?}"
            );
        }
    }

    #[test]
    fn image_requires_url() {
        let err = validate_card(&single_widget(Widget {
            image: Some(Image::default()),
            ..Default::default()
        }))
        .unwrap_err();
        assert_eq!(
            kinds_at(&err, "cards[0].sections[0].widgets[0].image.imageUrl"),
            vec![ViolationKind::Required]
        );
    }

    #[test]
    fn empty_strings_fail() {
        let card = CardMessage::new(vec![
            Card::new(vec![Section::new(vec![Widget::text_paragraph("")])])
                .with_header(Header::new("")),
        ]);
        let err = validate_card(&card).unwrap_err();
        assert_eq!(kinds_at(&err, "cards[0].header.title"), vec![ViolationKind::EmptyString]);
        assert_eq!(
            kinds_at(&err, "cards[0].sections[0].widgets[0].textParagraph.text"),
            vec![ViolationKind::EmptyString]
        );
    }

    #[test]
    fn all_violations_are_collected() {
        let card = CardMessage::new(vec![
            Card::new(vec![]),
            Card::new(vec![Section::new(vec![Widget::default()])]),
        ]);
        let err = validate_card(&card).unwrap_err();
        assert_eq!(err.violations().len(), 2);
        assert_eq!(err.violations()[0].path, "cards[0].sections");
        assert_eq!(err.violations()[1].path, "cards[1].sections[0].widgets[0]");
    }

    // ── image button icon strictness ────────────────────────────────

    fn image_button(icon: Option<BuiltInIcon>, icon_url: Option<&str>) -> CardMessage {
        single_widget(Widget::buttons(vec![Button {
            text_button: None,
            image_button: Some(ImageButton {
                icon,
                icon_url: icon_url.map(str::to_owned),
                on_click: Some(OnClick::open_link("https://some.de/")),
            }),
        }]))
    }

    #[test]
    fn image_button_icons_are_strict_by_default() {
        let path = "cards[0].sections[0].widgets[0].buttons[0].imageButton";
        assert!(validate_card(&image_button(Some(BuiltInIcon::Star), None)).is_ok());
        assert!(validate_card(&image_button(None, Some("https://i.com/a.png"))).is_ok());

        let none = validate_card(&image_button(None, None)).unwrap_err();
        assert_eq!(
            kinds_at(&none, path),
            vec![ViolationKind::ExactlyOneOf {
                fields: &["icon", "iconUrl"],
                present: vec![],
            }]
        );
        let both = validate_card(&image_button(
            Some(BuiltInIcon::Star),
            Some("https://i.com/a.png"),
        ))
        .unwrap_err();
        assert_eq!(
            kinds_at(&both, path),
            vec![ViolationKind::ExactlyOneOf {
                fields: &["icon", "iconUrl"],
                present: vec!["icon", "iconUrl"],
            }]
        );
    }

    #[test]
    fn lenient_image_button_icons() {
        let lenient = CardValidator::new().strict_image_button_icons(false);
        assert!(lenient.validate(&image_button(None, None)).is_ok());
        assert!(
            lenient
                .validate(&image_button(Some(BuiltInIcon::Star), Some("https://i.com/a.png")))
                .is_ok()
        );
    }

    // ── parse_card ──────────────────────────────────────────────────

    #[test]
    fn parse_card_accepts_valid_json() {
        let card = parse_card(json!({
            "cards": [{
                "header": { "title": "Some card", "imageStyle": "AVATAR" },
                "sections": [{ "widgets": [{ "textParagraph": { "text": "Hello" } }] }]
            }]
        }))
        .unwrap();
        let header = card.cards.unwrap()[0].header.clone().unwrap();
        assert_eq!(header.image_style, Some(CardImageStyle::Avatar));
    }

    #[test]
    fn parse_card_rejects_unknown_enum_values() {
        let err = parse_card(json!({
            "cards": [{ "header": { "imageStyle": "SQUARE" } }]
        }))
        .unwrap_err();
        assert!(matches!(
            err.first().unwrap().kind,
            ViolationKind::Malformed { .. }
        ));

        let err = parse_card(json!({
            "cards": [{ "sections": [{ "widgets": [{
                "keyValue": { "icon": "UNICORN" }
            }] }] }]
        }))
        .unwrap_err();
        assert!(matches!(
            err.first().unwrap().kind,
            ViolationKind::Malformed { .. }
        ));
    }

    #[test]
    fn parse_card_rejects_unknown_fields_and_wrong_types() {
        assert!(parse_card(json!({ "cards": [{ "footer": "x" }] })).is_err());
        assert!(parse_card(json!({ "cards": "nope" })).is_err());
        assert!(parse_card(json!("text")).is_err());
    }

    #[test]
    fn parse_card_runs_structural_checks() {
        let err = parse_card(json!({ "cards": [] })).unwrap_err();
        assert_eq!(kinds_at(&err, "cards"), vec![ViolationKind::MinItems { min: 1 }]);
    }
}
