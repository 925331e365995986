//! Embed card and its nested records.

use chrono::{DateTime, TimeZone};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::{is_false, is_zero};
use crate::color::{self, ColorError, Rgb};
use crate::time::{self, Clock, SystemClock};

/// Footer section of an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    /// Footer text
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Small icon shown next to the text
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon_url: String,
}

impl Footer {
    /// Returns true if no footer attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.icon_url.is_empty()
    }
}

/// Main image of an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    /// Image source
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl Image {
    /// Returns true if no image is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }
}

/// Thumbnail image of an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thumbnail {
    /// Thumbnail source
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl Thumbnail {
    /// Returns true if no thumbnail is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }
}

/// Author section of an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    /// Author display name
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Link applied to the author name
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Small icon shown next to the author name
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon_url: String,
}

impl Author {
    /// Returns true if no author attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.url.is_empty() && self.icon_url.is_empty()
    }
}

/// A titled key-value pair displayed in the embed body.
///
/// `name` and `value` are always serialized, even when empty; `inline` is
/// omitted when false.
///
/// # Example
///
/// ```
/// use hookmsg::Field;
///
/// let status = Field::new("Status", "Success", true);
/// let duration = Field::default()
///     .with_name("Duration")
///     .with_value("3m45s")
///     .with_inline(true);
/// assert_eq!(status.inline, duration.inline);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field title
    pub name: String,
    /// Field body
    pub value: String,
    /// Whether the field is rendered next to its siblings
    #[serde(default, skip_serializing_if = "is_false")]
    pub inline: bool,
}

impl Field {
    /// Creates a field with all three values.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }

    /// Sets the field name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the field value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets whether the field is displayed inline.
    #[must_use]
    pub const fn with_inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }
}

/// A rich embed card.
///
/// Built with chained `with_*` calls; none of them fail. Color setters
/// always leave [`color`](Self::color) within `0..=0xFFFFFF`. A malformed hex
/// color stores `0` and records the parse failure, retrievable with
/// [`error`](Self::error).
///
/// # Example
///
/// ```
/// use hookmsg::{Embed, Field};
///
/// let embed = Embed::new()
///     .with_title("Server Alert")
///     .with_description("The server has restarted successfully")
///     .with_color_hex("#FF5733")
///     .with_timestamp_now()
///     .add_field(Field::new("Status", "Success", true));
///
/// assert!(embed.error().is_none());
/// assert_eq!(embed.color(), 16_734_003);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Embed {
    #[serde(skip_serializing_if = "String::is_empty")]
    title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    url: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "utc_timestamp")]
    timestamp: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "clamped_color")]
    color: u32,
    #[serde(skip_serializing_if = "Footer::is_empty")]
    footer: Footer,
    #[serde(skip_serializing_if = "Image::is_empty")]
    image: Image,
    #[serde(skip_serializing_if = "Thumbnail::is_empty")]
    thumbnail: Thumbnail,
    #[serde(skip_serializing_if = "Author::is_empty")]
    author: Author,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<Field>,
    #[serde(skip)]
    error: Option<ColorError>,
}

/// Deserializes a color, saturating it into the valid range.
fn clamped_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    i64::deserialize(deserializer).map(color::clamp_color)
}

/// Deserializes an RFC 3339 timestamp, normalizing it to UTC.
///
/// An empty string stays empty (unset).
fn utc_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() {
        return Ok(raw);
    }
    DateTime::parse_from_rfc3339(&raw)
        .map(|instant| time::format_timestamp(&instant))
        .map_err(|e| D::Error::custom(format!("invalid RFC 3339 timestamp '{raw}': {e}")))
}

impl Embed {
    /// Creates an empty embed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recent configuration error, if any.
    ///
    /// Reading does not clear the slot.
    #[must_use]
    pub const fn error(&self) -> Option<&ColorError> {
        self.error.as_ref()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the URL. When present, the title becomes a link.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the color from an integer, saturating into `0..=0xFFFFFF`.
    #[must_use]
    pub fn with_color_int(mut self, color: i64) -> Self {
        self.color = color::clamp_color(color);
        self
    }

    /// Sets the color from a hex string such as `"#FF5733"`.
    ///
    /// On a malformed string the color becomes `0` and the parse error is
    /// stored in the error slot, replacing any earlier one. A successful
    /// parse leaves the slot untouched.
    #[must_use]
    pub fn with_color_hex(mut self, hex: &str) -> Self {
        match color::hex_to_color(hex) {
            Ok(color) => self.color = color,
            Err(e) => {
                self.color = color::MIN_COLOR;
                self.error = Some(e);
            }
        }
        self
    }

    /// Sets the color from an RGB triple, clamping every channel.
    #[must_use]
    pub fn with_color_rgb(mut self, rgb: impl Into<Rgb>) -> Self {
        self.color = color::rgb_to_color(rgb.into());
        self
    }

    /// Sets the footer text and icon. An empty icon URL shows text only.
    #[must_use]
    pub fn with_footer(mut self, text: impl Into<String>, icon_url: impl Into<String>) -> Self {
        self.footer = Footer {
            text: text.into(),
            icon_url: icon_url.into(),
        };
        self
    }

    /// Sets the timestamp, converted to UTC.
    #[must_use]
    pub fn with_timestamp<Tz: TimeZone>(mut self, instant: &DateTime<Tz>) -> Self {
        self.timestamp = time::format_timestamp(instant);
        self
    }

    /// Sets the timestamp to the current system time.
    #[must_use]
    pub fn with_timestamp_now(self) -> Self {
        self.with_timestamp_from(&SystemClock)
    }

    /// Sets the timestamp to the current time of the given clock.
    #[must_use]
    pub fn with_timestamp_from<C: Clock + ?Sized>(mut self, clock: &C) -> Self {
        self.timestamp = time::format_now(clock);
        self
    }

    /// Sets the author name.
    #[must_use]
    pub fn with_author_name(mut self, name: impl Into<String>) -> Self {
        self.author.name = name.into();
        self
    }

    /// Sets the author URL. The author name becomes a link.
    #[must_use]
    pub fn with_author_url(mut self, url: impl Into<String>) -> Self {
        self.author.url = url.into();
        self
    }

    /// Sets the small icon shown next to the author name.
    #[must_use]
    pub fn with_author_icon(mut self, icon_url: impl Into<String>) -> Self {
        self.author.icon_url = icon_url.into();
        self
    }

    /// Sets the main image URL.
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image.url = url.into();
        self
    }

    /// Sets the thumbnail URL.
    #[must_use]
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail.url = url.into();
        self
    }

    /// Appends a field. Insertion order is kept and duplicates are allowed.
    #[must_use]
    pub fn add_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Removes every field.
    #[must_use]
    pub fn clear_fields(mut self) -> Self {
        self.fields = Vec::new();
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the RFC 3339 timestamp, or an empty string when unset.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the packed color.
    #[must_use]
    pub const fn color(&self) -> u32 {
        self.color
    }

    /// Returns the footer.
    #[must_use]
    pub const fn footer(&self) -> &Footer {
        &self.footer
    }

    /// Returns the main image.
    #[must_use]
    pub const fn image(&self) -> &Image {
        &self.image
    }

    /// Returns the thumbnail.
    #[must_use]
    pub const fn thumbnail(&self) -> &Thumbnail {
        &self.thumbnail
    }

    /// Returns the author.
    #[must_use]
    pub const fn author(&self) -> &Author {
        &self.author
    }

    /// Returns the fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}
