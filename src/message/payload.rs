//! Root message posted to a webhook.

use serde::{Deserialize, Serialize};

use super::is_false;
use super::Embed;

/// A webhook message: optional text, sender overrides and embeds.
///
/// Sending borrows the message, so the same value can be sent any number
/// of times.
///
/// # Example
///
/// ```
/// use hookmsg::{Embed, Message};
///
/// let message = Message::new()
///     .with_content("Hello!")
///     .with_username("Release Bot")
///     .add_embed(Embed::new().with_title("v1.2.0"));
///
/// let json = String::from_utf8(message.to_json().unwrap()).unwrap();
/// assert_eq!(
///     json,
///     r#"{"content":"Hello!","username":"Release Bot","embeds":[{"title":"v1.2.0"}]}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    #[serde(skip_serializing_if = "String::is_empty")]
    content: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    avatar_url: String,
    #[serde(skip_serializing_if = "is_false")]
    tts: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    embeds: Vec<Embed>,
}

impl Message {
    /// Creates an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a text-only message.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::new().with_content(content)
    }

    /// Sets the text body.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Overrides the display name of the sender.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Overrides the avatar of the sender.
    #[must_use]
    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = url.into();
        self
    }

    /// Sets whether the message is read aloud.
    #[must_use]
    pub const fn with_tts(mut self, tts: bool) -> Self {
        self.tts = tts;
        self
    }

    /// Appends an embed.
    ///
    /// The message takes its own copy; pass a clone to keep building on the
    /// original.
    #[must_use]
    pub fn add_embed(mut self, embed: Embed) -> Self {
        self.embeds.push(embed);
        self
    }

    /// Returns the text body.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the username override.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the avatar override.
    #[must_use]
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    /// Returns the text-to-speech flag.
    #[must_use]
    pub const fn tts(&self) -> bool {
        self.tts
    }

    /// Returns the embeds in insertion order.
    #[must_use]
    pub fn embeds(&self) -> &[Embed] {
        &self.embeds
    }

    /// Serializes the message into the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the message cannot be encoded.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

impl From<Embed> for Message {
    fn from(embed: Embed) -> Self {
        Self::new().add_embed(embed)
    }
}
