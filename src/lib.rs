//! Hookmsg: chat webhook messages with rich embeds.
//!
//! A library for composing messages (text, sender overrides and embed
//! cards) and posting them to a chat-service webhook as JSON, with
//! structured errors that separate network faults from service rejections
//! and surface rate-limit hints.
//!
//! ```no_run
//! use hookmsg::{Embed, Field, Message, blocking};
//!
//! let message = Message::new()
//!     .with_content("Nightly build")
//!     .add_embed(
//!         Embed::new()
//!             .with_title("Tests")
//!             .with_color_rgb((46, 204, 113))
//!             .with_timestamp_now()
//!             .add_field(Field::new("Passed", "1204", true))
//!             .add_field(Field::new("Failed", "0", true)),
//!     );
//!
//! blocking::send("https://chat.example.com/hooks/123/abc", &message)?;
//! # Ok::<(), hookmsg::webhook::SendError>(())
//! ```

pub mod blocking;
pub mod color;
pub mod message;
pub mod time;
pub mod webhook;

pub use color::{ColorError, Rgb};
pub use message::{Author, Embed, Field, Footer, Image, Message, Thumbnail};
pub use webhook::{SendError, ServiceError, WebhookClient};
