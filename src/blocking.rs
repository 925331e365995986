//! Blocking facade over the async transport.
//!
//! Each call spins up a private current-thread runtime, drives a single
//! send to completion and tears the runtime down again. Nothing is shared
//! between calls.
//!
//! # Panics
//!
//! Every function here panics when called from inside an async runtime;
//! use [`crate::webhook`] there instead.
//!
//! # Example
//!
//! ```no_run
//! use hookmsg::{Embed, Field, blocking};
//!
//! let embed = Embed::new()
//!     .with_title("Server Alert")
//!     .with_color_hex("#FF5733")
//!     .add_field(Field::new("Status", "Success", true));
//!
//! if let Err(e) = blocking::send_embed("https://chat.example.com/hooks/123/abc", &embed) {
//!     eprintln!("{e}");
//! }
//! ```

use std::future::Future;

use crate::message::{Embed, Message};
use crate::webhook::{HttpClient, HttpError, ReqwestClient, SendError, WebhookClient};

/// Blocking counterpart of [`WebhookClient`].
#[derive(Debug, Clone, Default)]
pub struct BlockingClient<H = ReqwestClient> {
    inner: WebhookClient<H>,
}

impl BlockingClient<ReqwestClient> {
    /// Creates a blocking client backed by a default [`ReqwestClient`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: WebhookClient::new(),
        }
    }
}

impl<H> BlockingClient<H> {
    /// Wraps an async webhook client.
    #[must_use]
    pub const fn from_async(inner: WebhookClient<H>) -> Self {
        Self { inner }
    }
}

impl<H: HttpClient> BlockingClient<H> {
    /// Sends a message and waits for the outcome.
    ///
    /// # Errors
    ///
    /// See [`WebhookClient::send`]. Failing to start the runtime is reported
    /// as [`HttpError::Runtime`].
    pub fn send(&self, webhook_url: &str, message: &Message) -> Result<(), SendError> {
        block_on(self.inner.send(webhook_url, message))
    }

    /// Sends a text-only message and waits for the outcome.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    pub fn send_simple(
        &self,
        webhook_url: &str,
        content: impl Into<String>,
    ) -> Result<(), SendError> {
        block_on(self.inner.send_simple(webhook_url, content))
    }

    /// Sends a single-embed message and waits for the outcome.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    pub fn send_embed(&self, webhook_url: &str, embed: &Embed) -> Result<(), SendError> {
        block_on(self.inner.send_embed(webhook_url, embed))
    }
}

fn block_on(future: impl Future<Output = Result<(), SendError>>) -> Result<(), SendError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(HttpError::Runtime)?;
    runtime.block_on(future)
}

/// Sends a message with a fresh default client, blocking until done.
///
/// # Errors
///
/// See [`WebhookClient::send`].
pub fn send(webhook_url: &str, message: &Message) -> Result<(), SendError> {
    BlockingClient::new().send(webhook_url, message)
}

/// Sends a text-only message with a fresh default client, blocking until done.
///
/// # Errors
///
/// See [`WebhookClient::send`].
pub fn send_simple(webhook_url: &str, content: impl Into<String>) -> Result<(), SendError> {
    BlockingClient::new().send_simple(webhook_url, content)
}

/// Sends a single-embed message with a fresh default client, blocking until done.
///
/// # Errors
///
/// See [`WebhookClient::send`].
pub fn send_embed(webhook_url: &str, embed: &Embed) -> Result<(), SendError> {
    BlockingClient::new().send_embed(webhook_url, embed)
}
