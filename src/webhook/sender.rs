//! Webhook client: serialize, post once, classify the response.

use std::time::Duration;

use tracing::{debug, trace};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestClient, SendError, ServiceError};
use crate::message::{Embed, Message};

/// Sends messages to webhook URLs.
///
/// Each call issues exactly one POST and returns once the exchange
/// completes or fails. Nothing is retried, slept on, or kept between calls;
/// rate-limit hints are surfaced through [`SendError::retry_after`].
///
/// Concurrent sends through one client are fine. The webhook URL is passed
/// per call and is never logged, only its host.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use hookmsg::webhook::WebhookClient;
/// use hookmsg::{Embed, Message};
///
/// # async fn example() -> Result<(), hookmsg::webhook::SendError> {
/// let client = WebhookClient::new();
/// let message = Message::new()
///     .with_content("Deploy finished")
///     .add_embed(Embed::new().with_title("v1.4.2").with_color_hex("#2ECC71"));
///
/// match client.send("https://chat.example.com/hooks/123/abc", &message).await {
///     Ok(()) => {}
///     Err(e) if e.is_rate_limited() => println!("wait {:?}", e.retry_after()),
///     Err(e) => return Err(e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct WebhookClient<H = ReqwestClient> {
    client: H,
}

impl WebhookClient<ReqwestClient> {
    /// Creates a webhook client backed by a default [`ReqwestClient`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: ReqwestClient::new(),
        }
    }
}

impl<H> WebhookClient<H> {
    /// Creates a webhook client backed by the given HTTP client.
    #[must_use]
    pub const fn with_client(client: H) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> WebhookClient<H> {
    /// Sends a message to the webhook URL.
    ///
    /// The message is borrowed, so it can be sent again.
    ///
    /// # Errors
    ///
    /// - [`SendError::Serialization`] if the message cannot be encoded;
    ///   no request is made
    /// - [`SendError::Transport`] if the URL is unusable or no response
    ///   arrives
    /// - [`SendError::Service`] if the service answers with anything other
    ///   than 200 or 204
    pub async fn send(&self, webhook_url: &str, message: &Message) -> Result<(), SendError> {
        let body = message.to_json()?;
        let url = parse_url(webhook_url)?;

        debug!(
            host = url.host_str().unwrap_or_default(),
            bytes = body.len(),
            embeds = message.embeds().len(),
            "Posting webhook message"
        );

        let response = self.client.request(HttpRequest::post_json(url, body)).await?;
        classify_response(&response)?;
        Ok(())
    }

    /// Sends a text-only message.
    ///
    /// # Errors
    ///
    /// Same as [`send`](Self::send).
    pub async fn send_simple(
        &self,
        webhook_url: &str,
        content: impl Into<String>,
    ) -> Result<(), SendError> {
        self.send(webhook_url, &Message::text(content)).await
    }

    /// Sends a message containing a copy of one embed.
    ///
    /// # Errors
    ///
    /// Same as [`send`](Self::send).
    pub async fn send_embed(&self, webhook_url: &str, embed: &Embed) -> Result<(), SendError> {
        self.send(webhook_url, &Message::from(embed.clone())).await
    }
}

/// Parses the webhook URL without echoing it in the error.
fn parse_url(webhook_url: &str) -> Result<url::Url, HttpError> {
    url::Url::parse(webhook_url).map_err(|e| HttpError::InvalidUrl(e.to_string()))
}

/// Classifies a completed exchange.
///
/// 200 and 204 are success; every other status becomes a [`ServiceError`].
///
/// # Errors
///
/// Returns [`ServiceError`] carrying the status, the (truncated) body and,
/// for 429 only, the `Retry-After` hint.
pub fn classify_response(response: &HttpResponse) -> Result<(), ServiceError> {
    let status = response.status;
    if status == http::StatusCode::OK || status == http::StatusCode::NO_CONTENT {
        trace!(status = status.as_u16(), "Webhook accepted");
        return Ok(());
    }

    let retry_after = if status == http::StatusCode::TOO_MANY_REQUESTS {
        retry_after(response)
    } else {
        Duration::ZERO
    };

    debug!(
        status = status.as_u16(),
        retry_after_ms = u64::try_from(retry_after.as_millis()).unwrap_or(u64::MAX),
        "Webhook rejected"
    );

    Err(ServiceError {
        status,
        body: response.body_lossy(),
        retry_after,
    })
}

/// Extracts the `Retry-After` header as a number of milliseconds.
///
/// Absent, negative or non-integer values yield zero.
#[must_use]
pub fn retry_after(response: &HttpResponse) -> Duration {
    response
        .header_str(http::header::RETRY_AFTER)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map_or(Duration::ZERO, Duration::from_millis)
}

/// Extension trait for checking if an error is worth retrying.
///
/// Purely advisory: the crate never retries on its own. Callers running a
/// retry loop can use this together with [`SendError::retry_after`].
pub trait IsRetryable {
    /// Returns true if the error is potentially transient.
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for HttpError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Connection(_) | Self::Timeout => true,
            // Configuration or environment problems, not transient
            Self::InvalidUrl(_) | Self::Runtime(_) => false,
        }
    }
}

impl IsRetryable for ServiceError {
    fn is_retryable(&self) -> bool {
        self.status.is_server_error()
            || self.status == http::StatusCode::TOO_MANY_REQUESTS
            || self.status == http::StatusCode::REQUEST_TIMEOUT
    }
}

impl IsRetryable for SendError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Serialization(_) => false,
            Self::Transport(e) => e.is_retryable(),
            Self::Service(e) => e.is_retryable(),
        }
    }
}

/// Sends a message with a fresh default client.
///
/// # Errors
///
/// See [`WebhookClient::send`].
pub async fn send(webhook_url: &str, message: &Message) -> Result<(), SendError> {
    WebhookClient::new().send(webhook_url, message).await
}

/// Sends a text-only message with a fresh default client.
///
/// # Errors
///
/// See [`WebhookClient::send`].
pub async fn send_simple(webhook_url: &str, content: impl Into<String>) -> Result<(), SendError> {
    WebhookClient::new().send_simple(webhook_url, content).await
}

/// Sends a single-embed message with a fresh default client.
///
/// # Errors
///
/// See [`WebhookClient::send`].
pub async fn send_embed(webhook_url: &str, embed: &Embed) -> Result<(), SendError> {
    WebhookClient::new().send_embed(webhook_url, embed).await
}
