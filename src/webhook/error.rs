//! Error types for sending webhook messages.

use std::time::Duration;

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes why a request never produced a response.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS failures and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// Only produced by clients configured with a timeout.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    ///
    /// The message never contains the URL itself, since webhook URLs
    /// embed their credentials.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The runtime driving a blocking send could not be started.
    #[error("Failed to start I/O runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// The service answered with a status other than 200 or 204.
///
/// `retry_after` is only non-zero for `429 Too Many Requests` responses
/// carrying a parseable `Retry-After` header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Webhook rejected: status={}{} body={body}",
    .status.as_u16(),
    retry_hint(.status, .retry_after)
)]
pub struct ServiceError {
    /// Response status code
    pub status: http::StatusCode,
    /// Response body, truncated to
    /// [`MAX_RESPONSE_BODY`](super::MAX_RESPONSE_BODY) bytes
    pub body: String,
    /// Suggested wait before retrying (zero if none was given)
    pub retry_after: Duration,
}

impl ServiceError {
    /// Returns true for `429 Too Many Requests`.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.status == http::StatusCode::TOO_MANY_REQUESTS
    }
}

/// Renders the ` retry_after=..` part of a rejection message.
///
/// Only rate-limit rejections with a usable hint mention it.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn retry_hint(status: &http::StatusCode, retry_after: &Duration) -> String {
    if *status == http::StatusCode::TOO_MANY_REQUESTS && !retry_after.is_zero() {
        format!(" retry_after={retry_after:?}")
    } else {
        String::new()
    }
}

/// Error returned by a send operation.
///
/// The three variants are disjoint: a serialization failure means no
/// request was made, a transport failure means no response arrived, and a
/// service failure means the service answered with a rejection.
#[derive(Debug, Error)]
pub enum SendError {
    /// The message could not be encoded as JSON.
    #[error("Failed to serialize message: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The POST never produced a response.
    #[error("Failed to post webhook: {0}")]
    Transport(#[from] HttpError),

    /// The service returned a non-success status.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl SendError {
    /// Returns the service error, if the service answered.
    #[must_use]
    pub const fn as_service(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the response status, if the service answered.
    #[must_use]
    pub fn status(&self) -> Option<http::StatusCode> {
        self.as_service().map(|e| e.status)
    }

    /// Returns how long the service asked the caller to wait.
    ///
    /// `None` unless this is a rate-limit rejection with a usable
    /// `Retry-After` header. The crate never waits or retries itself.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        self.as_service()
            .map(|e| e.retry_after)
            .filter(|d| !d.is_zero())
    }

    /// Returns true for `429 Too Many Requests` rejections.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.as_service().is_some_and(ServiceError::is_rate_limited)
    }
}
