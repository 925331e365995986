//! Webhook transport: one JSON POST per message.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Sending messages and classifying responses ([`WebhookClient`])
//! - Structured failures ([`SendError`], [`ServiceError`], [`HttpError`])
//!
//! # Response Classification
//!
//! | Outcome                               | Result                    |
//! |---------------------------------------|---------------------------|
//! | Message could not be encoded          | [`SendError::Serialization`] |
//! | No response (DNS, TCP, TLS, cancel)   | [`SendError::Transport`]  |
//! | `200 OK` or `204 No Content`          | `Ok(())`                  |
//! | Any other status                      | [`SendError::Service`]    |
//!
//! On `429 Too Many Requests` the `Retry-After` header is read as an integer
//! number of **milliseconds** and attached to the error.

mod client;
mod error;
mod http;
mod sender;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use client::ReqwestClient;
pub use error::{HttpError, SendError, ServiceError};
pub use http::{HttpClient, HttpRequest, HttpResponse, MAX_RESPONSE_BODY};
pub use sender::{
    IsRetryable, WebhookClient, classify_response, retry_after, send, send_embed, send_simple,
};
