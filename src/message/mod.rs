//! Message data model and fluent builders.
//!
//! This module provides:
//! - The root aggregate posted to a webhook ([`Message`])
//! - Rich embed cards ([`Embed`]) and their nested records
//!   ([`Footer`], [`Image`], [`Thumbnail`], [`Author`], [`Field`])
//!
//! # Wire Shape
//!
//! Every type serializes to the JSON object the service expects, with
//! snake-case keys. Values equal to their type's zero value (empty string,
//! `0`, `false`, empty list) are omitted, and nested records that are
//! entirely unset are omitted as well. Deserialization restores omitted keys
//! as zero values.
//!
//! # Deferred Errors
//!
//! Builders never fail. A malformed hex color is recorded on the embed and
//! can be inspected with [`Embed::error`] before sending. The slot holds only
//! the most recent error; a later failure replaces an earlier one.

mod embed;
mod payload;


pub use embed::{Author, Embed, Field, Footer, Image, Thumbnail};
pub use payload::Message;

/// Serde predicate for omitting a `false` flag.
// serde passes skip predicates by reference
#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

/// Serde predicate for omitting a zero integer.
#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(value: &u32) -> bool {
    *value == 0
}
