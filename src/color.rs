//! Color value utilities.
//!
//! Embed colors travel on the wire as a single 24-bit packed integer
//! (`(R << 16) | (G << 8) | B`). This module converts the common
//! human-facing notations into that form:
//!
//! - hex strings (`"#FF5733"` or `"ff5733"`) via [`hex_to_color`]
//! - RGB triples via [`rgb_to_color`]
//! - arbitrary integers via [`clamp_color`]

use thiserror::Error;

/// Smallest valid packed color (black).
pub const MIN_COLOR: u32 = 0;

/// Largest valid packed color (`0xFFFFFF`, white).
pub const MAX_COLOR: u32 = 0x00FF_FFFF;

/// Smallest valid value of a single RGB channel.
pub const MIN_CHANNEL: i32 = 0;

/// Largest valid value of a single RGB channel.
pub const MAX_CHANNEL: i32 = 255;

/// Number of hex digits in a full color (no short form).
const HEX_DIGITS: usize = 6;

/// Error produced when a hex color string is malformed.
///
/// Builders never return this directly; it is recorded on the
/// [`Embed`](crate::Embed) and read back with
/// [`Embed::error`](crate::Embed::error).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input is neither `#` plus six digits nor exactly six digits.
    #[error("Invalid hex color format: expected 6 hex digits with optional '#', got {len} characters")]
    InvalidLength {
        /// Length of the rejected input in bytes
        len: usize,
    },

    /// Input has the right length but contains a non-hex character.
    #[error("Invalid hex color digit '{digit}'")]
    InvalidDigit {
        /// First offending character
        digit: char,
    },
}

/// An RGB color triple.
///
/// Channels are signed so that out-of-range input can be represented;
/// [`rgb_to_color`] clamps each channel into `0..=255` before packing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: i32,
    /// Green channel
    pub g: i32,
    /// Blue channel
    pub b: i32,
}

impl Rgb {
    /// Creates a new RGB triple.
    #[must_use]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }
}

impl From<(i32, i32, i32)> for Rgb {
    fn from((r, g, b): (i32, i32, i32)) -> Self {
        Self::new(r, g, b)
    }
}

/// Parses a hex color string into a packed 24-bit integer.
///
/// Accepts `#RRGGBB` or `RRGGBB`, case-insensitive. Short forms such as
/// `#FFF` are rejected.
///
/// # Errors
///
/// Returns [`ColorError::InvalidLength`] for any other length and
/// [`ColorError::InvalidDigit`] when a character is not a hex digit.
///
/// # Example
///
/// ```
/// use hookmsg::color::hex_to_color;
///
/// assert_eq!(hex_to_color("#ff5733"), Ok(16_734_003));
/// assert_eq!(hex_to_color("FF5733"), Ok(16_734_003));
/// assert!(hex_to_color("#FFF").is_err());
/// ```
pub fn hex_to_color(hex: &str) -> Result<u32, ColorError> {
    let digits = match hex.strip_prefix('#') {
        Some(rest) if hex.len() == HEX_DIGITS + 1 => rest,
        _ if hex.len() == HEX_DIGITS => hex,
        _ => return Err(ColorError::InvalidLength { len: hex.len() }),
    };

    // from_str_radix tolerates a leading '+', so validate every digit first
    if let Some(digit) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit { digit });
    }

    u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidLength { len: hex.len() })
}

/// Packs an RGB triple into a 24-bit integer.
///
/// Every channel is clamped into `0..=255` independently; an out-of-range
/// channel never affects the others.
///
/// # Example
///
/// ```
/// use hookmsg::color::{Rgb, rgb_to_color};
///
/// assert_eq!(rgb_to_color(Rgb::new(-5, 300, 128)), (255 << 8) | 128);
/// ```
#[must_use]
pub fn rgb_to_color(rgb: Rgb) -> u32 {
    let channel = |v: i32| v.clamp(MIN_CHANNEL, MAX_CHANNEL).unsigned_abs();
    (channel(rgb.r) << 16) | (channel(rgb.g) << 8) | channel(rgb.b)
}

/// Saturates an arbitrary integer into the valid color range.
///
/// Negative values become [`MIN_COLOR`]; values above [`MAX_COLOR`] become
/// [`MAX_COLOR`]. Never fails.
#[must_use]
pub fn clamp_color(color: i64) -> u32 {
    let clamped = color.clamp(i64::from(MIN_COLOR), i64::from(MAX_COLOR));
    // In range by construction
    u32::try_from(clamped).unwrap_or(MAX_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod hex {
        use super::*;

        #[test]
        fn parses_with_and_without_hash() {
            assert_eq!(hex_to_color("#ff5733"), Ok(16_734_003));
            assert_eq!(hex_to_color("FF5733"), Ok(16_734_003));
        }

        #[test]
        fn is_case_insensitive() {
            assert_eq!(hex_to_color("#AbCdEf"), hex_to_color("abcdef"));
        }

        #[test]
        fn parses_extremes() {
            assert_eq!(hex_to_color("#000000"), Ok(MIN_COLOR));
            assert_eq!(hex_to_color("ffffff"), Ok(MAX_COLOR));
        }

        #[test]
        fn rejects_short_form() {
            assert_eq!(
                hex_to_color("#FFF"),
                Err(ColorError::InvalidLength { len: 4 })
            );
        }

        #[test]
        fn rejects_empty_string() {
            assert_eq!(hex_to_color(""), Err(ColorError::InvalidLength { len: 0 }));
        }

        #[test]
        fn rejects_too_long() {
            assert_eq!(
                hex_to_color("#1234567"),
                Err(ColorError::InvalidLength { len: 8 })
            );
            assert_eq!(
                hex_to_color("1234567"),
                Err(ColorError::InvalidLength { len: 7 })
            );
        }

        #[test]
        fn rejects_non_hex_digit() {
            assert_eq!(
                hex_to_color("GG0000"),
                Err(ColorError::InvalidDigit { digit: 'G' })
            );
        }

        #[test]
        fn rejects_sign_prefix() {
            assert_eq!(
                hex_to_color("+FFFFF"),
                Err(ColorError::InvalidDigit { digit: '+' })
            );
            assert_eq!(
                hex_to_color("#-FFFFF"),
                Err(ColorError::InvalidDigit { digit: '-' })
            );
        }

        #[test]
        fn rejects_hash_without_full_payload() {
            assert_eq!(
                hex_to_color("#FFFFF"),
                Err(ColorError::InvalidDigit { digit: '#' })
            );
        }

        #[test]
        fn rejects_multibyte_character() {
            // 'é' is two bytes, so the input is six bytes long
            assert_eq!(
                hex_to_color("éFFFF"),
                Err(ColorError::InvalidDigit { digit: 'é' })
            );
        }

        #[test]
        fn error_messages_are_descriptive() {
            let err = hex_to_color("#FFF").unwrap_err();
            assert!(err.to_string().contains("Invalid hex color format"));

            let err = hex_to_color("GG0000").unwrap_err();
            assert!(err.to_string().contains("'G'"));
        }
    }

    mod rgb {
        use super::*;

        #[test]
        fn packs_in_range_channels() {
            assert_eq!(rgb_to_color(Rgb::new(0x12, 0x34, 0x56)), 0x0012_3456);
        }

        #[test]
        fn clamps_every_channel_independently() {
            assert_eq!(rgb_to_color(Rgb::new(-5, 300, 128)), (255 << 8) | 128);
            assert_eq!(rgb_to_color(Rgb::new(300, 300, 300)), MAX_COLOR);
            assert_eq!(rgb_to_color(Rgb::new(-1, -1, -1)), MIN_COLOR);
            assert_eq!(rgb_to_color(Rgb::new(100, 200, 300)), (100 << 16) | (200 << 8) | 255);
        }

        #[test]
        fn clamps_extreme_values() {
            assert_eq!(rgb_to_color(Rgb::new(i32::MIN, i32::MAX, 0)), 255 << 8);
        }

        #[test]
        fn converts_from_tuple() {
            assert_eq!(Rgb::from((1, 2, 3)), Rgb::new(1, 2, 3));
        }
    }

    mod clamp {
        use super::*;

        #[test]
        fn keeps_in_range_values() {
            assert_eq!(clamp_color(55_555), 55_555);
            assert_eq!(clamp_color(0), 0);
            assert_eq!(clamp_color(16_777_215), MAX_COLOR);
        }

        #[test]
        fn saturates_out_of_range_values() {
            assert_eq!(clamp_color(-1), 0);
            assert_eq!(clamp_color(16_777_216), MAX_COLOR);
            assert_eq!(clamp_color(i64::MIN), 0);
            assert_eq!(clamp_color(i64::MAX), MAX_COLOR);
        }

        #[test]
        fn result_is_always_valid() {
            for c in [i64::MIN, -100, 0, 42, 16_777_215, 16_777_216, i64::MAX] {
                assert!(clamp_color(c) <= MAX_COLOR, "{c} produced invalid color");
            }
        }
    }
}
