//! Integer base conversion.
//!
//! Accepts decimal, `0b`-prefixed binary, and `0x`-prefixed hexadecimal
//! input, each with an optional leading `-`, and renders integers back in
//! any of the three bases.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while reading an integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversionError {
    /// A decimal literal contained a `.`.
    #[error("only integers can be converted")]
    AttemptToConvertFloat,

    /// The text is not an integer in any supported base, or does not fit in 64 bits.
    #[error("not a valid integer")]
    StrConversionFailed,
}

impl ConversionError {
    /// The stable error code shown to users.
    pub fn label(self) -> &'static str {
        match self {
            Self::AttemptToConvertFloat => "ATTEMPT_TO_CONVERT_FLOAT",
            Self::StrConversionFailed => "STR_CONVERSION_FAILED",
        }
    }
}

/// Read an integer in decimal, `0b` binary or `0x` hexadecimal notation.
///
/// Surrounding whitespace is ignored. Prefixes are case-insensitive.
pub fn parse_integer(text: &str) -> Result<i64, ConversionError> {
    let text = text.trim();
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (radix, digits) = split_radix(body);

    if digits.is_empty() {
        return Err(ConversionError::StrConversionFailed);
    }
    if let Some(bad) = digits.chars().find(|ch| !ch.is_digit(radix)) {
        return Err(if bad == '.' && radix == 10 {
            ConversionError::AttemptToConvertFloat
        } else {
            ConversionError::StrConversionFailed
        });
    }

    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    i64::from_str_radix(&signed, radix).map_err(|_| ConversionError::StrConversionFailed)
}

fn split_radix(body: &str) -> (u32, &str) {
    let bytes = body.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'b' | b'B' => return (2, &body[2..]),
            b'x' | b'X' => return (16, &body[2..]),
            _ => {}
        }
    }
    (10, body)
}

/// `0x` followed by the uppercase hex digits of the two's-complement value.
pub fn to_hex(value: i64) -> String {
    format!("0x{value:X}")
}

/// Optional `-`, then `0b` and the magnitude's binary digits.
pub fn to_bin(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}0b{:b}", value.unsigned_abs())
}

/// Plain decimal.
pub fn to_dec(value: i64) -> String {
    value.to_string()
}
