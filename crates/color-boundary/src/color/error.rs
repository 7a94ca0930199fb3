//! Error types for color parsing
//!
//! Conversions themselves never fail; only turning text into colors or
//! representation tags can.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3, 6 or 8 characters after stripping '#')
    InvalidLength,
    /// Character outside `0-9`, `a-f` and `A-F`
    InvalidCharacter(char),
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3, 6 or 8 characters)")
            }
            ParseColorError::InvalidCharacter(c) => {
                write!(f, "invalid hex character: {:?}", c)
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for parsing a representation name such as `"srgb_0_1"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFormatError {
    /// The name does not match any supported representation
    Unknown(String),
}

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFormatError::Unknown(name) => {
                write!(f, "unknown color representation: {:?}", name)
            }
        }
    }
}

impl std::error::Error for ParseFormatError {}
