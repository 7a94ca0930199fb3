//! Tagged color triples

use std::fmt;
use std::str::FromStr;

use super::convert;
use super::error::ParseColorError;
use super::format::ColorFormat;
use super::matrix;

/// An immutable color: three components plus the representation they are in.
///
/// The components only mean something relative to [`format`](Self::format).
/// Conversion never mutates a value, it returns a new one.
///
/// # Example
///
/// ```
/// use color_boundary::{ColorFormat, ColorValue};
///
/// let red = ColorValue::from_u8(255, 0, 0);
/// let xyy = red.convert(ColorFormat::XyY);
/// assert!((xyy.components[0] - 0.64).abs() < 1e-3);
/// assert!((xyy.components[1] - 0.33).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorValue {
    pub components: [f64; 3],
    pub format: ColorFormat,
}

impl ColorValue {
    #[inline]
    pub fn new(components: [f64; 3], format: ColorFormat) -> Self {
        Self { components, format }
    }

    /// An sRGB color from 8-bit channel values, tagged as [`ColorFormat::Srgb01`].
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            [r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0],
            ColorFormat::Srgb01,
        )
    }

    /// A chromaticity + luminance color.
    #[inline]
    pub fn xyy(x: f64, y: f64, luminance: f64) -> Self {
        Self::new([x, y, luminance], ColorFormat::XyY)
    }

    /// Convert to another representation. See [`convert::convert`].
    #[inline]
    pub fn convert(self, target: ColorFormat) -> ColorValue {
        convert::convert(self, target)
    }

    /// Euclidean distance between the raw components of two values.
    ///
    /// Both values should be in the same representation; the tags are not
    /// checked.
    #[inline]
    pub fn distance(&self, other: &ColorValue) -> f64 {
        matrix::distance(self.components, other.components)
    }

    /// Encode as `RRGGBBAA` (sRGB, alpha always `FF`).
    ///
    /// ```
    /// use color_boundary::ColorValue;
    /// assert_eq!(ColorValue::from_u8(255, 128, 0).to_hex_rgba(), "FF8000FF");
    /// ```
    pub fn to_hex_rgba(&self) -> String {
        let bytes = self.to_srgb_bytes();
        format!("{:02X}{:02X}{:02X}FF", bytes[0], bytes[1], bytes[2])
    }

    /// Convert to sRGB and round to 8-bit channels.
    pub fn to_srgb_bytes(&self) -> [u8; 3] {
        let srgb = self.convert(ColorFormat::Srgb255).components;
        [
            srgb[0].round() as u8,
            srgb[1].round() as u8,
            srgb[2].round() as u8,
        ]
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.components;
        write!(f, "{}({:.6}, {:.6}, {:.6})", self.format, a, b, c)
    }
}

impl FromStr for ColorValue {
    type Err = ParseColorError;

    /// Parse an sRGB hex color.
    ///
    /// Accepts `RGB`, `RRGGBB` and `RRGGBBAA`, with or without a leading
    /// `#`. The alpha byte is read and discarded. The result is tagged
    /// [`ColorFormat::Srgb01`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return match s.len() {
                3 | 6 | 8 => Err(ParseColorError::InvalidCharacter(c)),
                _ => Err(ParseColorError::InvalidLength),
            };
        }

        match s.len() {
            3 => {
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 | 8 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                if s.len() == 8 {
                    u8::from_str_radix(&s[6..8], 16)?;
                }
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
