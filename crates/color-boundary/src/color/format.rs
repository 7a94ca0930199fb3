//! Color representation tags
//!
//! Every [`ColorValue`](super::ColorValue) carries a [`ColorFormat`] that
//! says how its three components are to be read. The conversion pipeline
//! dispatches on this tag with exhaustive matches, so adding a variant
//! forces every step to handle it.

use std::fmt;
use std::str::FromStr;

use super::error::ParseFormatError;

/// The representation a color triple is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorFormat {
    /// Gamma-encoded sRGB, components in 0.0..=1.0
    Srgb01,
    /// Gamma-encoded sRGB, components in 0.0..=255.0
    Srgb255,
    /// Gamma-encoded Display P3, components in 0.0..=1.0
    DisplayP301,
    /// Gamma-encoded Display P3, components in 0.0..=255.0
    DisplayP3255,
    /// CIE 1931 XYZ tristimulus values (linear, D65)
    Xyz,
    /// CIE xyY: chromaticity (x, y) plus relative luminance Y
    XyY,
}

impl ColorFormat {
    /// All supported representations, in declaration order.
    pub const ALL: [ColorFormat; 6] = [
        ColorFormat::Srgb01,
        ColorFormat::Srgb255,
        ColorFormat::DisplayP301,
        ColorFormat::DisplayP3255,
        ColorFormat::Xyz,
        ColorFormat::XyY,
    ];

    /// True for the integer-scaled (0–255) RGB representations.
    #[inline]
    pub fn is_byte_scaled(self) -> bool {
        matches!(self, ColorFormat::Srgb255 | ColorFormat::DisplayP3255)
    }

    /// True for representations that carry the sRGB transfer function.
    #[inline]
    pub fn is_gamma_encoded(self) -> bool {
        match self {
            ColorFormat::Srgb01
            | ColorFormat::Srgb255
            | ColorFormat::DisplayP301
            | ColorFormat::DisplayP3255 => true,
            ColorFormat::Xyz | ColorFormat::XyY => false,
        }
    }

    /// The unit-interval counterpart of a 0–255 format (identity otherwise).
    pub fn unit_scaled(self) -> ColorFormat {
        match self {
            ColorFormat::Srgb255 => ColorFormat::Srgb01,
            ColorFormat::DisplayP3255 => ColorFormat::DisplayP301,
            other => other,
        }
    }

    /// Canonical lowercase name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            ColorFormat::Srgb01 => "srgb_0_1",
            ColorFormat::Srgb255 => "srgb_0_255",
            ColorFormat::DisplayP301 => "display_p3_0_1",
            ColorFormat::DisplayP3255 => "display_p3_0_255",
            ColorFormat::Xyz => "xyz",
            ColorFormat::XyY => "xyy",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = ParseFormatError;

    /// Parse a representation name.
    ///
    /// Matching ignores case and treats `-` like `_`, so `SRGB_0_1`,
    /// `srgb-0-1` and `DisplayP3_0_255` are all accepted. `xyY` and `XYZ`
    /// differ only by case, so `xyz` always means XYZ and `xyy` means xyY.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "srgb01" | "srgb" => Ok(ColorFormat::Srgb01),
            "srgb0255" | "srgb255" => Ok(ColorFormat::Srgb255),
            "displayp301" | "displayp3" | "p3" => Ok(ColorFormat::DisplayP301),
            "displayp30255" | "displayp3255" | "p3255" => Ok(ColorFormat::DisplayP3255),
            "xyz" => Ok(ColorFormat::Xyz),
            "xyy" => Ok(ColorFormat::XyY),
            _ => Err(ParseFormatError::Unknown(s.trim().to_string())),
        }
    }
}
