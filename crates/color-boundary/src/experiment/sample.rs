//! Candidate stimuli

use crate::color::{ColorFormat, ColorValue};

/// A color shown to the chooser, tagged with the sampling direction it
/// belongs to.
///
/// Colors that are not part of a directional grid carry `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleColor {
    pub color: ColorValue,
    pub direction: Option<usize>,
}

impl SampleColor {
    #[inline]
    pub fn new(color: ColorValue, direction: usize) -> Self {
        Self {
            color,
            direction: Some(direction),
        }
    }

    /// A sample outside any directional grid.
    #[inline]
    pub fn undirected(color: ColorValue) -> Self {
        Self {
            color,
            direction: None,
        }
    }

    /// Direction as a signed index, `-1` when undirected.
    ///
    /// Export formats use this convention.
    pub fn direction_index(&self) -> i32 {
        self.direction.map_or(-1, |d| d as i32)
    }

    /// The sample's components in xyY.
    #[inline]
    pub fn xyy(&self) -> [f64; 3] {
        match self.color.format {
            ColorFormat::XyY => self.color.components,
            _ => self.color.convert(ColorFormat::XyY).components,
        }
    }
}

impl From<ColorValue> for SampleColor {
    fn from(color: ColorValue) -> Self {
        Self::undirected(color)
    }
}
