//! Experiment results

use crate::color::ColorValue;
use crate::color::matrix;

/// Per-direction boundary estimate produced when an experiment resolves.
///
/// `axes[i]` points from the base color towards the boundary found in
/// direction `i` (in xyY). Its length is the boundary's distance as a
/// fraction of the outermost sampled radius, so it lies in 0.0..=1.0 under
/// normal conditions. `boundary_colors[i]` is the boundary point itself,
/// tagged xyY.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisEncoding {
    pub axes: Vec<[f64; 3]>,
    pub boundary_colors: Vec<ColorValue>,
}

impl AxisEncoding {
    pub fn new(axes: Vec<[f64; 3]>, boundary_colors: Vec<ColorValue>) -> Self {
        debug_assert_eq!(
            axes.len(),
            boundary_colors.len(),
            "one boundary color per axis"
        );
        Self {
            axes,
            boundary_colors,
        }
    }

    /// Number of directions encoded.
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Normalized boundary distance for each direction.
    pub fn magnitudes(&self) -> Vec<f64> {
        self.axes.iter().map(|a| matrix::length(*a)).collect()
    }

    /// True when every axis component is finite.
    pub fn is_finite(&self) -> bool {
        self.axes.iter().flatten().all(|c| c.is_finite())
            && self
                .boundary_colors
                .iter()
                .flat_map(|c| c.components)
                .all(f64::is_finite)
    }
}
