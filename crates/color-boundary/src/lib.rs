#![allow(clippy::excessive_precision)]

//! color-boundary: color conversion and perceptual-boundary experiments
//!
//! Two layers, the second built on the first:
//!
//! - [`color`]: immutable [`ColorValue`] triples tagged with a
//!   [`ColorFormat`], and a total conversion between sRGB, Display P3 (both
//!   unit and 0–255 scaled), CIE XYZ and CIE xyY.
//! - [`experiment`]: the [`BoundaryExperiment`] batch protocol and its
//!   polar-grid strategy [`Stage1Solo`], which turns a chooser's
//!   accept/reject responses into a per-direction [`AxisEncoding`].
//!
//! # Quick Start
//!
//! ```
//! use color_boundary::{BoundaryExperiment, ColorValue, SampleColor, Stage1Solo};
//!
//! let base = ColorValue::from_u8(127, 175, 120);
//! let mut experiment = Stage1Solo::new(base);
//!
//! let (mut selected, mut unselected): (Vec<SampleColor>, Vec<SampleColor>) =
//!     (Vec::new(), Vec::new());
//! loop {
//!     let batch = experiment.next_batch(&selected, &unselected);
//!     if batch.samples.is_empty() {
//!         break;
//!     }
//!     // A chooser that notices everything beyond the third ring.
//!     let center = experiment.base_xyy();
//!     (selected, unselected) = batch.samples.iter().copied().partition(|s: &SampleColor| {
//!         let p = s.xyy();
//!         ((p[0] - center[0]).powi(2) + (p[1] - center[1]).powi(2)).sqrt() > 0.004
//!     });
//! }
//!
//! let encoding = experiment.resulting_colors();
//! assert_eq!(encoding.boundary_colors.len(), 8);
//! assert!(encoding.magnitudes().iter().all(|m| *m > 0.4 && *m < 0.5));
//! ```
//!
//! # Color Science
//!
//! xyY separates chromaticity from luminance. The experiments keep the base
//! luminance fixed and move only in the (x, y) plane, so the distance a
//! chooser can discriminate is a purely chromatic threshold. Small offsets in
//! xyY track perceived difference better than raw RGB offsets do, which is
//! why the grid is laid out there rather than in an RGB space.
//!
//! Gamma-encoded values are never mixed arithmetically: every conversion
//! expands to linear light before any matrix is applied and compresses
//! only at the very end.

pub mod color;
pub mod experiment;

#[cfg(test)]
mod domain_tests;

pub use color::{ColorFormat, ColorValue, ParseColorError, ParseFormatError};
pub use experiment::{
    AxisEncoding, Batch, BoundaryExperiment, ExperimentKind, ExperimentState,
    ParseExperimentError, PolarGridParams, SampleColor, Stage1Solo,
};
