//! Adaptive perceptual-boundary experiments
//!
//! An experiment starts from a base color, lays out a grid of nearby
//! candidates in xyY, and hands them out in fixed-size batches. The caller
//! shows each batch to a chooser and reports back which samples were
//! selected (seen as different) and which were not. Once the grid is
//! exhausted, [`BoundaryExperiment::resulting_colors`] estimates, for every
//! direction, how far from the base the chooser starts to tell colors apart.
//!
//! ```
//! use color_boundary::{BoundaryExperiment, ColorValue, Stage1Solo};
//!
//! let mut experiment = Stage1Solo::new(ColorValue::xyy(0.3, 0.3, 0.5));
//! assert_eq!(experiment.total_batches(), 4);
//!
//! let mut previous = Vec::new();
//! loop {
//!     // Nothing is ever selected here: every sample looks the same.
//!     let batch = experiment.next_batch(&[], &previous);
//!     previous = batch.samples;
//!     if !batch.has_more {
//!         break;
//!     }
//! }
//! experiment.next_batch(&[], &previous);
//!
//! let encoding = experiment.resulting_colors();
//! assert_eq!(encoding.len(), 8);
//! ```
//!
//! # Lifecycle
//!
//! ```text
//! Initialized --next_batch--> InProgress --(grid consumed)--> Exhausted
//!                                                                |
//!                                               resulting_colors v
//!                                                            Resolved
//! ```
//!
//! Responses for a batch are passed in on the *following* call, so after the
//! last batch the driver makes one more `next_batch` call (which returns an
//! empty batch) to hand over the final responses.

mod encoding;
mod error;
mod kind;
mod polar;
mod sample;

pub use encoding::AxisEncoding;
pub use error::ParseExperimentError;
pub use kind::ExperimentKind;
pub use polar::{PolarGridParams, Stage1Solo};
pub use sample::SampleColor;

use crate::color::ColorValue;

/// Where an experiment is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperimentState {
    /// Grid generated, no batch delivered yet
    Initialized,
    /// At least one batch delivered, candidates remain
    InProgress,
    /// Every candidate has been delivered
    Exhausted,
    /// The axis encoding has been computed
    Resolved,
}

/// One round of stimuli.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// Candidates to present, in grid order
    pub samples: Vec<SampleColor>,
    /// False once the grid has been fully delivered
    pub has_more: bool,
}

/// A sampling strategy that locates a perceptual boundary around a base color.
///
/// Implementations are driven by a single owner, strictly in sequence.
pub trait BoundaryExperiment: Send {
    /// The color the experiment is centered on.
    fn base_color(&self) -> ColorValue;

    fn state(&self) -> ExperimentState;

    /// How many batches the full grid splits into.
    fn total_batches(&self) -> usize;

    /// Record the responses to the previous batch and return the next one.
    ///
    /// `selected` and `unselected` are appended as-is to the experiment's
    /// running totals. Once the grid is consumed this returns an empty batch
    /// with `has_more == false`.
    ///
    /// # Panics
    ///
    /// Panics when called after the experiment has been resolved.
    fn next_batch(&mut self, selected: &[SampleColor], unselected: &[SampleColor]) -> Batch;

    /// Compute (once) and return the per-direction boundary estimate.
    ///
    /// # Panics
    ///
    /// Panics when no direction has accumulated any responses. A direction
    /// without responses on its own resolves to the base color.
    fn resulting_colors(&mut self) -> AxisEncoding;
}
