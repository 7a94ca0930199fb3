//! Polar sampling in xyY chromaticity
//!
//! Candidates sit on concentric rings around the base chromaticity, one
//! spoke per direction, all at the base luminance:
//!
//! ```text
//! radius(ring)   = ring · ring_step + start_offset
//! x(dir, ring)   = cos(2π · dir / directions) · radius + base.x
//! y(dir, ring)   = sin(2π · dir / directions) · radius + base.y
//! ```
//!
//! The grid is ordered direction-major: all rings of direction 0, then all
//! rings of direction 1, and so on.

use std::f64::consts::TAU;

use crate::color::matrix::{distance, length, midpoint, normalize, scale, sub};
use crate::color::{ColorFormat, ColorValue};

use super::encoding::AxisEncoding;
use super::sample::SampleColor;
use super::{Batch, BoundaryExperiment, ExperimentState};

/// Shape of a polar candidate grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarGridParams {
    pub directions: usize,
    pub rings: usize,
    /// Radius of the innermost ring
    pub start_offset: f64,
    /// Radial distance between consecutive rings
    pub ring_step: f64,
    pub batch_size: usize,
}

impl PolarGridParams {
    /// 8 directions × 6 rings, served 12 at a time.
    pub const STAGE1_SOLO: PolarGridParams = PolarGridParams {
        directions: 8,
        rings: 6,
        start_offset: 0.0005,
        ring_step: 0.0013,
        batch_size: 12,
    };

    #[inline]
    pub fn radius(&self, ring: usize) -> f64 {
        ring as f64 * self.ring_step + self.start_offset
    }

    /// Radius used to normalize boundary distances.
    ///
    /// This is `rings · ring_step + start_offset`, one step beyond the
    /// outermost ring actually sampled.
    #[inline]
    pub fn max_radius(&self) -> f64 {
        self.radius(self.rings)
    }

    /// The point at `radius` along `direction` from `center` (xyY).
    pub fn point(&self, center: [f64; 3], direction: usize, radius: f64) -> [f64; 3] {
        let angle = TAU / self.directions as f64 * direction as f64;
        [
            angle.cos() * radius + center[0],
            angle.sin() * radius + center[1],
            center[2],
        ]
    }

    pub fn grid_len(&self) -> usize {
        self.directions * self.rings
    }

    pub fn total_batches(&self) -> usize {
        self.grid_len().div_ceil(self.batch_size)
    }

    /// Lay out the full candidate grid around `center` (xyY).
    pub fn generate(&self, center: [f64; 3]) -> Vec<SampleColor> {
        let mut grid = Vec::with_capacity(self.grid_len());
        for direction in 0..self.directions {
            for ring in 0..self.rings {
                let p = self.point(center, direction, self.radius(ring));
                grid.push(SampleColor::new(
                    ColorValue::new(p, ColorFormat::XyY),
                    direction,
                ));
            }
        }
        grid
    }
}

impl Default for PolarGridParams {
    fn default() -> Self {
        Self::STAGE1_SOLO
    }
}

/// Single-observer first-stage experiment on an 8 × 6 polar grid.
#[derive(Debug, Clone)]
pub struct Stage1Solo {
    params: PolarGridParams,
    base: ColorValue,
    base_xyy: [f64; 3],
    grid: Vec<SampleColor>,
    cursor: usize,
    selected: Vec<SampleColor>,
    unselected: Vec<SampleColor>,
    state: ExperimentState,
    result: Option<AxisEncoding>,
}

impl Stage1Solo {
    pub fn new(base: ColorValue) -> Self {
        Self::with_params(base, PolarGridParams::STAGE1_SOLO)
    }

    /// Build the experiment on a custom grid shape.
    ///
    /// # Panics
    ///
    /// Panics if `params` has zero directions, rings or batch size.
    pub fn with_params(base: ColorValue, params: PolarGridParams) -> Self {
        assert!(
            params.directions > 0 && params.rings > 0 && params.batch_size > 0,
            "polar grid needs at least one direction, ring and batch slot: {params:?}"
        );

        let base_xyy = base.convert(ColorFormat::XyY).components;
        let grid = params.generate(base_xyy);

        tracing::debug!(
            base = %base,
            candidates = grid.len(),
            batches = params.total_batches(),
            "Created polar boundary experiment"
        );

        Self {
            params,
            base,
            base_xyy,
            grid,
            cursor: 0,
            selected: Vec::new(),
            unselected: Vec::new(),
            state: ExperimentState::Initialized,
            result: None,
        }
    }

    pub fn params(&self) -> &PolarGridParams {
        &self.params
    }

    /// The full candidate grid, in delivery order.
    pub fn grid(&self) -> &[SampleColor] {
        &self.grid
    }

    /// The base color in xyY.
    pub fn base_xyy(&self) -> [f64; 3] {
        self.base_xyy
    }

    /// Number of candidates delivered so far.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> &[SampleColor] {
        &self.selected
    }

    pub fn unselected(&self) -> &[SampleColor] {
        &self.unselected
    }

    /// Compute the boundary from the responses accumulated so far.
    fn resolve(&self) -> AxisEncoding {
        let mut per_direction: Vec<Vec<([f64; 3], bool)>> =
            vec![Vec::new(); self.params.directions];

        let responses = self
            .selected
            .iter()
            .map(|s| (s, true))
            .chain(self.unselected.iter().map(|s| (s, false)));

        for (sample, was_selected) in responses {
            match sample.direction {
                Some(d) if d < self.params.directions => {
                    per_direction[d].push((sample.xyy(), was_selected));
                }
                other => {
                    tracing::warn!(
                        direction = ?other,
                        color = %sample.color,
                        "Ignoring response outside the sampling grid"
                    );
                }
            }
        }

        let mut axes = Vec::with_capacity(self.params.directions);
        let mut boundary_colors = Vec::with_capacity(self.params.directions);

        assert!(
            per_direction.iter().any(|points| !points.is_empty()),
            "no direction has recorded responses; \
             drive every batch through next_batch before resolving"
        );

        for (direction, points) in per_direction.iter_mut().enumerate() {
            // An unreported direction collapses onto the base color
            let boundary = if points.is_empty() {
                tracing::warn!(direction, "No responses for direction, using base color");
                self.base_xyy
            } else {
                boundary_point(points, self.base_xyy)
            };
            let max_point =
                self.params
                    .point(self.base_xyy, direction, self.params.max_radius());
            let max_distance = distance(self.base_xyy, max_point);

            let offset = sub(boundary, self.base_xyy);
            let normalized = length(offset) / max_distance;
            axes.push(scale(normalize(offset), normalized));
            boundary_colors.push(ColorValue::new(boundary, ColorFormat::XyY));
        }

        AxisEncoding::new(axes, boundary_colors)
    }
}

/// Pick the boundary point among one direction's responses.
///
/// Points are scanned nearest-first. The start is the first selected point;
/// the end is the last unselected point seen, which can lie beyond the
/// start. With no selections the farthest point wins, with no rejections
/// the nearest one does, and otherwise the midpoint of start and end.
fn boundary_point(points: &mut [([f64; 3], bool)], base: [f64; 3]) -> [f64; 3] {
    points.sort_by(|a, b| distance(a.0, base).total_cmp(&distance(b.0, base)));

    let mut start = None;
    let mut end = None;
    for &(point, was_selected) in points.iter() {
        if was_selected {
            if start.is_none() {
                start = Some(point);
            }
        } else {
            end = Some(point);
        }
    }

    match (start, end) {
        (None, _) => points[points.len() - 1].0,
        (Some(_), None) => points[0].0,
        (Some(start), Some(end)) => midpoint(start, end),
    }
}

impl BoundaryExperiment for Stage1Solo {
    fn base_color(&self) -> ColorValue {
        self.base
    }

    fn state(&self) -> ExperimentState {
        self.state
    }

    fn total_batches(&self) -> usize {
        self.params.total_batches()
    }

    fn next_batch(&mut self, selected: &[SampleColor], unselected: &[SampleColor]) -> Batch {
        assert!(
            self.state != ExperimentState::Resolved,
            "next_batch called on a resolved experiment"
        );

        self.selected.extend_from_slice(selected);
        self.unselected.extend_from_slice(unselected);

        let end = (self.cursor + self.params.batch_size).min(self.grid.len());
        let samples = self.grid[self.cursor..end].to_vec();
        self.cursor = end;

        let has_more = self.cursor < self.grid.len();
        self.state = if has_more {
            ExperimentState::InProgress
        } else {
            ExperimentState::Exhausted
        };

        tracing::debug!(
            delivered = samples.len(),
            cursor = self.cursor,
            selected = selected.len(),
            unselected = unselected.len(),
            has_more,
            "Served experiment batch"
        );

        Batch { samples, has_more }
    }

    fn resulting_colors(&mut self) -> AxisEncoding {
        if let Some(result) = &self.result {
            return result.clone();
        }

        if self.state != ExperimentState::Exhausted {
            tracing::warn!(
                state = ?self.state,
                cursor = self.cursor,
                "Resolving experiment before the grid was exhausted"
            );
        }

        let result = self.resolve();
        tracing::debug!(magnitudes = ?result.magnitudes(), "Resolved experiment");

        self.state = ExperimentState::Resolved;
        self.result = Some(result.clone());
        result
    }
}
