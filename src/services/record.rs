//! Result record serialization
//!
//! A resolved experiment is stored as a single space-separated line: one
//! `RRGGBBAA` hex color per direction, then one `(x; y; z)` axis per
//! direction. Because each axis contains two spaces it spans three
//! whitespace-separated chunks, so a record for `n` directions has `4n`
//! chunks in total.

use crate::error::{AppError, RecordError};
use chrono::{DateTime, Utc};
use color_boundary::{AxisEncoding, ColorFormat, ColorValue};
use serde::Serialize;

/// Event name the record is logged under.
pub const RECORD_EVENT: &str = "finalcolors";

pub fn format_record(encoding: &AxisEncoding) -> String {
    let colors = encoding.boundary_colors.iter().map(ColorValue::to_hex_rgba);
    let axes = encoding
        .axes
        .iter()
        .map(|[x, y, z]| format!("({x}; {y}; {z})"));

    colors.chain(axes).collect::<Vec<_>>().join(" ")
}

/// The record as a logged event line: `finalcolors <record>`.
pub fn format_event(encoding: &AxisEncoding) -> String {
    format!("{RECORD_EVENT} {}", format_record(encoding))
}

/// Parse a record written by [`format_record`] or [`format_event`].
///
/// Boundary colors come back as sRGB ([`ColorFormat::Srgb01`]), quantized to
/// 8 bits per channel.
pub fn parse_record(line: &str, directions: usize) -> Result<AxisEncoding, RecordError> {
    let mut chunks: Vec<&str> = line.split_whitespace().collect();
    if chunks.first() == Some(&RECORD_EVENT) {
        chunks.remove(0);
    }
    let expected = directions * 4;
    if chunks.len() != expected {
        return Err(RecordError::FieldCount {
            expected,
            found: chunks.len(),
        });
    }

    let (hex, axis_chunks) = chunks.split_at(directions);

    let boundary_colors = hex
        .iter()
        .enumerate()
        .map(|(index, h)| {
            h.parse::<ColorValue>()
                .map_err(|e| RecordError::InvalidColor {
                    index,
                    message: e.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let axes = axis_chunks
        .chunks(3)
        .enumerate()
        .map(|(index, parts)| parse_axis(index, &parts.concat()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AxisEncoding::new(axes, boundary_colors))
}

fn parse_axis(index: usize, joined: &str) -> Result<[f64; 3], RecordError> {
    let invalid = || RecordError::InvalidAxis {
        index,
        value: joined.to_string(),
    };

    let inner = joined
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(invalid)?;

    let mut components = [0.0; 3];
    let mut parts = inner.split(';');
    for slot in &mut components {
        *slot = parts
            .next()
            .and_then(|p| p.trim().parse::<f64>().ok())
            .ok_or_else(invalid)?;
    }
    if parts.next().is_some() {
        return Err(invalid());
    }

    Ok(components)
}

/// One direction of a resolved experiment, flattened for reporting.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DirectionReport {
    pub index: usize,
    pub axis: [f64; 3],
    pub magnitude: f64,
    pub boundary_hex: String,
    /// Boundary color in xyY, serialized with its representation tag
    pub boundary: ColorValue,
}

/// Summary of a finished experiment, as printed by `colorcrush run --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub experiment: String,
    pub target: String,
    pub base_hex: String,
    pub base_xyy: [f64; 3],
    pub completed_at: DateTime<Utc>,
    pub directions: Vec<DirectionReport>,
    pub record: String,
}

impl ExperimentReport {
    pub fn new(
        experiment: &str,
        target: &str,
        base: ColorValue,
        encoding: &AxisEncoding,
    ) -> Self {
        let directions = encoding
            .axes
            .iter()
            .zip(&encoding.boundary_colors)
            .zip(encoding.magnitudes())
            .enumerate()
            .map(|(index, ((axis, color), magnitude))| DirectionReport {
                index,
                axis: *axis,
                magnitude,
                boundary_hex: color.to_hex_rgba(),
                boundary: color.convert(ColorFormat::XyY),
            })
            .collect();

        Self {
            experiment: experiment.to_string(),
            target: target.to_string(),
            base_hex: base.to_hex_rgba(),
            base_xyy: base.convert(ColorFormat::XyY).components,
            completed_at: Utc::now(),
            directions,
            record: format_record(encoding),
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Record(RecordError::Json(e.to_string())))
    }
}
