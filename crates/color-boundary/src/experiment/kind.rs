//! Experiments addressable by name

use std::fmt;
use std::str::FromStr;

use crate::color::ColorValue;

use super::error::ParseExperimentError;
use super::polar::Stage1Solo;
use super::BoundaryExperiment;

/// The experiment strategies that can be selected from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExperimentKind {
    /// 8 directions × 6 rings, single observer
    #[default]
    Stage1Solo,
}

impl ExperimentKind {
    pub const ALL: [ExperimentKind; 1] = [ExperimentKind::Stage1Solo];

    pub fn name(self) -> &'static str {
        match self {
            ExperimentKind::Stage1Solo => "8x6Stage1Solo",
        }
    }

    /// Start a fresh experiment of this kind around `base`.
    pub fn begin(self, base: ColorValue) -> Box<dyn BoundaryExperiment> {
        match self {
            ExperimentKind::Stage1Solo => Box::new(Stage1Solo::new(base)),
        }
    }
}

impl fmt::Display for ExperimentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExperimentKind {
    type Err = ParseExperimentError;

    /// Accepts `8x6Stage1Solo`, with or without a `ColorExperiment` prefix,
    /// and the snake-case alias `stage1_solo`. Case is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        let name = lower.strip_prefix("colorexperiment").unwrap_or(&lower);

        match name {
            "8x6stage1solo" | "stage1solo" | "stage1_solo" => Ok(ExperimentKind::Stage1Solo),
            _ => Err(ParseExperimentError::Unknown(trimmed.to_string())),
        }
    }
}
