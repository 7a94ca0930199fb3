use crate::assets::AssetLoader;
use crate::error::AppError;
use crate::models::target::{default_targets, TargetColor};
use color_boundary::{ColorFormat, ColorValue, ExperimentKind};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Seed for every random draw (simulated observer noise)
    #[serde(default = "default_seed")]
    pub random_seed: u64,

    /// Experiment strategy, resolved through [`ExperimentKind`]
    #[serde(default = "default_experiment_name")]
    pub color_experiment_name: String,

    /// Optional text file of colors, one per line
    #[serde(default)]
    pub color_data_file: Option<PathBuf>,

    /// Regular expression separating the fields of a color data line
    #[serde(default = "default_split_regex")]
    pub color_split_regex: String,

    /// Representation of the values in the color data file
    #[serde(default = "default_data_format")]
    pub color_data_format: String,

    /// Base colors experiments are run around
    #[serde(default = "default_targets")]
    pub target_colors: Vec<TargetColor>,

    #[serde(default)]
    pub observer: ObserverConfig,
}

fn default_seed() -> u64 {
    42
}

fn default_experiment_name() -> String {
    ExperimentKind::default().name().to_string()
}

fn default_split_regex() -> String {
    r"\s+".to_string()
}

fn default_data_format() -> String {
    ColorFormat::Srgb01.name().to_string()
}

/// Settings for the simulated chooser
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    /// xy distance beyond which a sample counts as noticeably different
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Half-width of the uniform jitter applied to the threshold per sample
    #[serde(default)]
    pub noise: f64,
}

fn default_threshold() -> f64 {
    0.004
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            noise: 0.0,
        }
    }
}

impl ObserverConfig {
    /// Replace non-finite values: a NaN or infinite threshold falls back to
    /// the default, a NaN or infinite noise disables jitter.
    pub fn sanitized(self) -> Self {
        let threshold = if self.threshold.is_finite() {
            self.threshold
        } else {
            tracing::warn!(threshold = self.threshold, "Non-finite observer threshold, using default");
            default_threshold()
        };
        let noise = if self.noise.is_finite() {
            self.noise.abs()
        } else {
            tracing::warn!(noise = self.noise, "Non-finite observer noise, disabling jitter");
            0.0
        };
        Self { threshold, noise }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        targets = config.target_colors.len(),
                        experiment = %config.color_experiment_name,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        let mut config: Self =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        config.observer = config.observer.sanitized();
        Ok(config)
    }

    pub fn experiment_kind(&self) -> Result<ExperimentKind, AppError> {
        Ok(self.color_experiment_name.parse()?)
    }

    pub fn data_format(&self) -> Result<ColorFormat, AppError> {
        Ok(self.color_data_format.parse()?)
    }

    /// All target colors, parsed.
    pub fn targets(&self) -> Result<Vec<ColorValue>, AppError> {
        self.target_colors
            .iter()
            .map(|t| {
                t.color()
                    .map_err(|e| AppError::Color(format!("target {:?}: {e}", t.name)))
            })
            .collect()
    }

    /// Resolve a CLI target argument: a zero-based index into
    /// `target_colors`, a target name (case-insensitive), or a hex color.
    pub fn resolve_target(&self, arg: &str) -> Result<ColorValue, AppError> {
        let arg = arg.trim();
        if let Ok(index) = arg.parse::<usize>() {
            let target = self.target_colors.get(index).ok_or_else(|| {
                AppError::Color(format!(
                    "target index {index} out of range (have {})",
                    self.target_colors.len()
                ))
            })?;
            return Ok(target.color()?);
        }

        if let Some(target) = self
            .target_colors
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(arg))
        {
            return Ok(target.color()?);
        }

        Ok(arg.parse()?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            random_seed: default_seed(),
            color_experiment_name: default_experiment_name(),
            color_data_file: None,
            color_split_regex: default_split_regex(),
            color_data_format: default_data_format(),
            target_colors: default_targets(),
            observer: ObserverConfig::default(),
        }
    }
}
