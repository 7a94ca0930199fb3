use crate::error::AppError;
use crate::models::AppConfig;
use color_boundary::{ColorFormat, ColorValue};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Colors read from a data file, all in one representation.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorData {
    pub colors: Vec<ColorValue>,
    pub format: ColorFormat,
}

/// Reads colors from a text file, one color per line.
///
/// Each trimmed line is split with a configurable regex and the first three
/// fields are taken as components. Lines with fewer than three fields are
/// skipped, and a field that is not a number reads as 0.
pub struct ColorDataLoader {
    path: PathBuf,
    split: Regex,
    format: ColorFormat,
}

impl ColorDataLoader {
    pub fn new(
        path: impl Into<PathBuf>,
        split_regex: &str,
        format: ColorFormat,
    ) -> Result<Self, AppError> {
        Ok(Self {
            path: path.into(),
            split: Regex::new(split_regex)?,
            format,
        })
    }

    /// A loader for the configured data file, or `None` when no file is set.
    pub fn from_config(config: &AppConfig) -> Result<Option<Self>, AppError> {
        config
            .color_data_file
            .as_ref()
            .map(|path| Self::new(path, &config.color_split_regex, config.data_format()?))
            .transpose()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole file.
    ///
    /// Any read error fails the load; there are no partial results.
    pub fn load(&self) -> Result<ColorData, AppError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            tracing::error!(path = %self.path.display(), %e, "Failed to read color data");
            AppError::ColorData(format!("{}: {e}", self.path.display()))
        })?;
        Ok(self.parse(&content))
    }

    /// Parse file content already in memory.
    ///
    /// 0–255 input is rescaled to 0–1 and tagged with the matching unit
    /// representation.
    pub fn parse(&self, content: &str) -> ColorData {
        let format = self.format.unit_scaled();
        let mut lines = 0usize;

        let colors: Vec<ColorValue> = content
            .lines()
            .inspect(|_| lines += 1)
            .filter_map(|line| {
                let fields: Vec<&str> = self.split.split(line.trim()).collect();
                if fields.len() < 3 {
                    return None;
                }
                let components = [
                    self.component(fields[0]),
                    self.component(fields[1]),
                    self.component(fields[2]),
                ];
                Some(ColorValue::new(components, format))
            })
            .collect();

        tracing::debug!(
            path = %self.path.display(),
            lines,
            colors = colors.len(),
            format = %format,
            "Loaded color data"
        );
        if let Some(first) = colors.first() {
            tracing::trace!(example = %first, "First color");
        }

        ColorData { colors, format }
    }

    fn component(&self, field: &str) -> f64 {
        let value = match field.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => return 0.0,
        };

        match self.format {
            ColorFormat::Srgb255 | ColorFormat::DisplayP3255 => value.clamp(0.0, 255.0) / 255.0,
            ColorFormat::Srgb01 | ColorFormat::DisplayP301 => value.clamp(0.0, 1.0),
            ColorFormat::Xyz | ColorFormat::XyY => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn loader(format: ColorFormat) -> ColorDataLoader {
        ColorDataLoader::new("inline.txt", r"\s+", format).unwrap()
    }

    #[test]
    fn test_byte_scaled_input_is_rescaled() {
        let data = loader(ColorFormat::Srgb255).parse("255 0 51\n300 -5 127.5\n");

        assert_eq!(data.format, ColorFormat::Srgb01);
        assert_eq!(data.colors[0].components, [1.0, 0.0, 0.2]);
        assert_eq!(data.colors[1].components, [1.0, 0.0, 0.5]);
        assert_eq!(data.colors[1].format, ColorFormat::Srgb01);
    }

    #[test]
    fn test_unit_input_is_clamped() {
        let data = loader(ColorFormat::DisplayP301).parse("1.5 -0.25 0.5");
        assert_eq!(data.colors[0].components, [1.0, 0.0, 0.5]);
        assert_eq!(data.format, ColorFormat::DisplayP301);
    }

    #[test]
    fn test_xyy_is_not_clamped() {
        let data = loader(ColorFormat::XyY).parse("0.3127 0.329 12.5");
        assert_eq!(data.colors[0].components, [0.3127, 0.329, 12.5]);
    }

    #[test]
    fn test_short_lines_skipped_and_bad_numbers_zeroed() {
        let content = "\n0.1 0.2\n0.1 abc 0.3 extra\n   \n";
        let data = loader(ColorFormat::Srgb01).parse(content);
        assert_eq!(data.colors.len(), 1);
        assert_eq!(data.colors[0].components, [0.1, 0.0, 0.3]);
    }

    #[test]
    fn test_custom_split_regex() {
        let loader = ColorDataLoader::new("inline.csv", r"\s*,\s*", ColorFormat::Srgb01).unwrap();
        let data = loader.parse("0.1, 0.2 ,0.3\n");
        assert_eq!(data.colors[0].components, [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_invalid_regex() {
        assert!(matches!(
            ColorDataLoader::new("x", "(", ColorFormat::Srgb01),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_fails_whole_load() {
        let loader =
            ColorDataLoader::new("/nonexistent/colors.txt", r"\s+", ColorFormat::Srgb01).unwrap();
        assert!(matches!(loader.load(), Err(AppError::ColorData(_))));
    }

    #[test]
    fn test_from_config_without_file() {
        let config = AppConfig::default();
        assert!(ColorDataLoader::from_config(&config).unwrap().is_none());
    }
}
