use color_boundary::{ParseColorError, ParseExperimentError, ParseFormatError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Color data error: {0}")]
    ColorData(String),

    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Color error: {0}")]
    Color(String),

    #[error("Experiment error: {0}")]
    Experiment(String),
}

impl From<ParseColorError> for AppError {
    fn from(e: ParseColorError) -> Self {
        AppError::Color(e.to_string())
    }
}

impl From<ParseFormatError> for AppError {
    fn from(e: ParseFormatError) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<ParseExperimentError> for AppError {
    fn from(e: ParseExperimentError) -> Self {
        AppError::Experiment(e.to_string())
    }
}

impl From<regex::Error> for AppError {
    fn from(e: regex::Error) -> Self {
        AppError::Config(format!("invalid split pattern: {e}"))
    }
}

/// Failures while reading a serialized result record.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("Expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("Invalid color at position {index}: {message}")]
    InvalidColor { index: usize, message: String },

    #[error("Invalid axis at position {index}: {value:?}")]
    InvalidAxis { index: usize, value: String },

    #[error("JSON error: {0}")]
    Json(String),
}
