use std::fmt;

/// Error type for looking up an experiment by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseExperimentError {
    /// No experiment is registered under this name
    Unknown(String),
}

impl fmt::Display for ParseExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseExperimentError::Unknown(name) => {
                write!(f, "unknown color experiment: {:?}", name)
            }
        }
    }
}

impl std::error::Error for ParseExperimentError {}
