//! Colorcrush
//!
//! Perceptual color-boundary experiments driven from the command line.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;
