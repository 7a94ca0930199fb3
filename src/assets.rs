//! Embedded default configuration
//!
//! The binary ships a `config.yaml` with the target colors and experiment
//! settings. Resolution order:
//!
//! - If `CONFIG_FILE` is NOT set: use the embedded config (no filesystem access)
//! - If `CONFIG_FILE` IS set and the file is missing: fall back to embedded
//! - If `CONFIG_FILE` IS set and the file exists: use it

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CONFIG_NAME: &str = "config.yaml";

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Embedded,
    File(PathBuf),
    /// `CONFIG_FILE` points at a path that does not exist
    Missing(PathBuf),
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Config loader with optional filesystem override
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Paths should be `Some` only if `CONFIG_FILE` was set.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Build a loader from the `CONFIG_FILE` environment variable.
    pub fn from_env() -> Self {
        Self::new(std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    pub fn config_source(&self) -> ConfigSource {
        match self.config_file {
            Some(ref path) if path.exists() => ConfigSource::File(path.clone()),
            Some(ref path) => ConfigSource::Missing(path.clone()),
            None => ConfigSource::Embedded,
        }
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        Self::embedded_config()
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn embedded_config() -> io::Result<Cow<'static, [u8]>> {
        EmbeddedConfig::get(CONFIG_NAME)
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Write the embedded config to disk (init command)
    ///
    /// Uses the configured path, or `./config.yaml` if none is set. An
    /// existing file is left alone unless `force` is given.
    pub fn init(&self, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();
        let path = self
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("./config.yaml"));

        if !force && path.exists() {
            report.skipped.push(path.display().to_string());
            return Ok(report);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = Self::embedded_config()?;
        fs::write(&path, &*data)?;
        tracing::info!(path = %path.display(), "Wrote embedded config");
        report.written.push(path.display().to_string());

        Ok(report)
    }

    /// List embedded assets (for display)
    pub fn list_embedded() -> Vec<String> {
        EmbeddedConfig::iter().map(|s| s.to_string()).collect()
    }
}
