pub mod config;
pub mod target;

pub use config::{AppConfig, ObserverConfig};
pub use target::{default_targets, TargetColor, DEFAULT_TARGETS};
