//! Test fixtures and constants.

use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Target indices into the default config
pub mod targets {
    pub const LOW_SAT_RED: usize = 0;
    pub const CARD_WHITE: usize = 6;
    pub const CARD_BLACK: usize = 8;
    pub const PRIMARY_BLUE: usize = 13;
}

/// A minimal config with two targets and a sharp observer
pub const SMALL_CONFIG: &str = r##"
random_seed: 7
color_experiment_name: ColorExperiment8x6Stage1Solo
color_split_regex: '\s*,\s*'
color_data_format: srgb_0_255
observer:
  threshold: 0.004
target_colors:
  - { name: Ink, hex: "#193787" }
  - { name: Paper, hex: "#F9F2EE" }
"##;

/// Comma-separated 0-255 sRGB, with one short and one empty line
pub const COLOR_DATA_CSV: &str = "255, 0, 0\n0,255,0\n\n12, 34\n0, 0, 255\n";

/// Write `content` into a fresh temp dir and return (dir, file path).
///
/// Keep the `TempDir` alive for as long as the file is needed.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    (dir, path)
}
