use color_boundary::{ColorValue, ParseColorError};
use serde::{Deserialize, Serialize};

/// A named base color an experiment is run around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetColor {
    pub name: String,
    /// sRGB hex, `#RRGGBB`
    pub hex: String,
}

impl TargetColor {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }

    pub fn color(&self) -> Result<ColorValue, ParseColorError> {
        self.hex.parse()
    }
}

/// The built-in target set: low-saturation hues, neutrals, primaries and
/// skin tones, as 8-bit sRGB.
pub const DEFAULT_TARGETS: [(&str, [u8; 3]); 23] = [
    ("Low Sat. Red", [210, 121, 117]),
    ("Low Sat. Yellow", [216, 179, 90]),
    ("Low Sat. Green", [127, 175, 120]),
    ("Low Sat. Cyan", [66, 157, 179]),
    ("Low Sat. Blue", [116, 147, 194]),
    ("Low Sat. Magenta", [190, 121, 154]),
    ("Card White", [249, 242, 238]),
    ("40% Gray", [161, 157, 154]),
    ("Card Black", [43, 41, 43]),
    ("Primary Magenta", [192, 75, 145]),
    ("Primary Yellow", [245, 205, 0]),
    ("Primary Red", [186, 26, 51]),
    ("Primary Green", [57, 146, 64]),
    ("Primary Blue", [25, 55, 135]),
    ("Primary Orange", [222, 118, 32]),
    ("Pink", [195, 79, 95]),
    ("Violet", [83, 58, 106]),
    ("Sunflower", [238, 158, 25]),
    ("Aqua", [98, 187, 166]),
    ("Lavender", [126, 125, 174]),
    ("Evergreen", [82, 106, 60]),
    ("Classic Light Skin", [197, 145, 125]),
    ("Classic Dark Skin", [112, 76, 60]),
];

pub fn default_targets() -> Vec<TargetColor> {
    DEFAULT_TARGETS
        .iter()
        .map(|(name, [r, g, b])| TargetColor::new(*name, format!("#{r:02X}{g:02X}{b:02X}")))
        .collect()
}
