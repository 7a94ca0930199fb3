//! The conversion pipeline
//!
//! Every conversion goes through CIE XYZ in a fixed order:
//!
//! ```text
//! source triple
//!     |  normalize        (÷255 for 0–255 formats)
//!     |  gamma expand     (RGB formats only)
//!     v
//!    XYZ                  (RGB matrix, xyY formula, or passthrough)
//!     |  gamma compress   (RGB destinations only)
//!     |  denormalize      (×255 for 0–255 formats)
//!     v
//!   clamp                 (per destination range)
//! ```
//!
//! Nothing in here can fail: degenerate inputs (`y == 0` for xyY, a zero
//! XYZ sum) map to defined fallback values.

use super::format::ColorFormat;
use super::matrix::{
    DISPLAY_P3_TO_XYZ, SRGB_TO_XYZ, XYZ_TO_DISPLAY_P3, XYZ_TO_SRGB,
};
use super::transfer::{compress3, expand3};
use super::value::ColorValue;

/// Convert `value` into `target`, returning a new color.
///
/// Converting into the value's own format still runs the clamp, so an
/// out-of-range input comes back inside the valid range.
pub fn convert(value: ColorValue, target: ColorFormat) -> ColorValue {
    let source = value.format;
    let xyz = to_xyz(value.components, source);
    let components = clamp(from_xyz(xyz, target), target);
    ColorValue::new(components, target)
}

/// Steps 1–3: bring a triple in `source` format into XYZ.
pub fn to_xyz(components: [f64; 3], source: ColorFormat) -> [f64; 3] {
    let unit = if source.is_byte_scaled() {
        [components[0] / 255.0, components[1] / 255.0, components[2] / 255.0]
    } else {
        components
    };

    match source {
        ColorFormat::Srgb01 | ColorFormat::Srgb255 => SRGB_TO_XYZ.apply(expand3(unit)),
        ColorFormat::DisplayP301 | ColorFormat::DisplayP3255 => {
            DISPLAY_P3_TO_XYZ.apply(expand3(unit))
        }
        ColorFormat::Xyz => unit,
        ColorFormat::XyY => xyy_to_xyz(unit),
    }
}

/// Steps 4–6: take XYZ into the `target` format (before clamping).
pub fn from_xyz(xyz: [f64; 3], target: ColorFormat) -> [f64; 3] {
    let unit = match target {
        ColorFormat::Srgb01 | ColorFormat::Srgb255 => compress3(XYZ_TO_SRGB.apply(xyz)),
        ColorFormat::DisplayP301 | ColorFormat::DisplayP3255 => {
            compress3(XYZ_TO_DISPLAY_P3.apply(xyz))
        }
        ColorFormat::Xyz => xyz,
        ColorFormat::XyY => xyz_to_xyy(xyz),
    };

    if target.is_byte_scaled() {
        [unit[0] * 255.0, unit[1] * 255.0, unit[2] * 255.0]
    } else {
        unit
    }
}

/// Step 7: clamp to the destination's valid range.
pub fn clamp(c: [f64; 3], target: ColorFormat) -> [f64; 3] {
    match target {
        ColorFormat::Srgb01 | ColorFormat::DisplayP301 => {
            [c[0].clamp(0.0, 1.0), c[1].clamp(0.0, 1.0), c[2].clamp(0.0, 1.0)]
        }
        ColorFormat::Srgb255 | ColorFormat::DisplayP3255 => [
            c[0].clamp(0.0, 255.0),
            c[1].clamp(0.0, 255.0),
            c[2].clamp(0.0, 255.0),
        ],
        ColorFormat::Xyz => [c[0].max(0.0), c[1].max(0.0), c[2].max(0.0)],
        ColorFormat::XyY => [c[0].clamp(0.0, 1.0), c[1].clamp(0.0, 1.0), c[2].max(0.0)],
    }
}

/// xyY → XYZ. A zero `y` yields the zero vector.
#[inline]
pub fn xyy_to_xyz(xyy: [f64; 3]) -> [f64; 3] {
    let [x, y, luminance] = xyy;
    if y == 0.0 {
        return [0.0; 3];
    }
    [x * luminance / y, luminance, (1.0 - x - y) * luminance / y]
}

/// XYZ → xyY. A zero component sum yields `(0, 0, Y)`.
#[inline]
pub fn xyz_to_xyy(xyz: [f64; 3]) -> [f64; 3] {
    let [x, y, z] = xyz;
    let sum = x + y + z;
    if sum == 0.0 {
        return [0.0, 0.0, y];
    }
    [x / sum, y / sum, y]
}
