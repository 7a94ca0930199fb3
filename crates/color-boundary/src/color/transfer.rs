//! sRGB transfer function (IEC 61966-2-1)
//!
//! Display P3 shares this curve, so both RGB spaces use the same pair of
//! functions. Unlike a lookup table these accept values outside 0.0..=1.0:
//! the linear segment extends to negatives, which keeps intermediate
//! out-of-gamut values invertible until the final clamp.

/// Encoded value at or below which the curve is linear.
pub const ENCODED_THRESHOLD: f64 = 0.04045;

/// Linear value at or below which the curve is linear.
pub const LINEAR_THRESHOLD: f64 = 0.0031308;

const GAMMA: f64 = 2.4;

/// Gamma expansion: encoded signal to linear light.
#[inline]
pub fn expand(encoded: f64) -> f64 {
    if encoded <= ENCODED_THRESHOLD {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(GAMMA)
    }
}

/// Gamma compression: linear light to encoded signal.
#[inline]
pub fn compress(linear: f64) -> f64 {
    if linear <= LINEAR_THRESHOLD {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / GAMMA) - 0.055
    }
}

/// Apply [`expand`] to each component.
#[inline]
pub fn expand3(c: [f64; 3]) -> [f64; 3] {
    [expand(c[0]), expand(c[1]), expand(c[2])]
}

/// Apply [`compress`] to each component.
#[inline]
pub fn compress3(c: [f64; 3]) -> [f64; 3] {
    [compress(c[0]), compress(c[1]), compress(c[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_steps() -> impl Iterator<Item = f64> {
        (0..=100).map(|i| i as f64 / 100.0)
    }

    #[test]
    fn test_known_values() {
        assert_eq!(expand(0.0), 0.0);
        assert!((expand(1.0) - 1.0).abs() < 1e-12);
        // ((0.5 + 0.055) / 1.055)^2.4 = 0.214041...
        assert!((expand(0.5) - 0.214041).abs() < 1e-6);
        // 1.055 * 0.5^(1/2.4) - 0.055 = 0.735356...
        assert!((compress(0.5) - 0.735356).abs() < 1e-6);
    }

    #[test]
    fn test_expand_is_monotonic() {
        let values: Vec<f64> = unit_steps().map(expand).collect();
        for pair in values.windows(2) {
            assert!(pair[1] >= pair[0], "expand not monotonic: {:?}", pair);
        }
    }

    #[test]
    fn test_compress_is_monotonic() {
        let values: Vec<f64> = unit_steps().map(compress).collect();
        for pair in values.windows(2) {
            assert!(pair[1] >= pair[0], "compress not monotonic: {:?}", pair);
        }
    }

    #[test]
    fn test_compress_inverts_expand() {
        for c in unit_steps() {
            let back = compress(expand(c));
            assert!((back - c).abs() < 1e-9, "{c} -> {back}");
        }
    }

    #[test]
    fn test_segments_meet_at_threshold() {
        // Both branches agree at the breakpoint to well below display precision
        let linear_side = ENCODED_THRESHOLD / 12.92;
        let curve_side = ((ENCODED_THRESHOLD + 0.055) / 1.055).powf(2.4);
        assert!((linear_side - curve_side).abs() < 1e-6);
        assert!((expand(ENCODED_THRESHOLD) - LINEAR_THRESHOLD).abs() < 1e-6);
    }

    #[test]
    fn test_negative_values_stay_invertible() {
        let c = -0.02;
        assert!((compress(expand(c)) - c).abs() < 1e-12);
    }
}
