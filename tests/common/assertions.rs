//! Assertion helpers for tests.

use color_boundary::AxisEncoding;

/// Assert every direction's normalized boundary lies in the sampled disc
pub fn assert_bounded(encoding: &AxisEncoding) {
    assert!(encoding.is_finite(), "non-finite encoding: {encoding:?}");
    for (index, magnitude) in encoding.magnitudes().iter().enumerate() {
        assert!(
            (0.0..=1.0).contains(magnitude),
            "direction {index} magnitude {magnitude} outside 0..=1"
        );
    }
}

/// Assert two triples agree within `tolerance` per component
pub fn assert_close(actual: [f64; 3], expected: [f64; 3], tolerance: f64) {
    for i in 0..3 {
        assert!(
            (actual[i] - expected[i]).abs() <= tolerance,
            "component {i}: {actual:?} vs {expected:?} (tolerance {tolerance})"
        );
    }
}
