//! Domain-critical regression tests for color-boundary.
//!
//! Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::color::{ColorFormat, ColorValue};
    use crate::experiment::{
        BoundaryExperiment, ExperimentKind, ExperimentState, PolarGridParams, SampleColor,
        Stage1Solo,
    };

    // ========================================================================
    // End-to-end: one direction rejected, every other direction unreported
    // ========================================================================

    /// If this breaks, it means: the batch protocol or the per-direction
    /// fallbacks changed. Direction 0 is fully rejected, so its boundary must
    /// come from the "nothing selected" rule and sit on the outermost ring.
    /// No other direction ever gets a response, so each collapses onto the
    /// base color instead of aborting the whole resolution.
    #[test]
    fn test_end_to_end_single_rejected_direction() {
        let base = ColorValue::xyy(0.3, 0.3, 0.5);
        let mut experiment = Stage1Solo::new(base);

        let first = experiment.next_batch(&[], &[]);
        assert_eq!(first.samples.len(), 12);
        let directions: Vec<i32> = first.samples.iter().map(SampleColor::direction_index).collect();
        assert_eq!(directions, vec![0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1]);
        assert!(first.has_more);

        let direction0: Vec<SampleColor> = first
            .samples
            .iter()
            .copied()
            .filter(|s| s.direction == Some(0))
            .collect();

        // Batch 2 comes back with direction 0 rejected, then silence
        let mut batch = experiment.next_batch(&[], &direction0);
        let mut calls = 2;
        while batch.has_more {
            batch = experiment.next_batch(&[], &[]);
            calls += 1;
        }
        assert_eq!(calls, 4);
        assert_eq!(experiment.state(), ExperimentState::Exhausted);

        let encoding = experiment.resulting_colors();
        assert_eq!(encoding.len(), 8);
        assert!(encoding.is_finite());

        let params = PolarGridParams::STAGE1_SOLO;
        let magnitudes = encoding.magnitudes();
        let farthest = params.radius(params.rings - 1) / params.max_radius();
        assert!((magnitudes[0] - farthest).abs() < 1e-9, "{magnitudes:?}");
        for magnitude in &magnitudes[1..] {
            assert_eq!(*magnitude, 0.0, "{magnitudes:?}");
        }
        for color in &encoding.boundary_colors {
            assert_eq!(color.format, ColorFormat::XyY);
        }
    }

    // ========================================================================
    // Order of accumulation must not matter
    // ========================================================================

    /// If this breaks, it means: the boundary depends on the order responses
    /// arrived in, rather than on distance from the base.
    #[test]
    fn test_response_order_does_not_matter() {
        let base = ColorValue::from_u8(190, 121, 154);
        let center = base.convert(ColorFormat::XyY).components;
        let chooser = |s: &SampleColor| {
            let p = s.xyy();
            ((p[0] - center[0]).powi(2) + (p[1] - center[1]).powi(2)).sqrt() > 0.0025
        };

        let mut forward = Stage1Solo::new(base);
        let (mut sel, mut unsel): (Vec<SampleColor>, Vec<SampleColor>) = (Vec::new(), Vec::new());
        loop {
            let batch = forward.next_batch(&sel, &unsel);
            if batch.samples.is_empty() {
                break;
            }
            (sel, unsel) = batch.samples.iter().copied().partition(chooser);
        }

        let mut reversed = Stage1Solo::new(base);
        let grid: Vec<SampleColor> = reversed.grid().iter().rev().copied().collect();
        while reversed.next_batch(&[], &[]).has_more {}
        let (all_sel, all_unsel): (Vec<SampleColor>, Vec<SampleColor>) =
            grid.into_iter().partition(chooser);
        reversed.next_batch(&all_sel, &all_unsel);

        assert_eq!(forward.resulting_colors(), reversed.resulting_colors());
    }

    // ========================================================================
    // Every target color resolves to a bounded encoding
    // ========================================================================

    /// If this breaks, it means: some realistic base color produces a
    /// degenerate grid (NaN chromaticity, boundary beyond the sampled disc).
    #[test]
    fn test_realistic_targets_stay_bounded() {
        let targets = [
            (210, 121, 117),
            (249, 242, 238),
            (43, 41, 43),
            (245, 205, 0),
            (25, 55, 135),
        ];
        for (r, g, b) in targets {
            let mut experiment = ExperimentKind::Stage1Solo.begin(ColorValue::from_u8(r, g, b));
            let mut previous = Vec::new();
            loop {
                let batch = experiment.next_batch(&[], &previous);
                if batch.samples.is_empty() {
                    break;
                }
                previous = batch.samples;
            }
            let encoding = experiment.resulting_colors();
            assert!(encoding.is_finite(), "({r}, {g}, {b})");
            for magnitude in encoding.magnitudes() {
                assert!((0.0..=1.0).contains(&magnitude), "({r}, {g}, {b}): {magnitude}");
            }
        }
    }

    // ========================================================================
    // Grid stimuli must be displayable
    // ========================================================================

    /// If this breaks, it means: grid points convert to NaN or out-of-range
    /// display values, which a renderer would show as garbage.
    #[test]
    fn test_grid_converts_to_display_p3() {
        let experiment = Stage1Solo::new(ColorValue::from_u8(161, 157, 154));
        for sample in experiment.grid() {
            let p3 = sample.color.convert(ColorFormat::DisplayP3255);
            for c in p3.components {
                assert!(c.is_finite() && (0.0..=255.0).contains(&c));
            }
        }
    }

    // ========================================================================
    // Gamut clamping is per destination
    // ========================================================================

    /// If this breaks, it means: clamping happened on an intermediate value,
    /// so a saturated sRGB color would lose chroma on its way into the wider
    /// Display P3 gamut.
    #[test]
    fn test_srgb_primary_fits_inside_p3() {
        let red = ColorValue::from_u8(255, 0, 0);
        let p3 = red.convert(ColorFormat::DisplayP301).components;
        // sRGB red is inside P3, so it must not land on the P3 primary
        assert!(p3[0] < 0.95, "{p3:?}");
        assert!(p3[1] > 0.1, "{p3:?}");
        let back = ColorValue::new(p3, ColorFormat::DisplayP301).convert(ColorFormat::Srgb01);
        assert!((back.components[0] - 1.0).abs() < 1e-4);
        assert!(back.components[1].abs() < 1e-4);
    }
}
