use crate::error::AppError;
use crate::models::{AppConfig, ObserverConfig};
use color_boundary::{AxisEncoding, BoundaryExperiment, ColorFormat, ColorValue, SampleColor};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A stand-in for a human chooser.
///
/// A sample is selected (seen as different from the base) when its xy
/// chromaticity distance from the base exceeds the threshold. With `noise`
/// set, every decision draws a fresh threshold offset from
/// `-noise..=noise`, seeded so runs are reproducible.
pub struct SimulatedObserver {
    base_xyy: [f64; 3],
    threshold: f64,
    noise: f64,
    rng: StdRng,
}

impl SimulatedObserver {
    pub fn new(base: ColorValue, config: ObserverConfig, seed: u64) -> Self {
        let config = config.sanitized();
        Self {
            base_xyy: base.convert(ColorFormat::XyY).components,
            threshold: config.threshold,
            noise: config.noise,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Chromaticity distance of a sample from the base.
    pub fn distance(&self, sample: &SampleColor) -> f64 {
        let p = sample.xyy();
        (p[0] - self.base_xyy[0]).hypot(p[1] - self.base_xyy[1])
    }

    pub fn notices(&mut self, sample: &SampleColor) -> bool {
        let jitter = if self.noise > 0.0 {
            self.rng.gen_range(-self.noise..=self.noise)
        } else {
            0.0
        };
        self.distance(sample) > self.threshold + jitter
    }

    /// Split a batch into (selected, unselected).
    pub fn respond(&mut self, samples: &[SampleColor]) -> (Vec<SampleColor>, Vec<SampleColor>) {
        let mut selected = Vec::new();
        let mut unselected = Vec::new();
        for sample in samples {
            if self.notices(sample) {
                selected.push(*sample);
            } else {
                unselected.push(*sample);
            }
        }
        (selected, unselected)
    }
}

/// Play the whole batch protocol against `observer` and resolve.
///
/// Responses to each batch are handed over on the following call, so the
/// loop ends on the empty batch that carries the final responses.
pub fn run_experiment(
    experiment: &mut dyn BoundaryExperiment,
    observer: &mut SimulatedObserver,
) -> AxisEncoding {
    let mut selected = Vec::new();
    let mut unselected = Vec::new();
    let mut round = 0usize;

    loop {
        let batch = experiment.next_batch(&selected, &unselected);
        if batch.samples.is_empty() {
            break;
        }
        round += 1;
        (selected, unselected) = observer.respond(&batch.samples);
        tracing::debug!(
            round,
            total = experiment.total_batches(),
            selected = selected.len(),
            unselected = unselected.len(),
            "Answered batch"
        );
    }

    experiment.resulting_colors()
}

/// Result of running one configured target.
#[derive(Debug, Clone)]
pub struct TargetRun {
    pub index: usize,
    pub name: String,
    pub base: ColorValue,
    pub encoding: AxisEncoding,
}

/// Run the configured experiment against every target color.
///
/// Each target gets its own observer, seeded with `random_seed + index`.
pub fn run_all(config: &AppConfig) -> Result<Vec<TargetRun>, AppError> {
    let kind = config.experiment_kind()?;
    let bases = config.targets()?;

    Ok(config
        .target_colors
        .iter()
        .zip(bases)
        .enumerate()
        .map(|(index, (target, base))| {
            let seed = config.random_seed.wrapping_add(index as u64);
            let mut observer = SimulatedObserver::new(base, config.observer, seed);
            let mut experiment = kind.begin(base);
            let encoding = run_experiment(experiment.as_mut(), &mut observer);
            tracing::info!(target = %target.name, index, "Experiment resolved");
            TargetRun {
                index,
                name: target.name.clone(),
                base,
                encoding,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_boundary::{ExperimentState, PolarGridParams, Stage1Solo};

    fn observer(threshold: f64, noise: f64) -> SimulatedObserver {
        SimulatedObserver::new(
            ColorValue::xyy(0.3, 0.3, 0.5),
            ObserverConfig { threshold, noise },
            42,
        )
    }

    #[test]
    fn test_threshold_splits_rings() {
        let mut experiment = Stage1Solo::new(ColorValue::xyy(0.3, 0.3, 0.5));
        let mut observer = observer(0.004, 0.0);
        let encoding = run_experiment(&mut experiment, &mut observer);

        assert_eq!(experiment.state(), ExperimentState::Resolved);
        // Rings 2 (0.0031) and 3 (0.0044) straddle the threshold
        let params = PolarGridParams::STAGE1_SOLO;
        let expected = (params.radius(2) + params.radius(3)) / 2.0 / params.max_radius();
        for magnitude in encoding.magnitudes() {
            assert!((magnitude - expected).abs() < 1e-9, "{magnitude} vs {expected}");
        }
    }

    #[test]
    fn test_blind_observer_hits_outer_ring() {
        let mut experiment = Stage1Solo::new(ColorValue::xyy(0.3, 0.3, 0.5));
        let mut observer = observer(1.0, 0.0);
        let encoding = run_experiment(&mut experiment, &mut observer);

        let params = PolarGridParams::STAGE1_SOLO;
        let expected = params.radius(params.rings - 1) / params.max_radius();
        for magnitude in encoding.magnitudes() {
            assert!((magnitude - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_noise_is_seeded() {
        let samples = Stage1Solo::new(ColorValue::xyy(0.3, 0.3, 0.5)).grid().to_vec();
        let first = observer(0.004, 0.002).respond(&samples);
        let second = observer(0.004, 0.002).respond(&samples);
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_finite_noise_answers_without_jitter() {
        let samples = Stage1Solo::new(ColorValue::xyy(0.3, 0.3, 0.5)).grid().to_vec();
        let steady = observer(0.004, 0.0).respond(&samples);
        assert_eq!(observer(0.004, f64::NAN).respond(&samples), steady);
        assert_eq!(observer(0.004, f64::INFINITY).respond(&samples), steady);
        assert_eq!(observer(f64::NAN, f64::NEG_INFINITY).respond(&samples), steady);
    }

    #[test]
    fn test_respond_partitions_everything() {
        let samples = Stage1Solo::new(ColorValue::xyy(0.3, 0.3, 0.5)).grid().to_vec();
        let (selected, unselected) = observer(0.004, 0.0).respond(&samples);
        assert_eq!(selected.len() + unselected.len(), samples.len());
        // Rings 3, 4 and 5 in all eight directions
        assert_eq!(selected.len(), 24);
    }

    #[test]
    fn test_run_all_covers_every_target() {
        let config = AppConfig::default();
        let runs = run_all(&config).unwrap();
        assert_eq!(runs.len(), config.target_colors.len());
        for run in &runs {
            assert_eq!(run.encoding.len(), 8, "{}", run.name);
            assert!(run.encoding.is_finite(), "{}", run.name);
        }
    }
}
