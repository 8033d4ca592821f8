//! Monte Carlo estimation of seed-loss probability.
//!
//! Each trial places a plant uniformly inside the habitat polygon (bounded
//! rejection sampling over its bounding box), displaces one seed with the
//! dispersal kernel, and classifies the landing point with the polygon
//! containment test. Trials are independent, so the loop is embarrassingly
//! parallel: callers can shard trial counts across workers with independent
//! rng streams and sum the lost/total counts.
use glam::DVec2;
use rand::{Rng, RngCore};
use tracing::{debug, warn};

use crate::dispersal::DispersalKernel;
use crate::error::{Error, Result};
use crate::habitat::{Aabb, Polygon};

/// Configuration for a Monte Carlo run.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialConfig {
    /// Number of plant points to process.
    pub trials: u64,
    /// Upper bound on bounding-box draws when rejection-sampling one interior
    /// point. Exhausting it surfaces [`Error::SamplingExhausted`] instead of
    /// looping forever on pathologically thin polygons.
    pub max_placement_attempts: usize,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            trials: 1_000,
            max_placement_attempts: 10_000,
        }
    }
}

impl TrialConfig {
    /// Creates a new [`TrialConfig`] with the specified trial count.
    pub fn new(trials: u64) -> Self {
        Self {
            trials,
            ..Default::default()
        }
    }

    /// Sets the rejection-sampling attempt bound.
    pub fn with_max_placement_attempts(mut self, max_placement_attempts: usize) -> Self {
        self.max_placement_attempts = max_placement_attempts;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(Error::InvalidConfig("trials must be >= 1".into()));
        }
        if self.max_placement_attempts == 0 {
            return Err(Error::InvalidConfig(
                "max_placement_attempts must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

/// Outcome of a probability-mode run.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LossEstimate {
    /// Seeds that landed outside the habitat.
    pub lost: u64,
    /// Total trials processed.
    pub trials: u64,
}

impl LossEstimate {
    /// Estimated loss probability, `lost / trials`.
    pub fn probability(&self) -> f64 {
        self.lost as f64 / self.trials as f64
    }

    /// Statistical margin of error of the estimate, `sqrt(p(1-p)/n)`; the
    /// standard deviation of the average of `n` coin flips with
    /// probability `p`.
    pub fn standard_error(&self) -> f64 {
        let p = self.probability();
        (p * (1.0 - p) / self.trials as f64).sqrt()
    }
}

/// Estimator bound to a habitat polygon. Convenience wrapper over the free
/// functions below with an upfront config check.
pub struct LossEstimator<'a> {
    /// Trial configuration applied to this estimator.
    pub config: TrialConfig,
    /// Habitat polygon seeds are lost from.
    pub habitat: &'a Polygon,
}

impl<'a> LossEstimator<'a> {
    pub fn try_new(config: TrialConfig, habitat: &'a Polygon) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, habitat })
    }

    /// Estimated probability that a seed lands outside the habitat.
    pub fn estimate_probability(
        &self,
        kernel: &dyn DispersalKernel,
        rng: &mut impl RngCore,
    ) -> Result<LossEstimate> {
        estimate_probability(self.habitat, kernel, &self.config, rng)
    }

    /// Landing coordinates of every lost seed instead of the probability.
    pub fn sample_lost_landings(
        &self,
        kernel: &dyn DispersalKernel,
        rng: &mut impl RngCore,
    ) -> Result<Vec<DVec2>> {
        sample_lost_landings(self.habitat, kernel, &self.config, rng)
    }
}

/// Unbiased Monte Carlo estimate of the probability that a seed produced
/// inside `habitat` lands outside it under `kernel`.
pub fn estimate_probability(
    habitat: &Polygon,
    kernel: &dyn DispersalKernel,
    config: &TrialConfig,
    rng: &mut impl RngCore,
) -> Result<LossEstimate> {
    config.validate()?;
    let lost = run_trials(habitat, kernel, config, rng, None)?;
    let estimate = LossEstimate {
        lost,
        trials: config.trials,
    };
    debug!(
        trials = estimate.trials,
        lost = estimate.lost,
        probability = estimate.probability(),
        "monte carlo run finished"
    );
    Ok(estimate)
}

/// Landing coordinates of the lost seeds for the same trial loop as
/// [`estimate_probability`]: with equal seeds both operations consume the
/// identical rng stream, so the returned length equals the probability-mode
/// lost count.
pub fn sample_lost_landings(
    habitat: &Polygon,
    kernel: &dyn DispersalKernel,
    config: &TrialConfig,
    rng: &mut impl RngCore,
) -> Result<Vec<DVec2>> {
    config.validate()?;
    let mut landings = Vec::new();
    run_trials(habitat, kernel, config, rng, Some(&mut landings))?;
    Ok(landings)
}

fn run_trials(
    habitat: &Polygon,
    kernel: &dyn DispersalKernel,
    config: &TrialConfig,
    rng: &mut impl RngCore,
    mut lost_landings: Option<&mut Vec<DVec2>>,
) -> Result<u64> {
    let bbox = habitat.bounding_box();
    let mut lost = 0u64;
    for _ in 0..config.trials {
        let plant = sample_in_bbox(habitat, &bbox, config.max_placement_attempts, rng)?;
        let landing = plant + kernel.displacement(rng);
        if !habitat.contains(landing)? {
            lost += 1;
            if let Some(out) = lost_landings.as_deref_mut() {
                out.push(landing);
            }
        }
    }
    Ok(lost)
}

/// Draw one point uniformly distributed over the interior of `habitat` by
/// rejection sampling its bounding box.
///
/// Acceptance probability per draw is the habitat area divided by the box
/// area, so thin or sparse shapes burn attempts fast; after `max_attempts`
/// misses the loop gives up with [`Error::SamplingExhausted`].
pub fn sample_point_in_polygon(
    habitat: &Polygon,
    max_attempts: usize,
    rng: &mut impl RngCore,
) -> Result<DVec2> {
    let bbox = habitat.bounding_box();
    sample_in_bbox(habitat, &bbox, max_attempts, rng)
}

fn sample_in_bbox(
    habitat: &Polygon,
    bbox: &Aabb,
    max_attempts: usize,
    rng: &mut impl RngCore,
) -> Result<DVec2> {
    for _ in 0..max_attempts {
        let candidate = DVec2::new(
            rng.random_range(bbox.min.x..=bbox.max.x),
            rng.random_range(bbox.min.y..=bbox.max.y),
        );
        if habitat.contains(candidate)? {
            return Ok(candidate);
        }
    }
    warn!(
        max_attempts,
        bbox_area = bbox.area(),
        habitat_area = habitat.area(),
        "interior rejection sampling exhausted"
    );
    Err(Error::SamplingExhausted {
        attempts: max_attempts,
    })
}

/// Analytic upper bound on the loss probability for an isotropic kernel with
/// mean dispersal distance `mean_distance`: `u * perimeter / (pi * area)`.
pub fn symmetric_loss_bound(mean_distance: f64, habitat: &Polygon) -> f64 {
    mean_distance * habitat.perimeter() / (std::f64::consts::PI * habitat.area())
}

/// Analytic upper bound for a biased kernel: `u * perimeter / (2 * area)`.
pub fn biased_loss_bound(mean_distance: f64, habitat: &Polygon) -> f64 {
    mean_distance * habitat.perimeter() / (2.0 * habitat.area())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::dispersal::WaldKernel;

    fn square10() -> Polygon {
        Polygon::new(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
        ])
        .unwrap()
    }

    /// Habitat traced from the McKnight Prairie satellite image (meters);
    /// long and thin, so loss probabilities are non-trivial at scale 1.
    fn prairie() -> Polygon {
        let verts = [
            [75.0, 142.0],
            [77.0, 160.0],
            [77.0, 305.0],
            [869.0, 291.0],
            [872.0, 122.0],
            [840.0, 108.0],
            [810.0, 100.0],
            [780.0, 101.0],
            [737.0, 118.0],
            [690.0, 128.0],
            [507.0, 125.0],
            [308.0, 132.0],
            [110.0, 131.0],
        ];
        Polygon::new(verts.iter().map(|v| DVec2::new(v[0], v[1])).collect()).unwrap()
    }

    #[test]
    fn zero_trials_fails_fast() {
        let habitat = square10();
        let kernel = WaldKernel::new(3.0, 2.5).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let err =
            estimate_probability(&habitat, &kernel, &TrialConfig::new(0), &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        assert!(LossEstimator::try_new(TrialConfig::new(0), &habitat).is_err());
    }

    #[test]
    fn always_east_kernel_loses_every_seed() {
        let habitat = square10();
        let east = |_: &mut dyn RngCore| DVec2::new(20.0, 0.0);
        let mut rng = StdRng::seed_from_u64(2);

        let estimate =
            estimate_probability(&habitat, &east, &TrialConfig::new(500), &mut rng).unwrap();
        assert_eq!(estimate.probability(), 1.0);
        assert_eq!(estimate.lost, 500);
        assert_eq!(estimate.standard_error(), 0.0);
    }

    #[test]
    fn zero_kernel_loses_nothing() {
        let habitat = square10();
        let stay = |_: &mut dyn RngCore| DVec2::ZERO;
        let mut rng = StdRng::seed_from_u64(3);

        let estimate =
            estimate_probability(&habitat, &stay, &TrialConfig::new(500), &mut rng).unwrap();
        assert_eq!(estimate.probability(), 0.0);
        assert_eq!(estimate.standard_error(), 0.0);
    }

    #[test]
    fn estimates_are_reproducible_under_seeding() {
        let habitat = prairie();
        let kernel = WaldKernel::new(16.73, 2.5).unwrap();
        let config = TrialConfig::new(2_000);

        let mut rng_a = StdRng::seed_from_u64(555);
        let mut rng_b = StdRng::seed_from_u64(555);
        let a = estimate_probability(&habitat, &kernel, &config, &mut rng_a).unwrap();
        let b = estimate_probability(&habitat, &kernel, &config, &mut rng_b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn raw_mode_matches_probability_mode_on_the_same_stream() {
        let habitat = prairie();
        let kernel = WaldKernel::biased(16.73, 2.5, 10f64.sqrt(), std::f64::consts::FRAC_PI_2)
            .unwrap();
        let config = TrialConfig::new(3_000);

        let mut rng_p = StdRng::seed_from_u64(99);
        let mut rng_r = StdRng::seed_from_u64(99);
        let estimate = estimate_probability(&habitat, &kernel, &config, &mut rng_p).unwrap();
        let landings = sample_lost_landings(&habitat, &kernel, &config, &mut rng_r).unwrap();

        assert_eq!(landings.len() as u64, estimate.lost);
        for landing in &landings {
            assert!(!habitat.contains(*landing).unwrap());
        }
    }

    #[test]
    fn loss_probability_decreases_with_habitat_scale() {
        let habitat = prairie();
        let kernel = WaldKernel::new(16.73, 2.5).unwrap();
        let config = TrialConfig::new(20_000);

        let mut previous = f64::INFINITY;
        for (i, scale) in [0.25, 1.0, 4.0].into_iter().enumerate() {
            let scaled = habitat.scaled(scale);
            let mut rng = StdRng::seed_from_u64(1_000 + i as u64);
            let p = estimate_probability(&scaled, &kernel, &config, &mut rng)
                .unwrap()
                .probability();
            assert!(p < previous, "p = {p} did not drop at scale {scale}");
            previous = p;
        }
    }

    #[test]
    fn estimate_stays_under_the_analytic_bound() {
        let habitat = prairie();
        let u = 16.73;
        let kernel = WaldKernel::new(u, 2.5).unwrap();
        let mut rng = StdRng::seed_from_u64(4);

        let p = estimate_probability(&habitat, &kernel, &TrialConfig::new(20_000), &mut rng)
            .unwrap()
            .probability();
        assert!(p < symmetric_loss_bound(u, &habitat));
        assert!(symmetric_loss_bound(u, &habitat) < biased_loss_bound(u, &habitat));
    }

    #[test]
    fn bound_formulas_on_a_square() {
        let habitat = square10();
        // area 100, perimeter 40.
        let sym = symmetric_loss_bound(2.0, &habitat);
        assert!((sym - 2.0 * 40.0 / (std::f64::consts::PI * 100.0)).abs() < 1e-12);
        let asym = biased_loss_bound(2.0, &habitat);
        assert!((asym - 0.4).abs() < 1e-12);
    }

    #[test]
    fn interior_sampling_stays_inside_the_polygon() {
        let habitat = prairie();
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..2_000 {
            let p = sample_point_in_polygon(&habitat, 10_000, &mut rng).unwrap();
            assert!(habitat.contains(p).unwrap());
            assert!(habitat.bounding_box().contains(p));
        }
    }

    #[test]
    fn sliver_polygon_exhausts_placement_attempts() {
        // Diagonal sliver: bounding box 100x100, area ~5e-5, so the
        // acceptance rate is ~5e-9 per draw.
        let sliver = Polygon::new(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(100.0, 100.0),
            DVec2::new(100.0 + 1e-6, 100.0),
        ])
        .unwrap();
        let stay = |_: &mut dyn RngCore| DVec2::ZERO;
        let config = TrialConfig::new(1).with_max_placement_attempts(50);
        let mut rng = StdRng::seed_from_u64(5);

        let err = estimate_probability(&sliver, &stay, &config, &mut rng).unwrap_err();
        assert!(matches!(err, Error::SamplingExhausted { attempts: 50 }));
    }

    #[test]
    fn invalid_geometry_propagates_out_of_the_trial_loop() {
        // Star polygon that winds twice around its center.
        let star = Polygon::new(
            (0..5)
                .map(|i| {
                    let angle = std::f64::consts::FRAC_PI_2
                        + i as f64 * 4.0 * std::f64::consts::PI / 5.0;
                    DVec2::new(angle.cos(), angle.sin())
                })
                .collect(),
        )
        .unwrap();
        let stay = |_: &mut dyn RngCore| DVec2::ZERO;
        let mut rng = StdRng::seed_from_u64(6);

        let result = estimate_probability(&star, &stay, &TrialConfig::new(200), &mut rng);
        assert!(matches!(result, Err(Error::InvalidGeometry { .. })));
    }

    #[test]
    fn estimator_struct_delegates_to_the_free_functions() {
        let habitat = square10();
        let east = |_: &mut dyn RngCore| DVec2::new(20.0, 0.0);
        let estimator = LossEstimator::try_new(TrialConfig::new(100), &habitat).unwrap();

        let mut rng = StdRng::seed_from_u64(12);
        let estimate = estimator.estimate_probability(&east, &mut rng).unwrap();
        assert_eq!(estimate.probability(), 1.0);

        let mut rng = StdRng::seed_from_u64(12);
        let landings = estimator.sample_lost_landings(&east, &mut rng).unwrap();
        assert_eq!(landings.len(), 100);
    }
}
