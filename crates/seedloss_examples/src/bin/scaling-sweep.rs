use std::f64::consts::{FRAC_PI_2, PI};

use rand::rngs::StdRng;
use rand::SeedableRng;
use seedloss::prelude::*;
use seedloss_examples::{
    init_tracing, mcknight_prairie, mean_dispersal_distance, MILKWEED_SHAPE, NORTH_BIAS,
};

const SCALES: [f64; 11] = [
    1.0 / 32.0,
    1.0 / 16.0,
    1.0 / 8.0,
    1.0 / 4.0,
    1.0 / 2.0,
    1.0,
    2.0,
    4.0,
    8.0,
    16.0,
    32.0,
];

/// Loss probability across scaled-up and scaled-down copies of the habitat,
/// for an isotropic kernel and three wind directions, tabulated against the
/// area-to-perimeter ratio and both analytic bounds.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let habitat = mcknight_prairie();
    let u = mean_dispersal_distance();
    let l = MILKWEED_SHAPE;

    let kernels = [
        ("sym", WaldKernel::new(u, l)?),
        ("N", WaldKernel::biased(u, l, NORTH_BIAS, FRAC_PI_2)?),
        ("W", WaldKernel::biased(u, l, NORTH_BIAS, 0.0)?),
        ("SE", WaldKernel::biased(u, l, NORTH_BIAS, -3.0 * PI / 4.0)?),
    ];

    let config = TrialConfig::new(1_000_000);
    let mut rng = StdRng::seed_from_u64(404);

    println!(
        "{:>10} {:>12} {:>9} {:>9} {:>9} {:>9} {:>11} {:>11}",
        "scale", "area/perim", "p_sym%", "p_N%", "p_W%", "p_SE%", "bound_sym%", "bound_asym%"
    );
    for scale in SCALES {
        let scaled = habitat.scaled(scale);
        let ratio = scaled.area() / scaled.perimeter();

        let mut probabilities = Vec::with_capacity(kernels.len());
        for (_, kernel) in &kernels {
            let estimate = estimate_probability(&scaled, kernel, &config, &mut rng)?;
            probabilities.push(100.0 * estimate.probability());
        }

        println!(
            "{:>10.5} {:>12.3} {:>9.4} {:>9.4} {:>9.4} {:>9.4} {:>11.4} {:>11.4}",
            scale,
            ratio,
            probabilities[0],
            probabilities[1],
            probabilities[2],
            probabilities[3],
            100.0 * symmetric_loss_bound(u, &scaled),
            100.0 * biased_loss_bound(u, &scaled),
        );
    }

    Ok(())
}
