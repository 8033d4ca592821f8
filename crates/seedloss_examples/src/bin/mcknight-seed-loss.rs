use std::f64::consts::FRAC_PI_2;

use rand::rngs::StdRng;
use rand::SeedableRng;
use seedloss::prelude::*;
use seedloss_examples::{
    init_tracing, mcknight_prairie, mean_dispersal_distance, MILKWEED_SHAPE, NORTH_BIAS,
};

/// Seed-loss probabilities for common milkweed in McKnight Prairie, for an
/// isotropic kernel and a north-biased one, against the analytic bounds.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let habitat = mcknight_prairie();
    let u = mean_dispersal_distance();
    let l = MILKWEED_SHAPE;

    println!("Habitat area: {:.1} m^2", habitat.area());
    println!("Habitat perimeter: {:.1} m", habitat.perimeter());
    println!("Mean dispersal distance: {u:.2} m");
    println!("Shape parameter (lambda): {l:.2} m");

    let config = TrialConfig::new(1_000_000);
    let mut rng = StdRng::seed_from_u64(2025);

    let cases = [
        ("SYMMETRIC", WaldKernel::new(u, l)?, symmetric_loss_bound(u, &habitat)),
        (
            "ASYMMETRIC",
            WaldKernel::biased(u, l, NORTH_BIAS, FRAC_PI_2)?,
            biased_loss_bound(u, &habitat),
        ),
    ];

    for (name, kernel, bound) in cases {
        let estimate = estimate_probability(&habitat, &kernel, &config, &mut rng)?;
        println!("\n{name} CASE");
        println!(
            "p = {:.3}% within about {:.3}%",
            100.0 * estimate.probability(),
            100.0 * estimate.standard_error()
        );
        println!("Upper bound: {:.3}%", 100.0 * bound);
    }

    Ok(())
}
