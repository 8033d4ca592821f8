use std::f64::consts::FRAC_PI_2;

use rand::rngs::StdRng;
use rand::SeedableRng;
use seedloss::prelude::*;
use seedloss_examples::{
    init_tracing, mcknight_prairie, mean_dispersal_distance, render_habitat_to_png, scale_bar,
    MILKWEED_SHAPE, NORTH_BIAS, RenderConfig,
};

/// Render where lost seeds land around the habitat outline, for the
/// north-biased milkweed kernel, with a 100 m scale bar.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let habitat = mcknight_prairie();
    let u = mean_dispersal_distance();
    let kernel = WaldKernel::biased(u, MILKWEED_SHAPE, NORTH_BIAS, FRAC_PI_2)?;

    let mut rng = StdRng::seed_from_u64(7);
    let lost = sample_lost_landings(&habitat, &kernel, &TrialConfig::new(20_000), &mut rng)?;
    println!("lost {} of 20000 seeds", lost.len());

    // 50 m on the original satellite image spanned 128 px.
    let meters_per_pixel = 50.0 / 128.0;
    let config = RenderConfig::new((2432, 1024), meters_per_pixel);

    let bar = scale_bar();
    let out = "lost-seeds-overlay.png";
    render_habitat_to_png(&[&habitat, &bar], &lost, &config, out)?;
    println!("wrote {out}");

    Ok(())
}
