#![forbid(unsafe_code)]

mod rendering;
mod scenario;

pub use rendering::{render_habitat_to_png, RenderConfig};
pub use scenario::{
    mcknight_prairie, mean_dispersal_distance, scale_bar, MILKWEED_SHAPE, NORTH_BIAS,
    RELEASE_HEIGHT, TERMINAL_VELOCITY, WINDSPEED,
};

/// Install a fmt tracing subscriber honoring `RUST_LOG`. Safe to call more
/// than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
