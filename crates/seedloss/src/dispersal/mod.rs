//! Stochastic dispersal kernels producing random 2D displacement vectors.
//!
//! This module defines the [`DispersalKernel`] trait consumed by the
//! estimator, plus the Wald (inverse-Gaussian) kernel used for wind-borne
//! seeds.
use glam::DVec2;
use rand::RngCore;

pub mod wald;

pub use wald::WaldKernel;

/// Trait for dispersal kernels.
///
/// A kernel is stateless across draws: each call yields one fresh
/// displacement `(dx, dy)` in meters from the configured distribution.
pub trait DispersalKernel: Send + Sync {
    fn displacement(&self, rng: &mut dyn RngCore) -> DVec2;
}

/// Closures work as kernels, which keeps deterministic test doubles and
/// one-off driver kernels cheap to write.
impl<F> DispersalKernel for F
where
    F: Fn(&mut dyn RngCore) -> DVec2 + Send + Sync,
{
    fn displacement(&self, rng: &mut dyn RngCore) -> DVec2 {
        self(rng)
    }
}
