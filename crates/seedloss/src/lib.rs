#![forbid(unsafe_code)]
//! seedloss: Monte Carlo estimation of seed loss from polygonal habitats.
//!
//! Modules:
//! - habitat: simple-polygon geometry (perimeter, shoelace area, crossing-number containment)
//! - dispersal: stochastic 2D dispersal kernels (Wald radial law, biased angular law)
//! - estimate: rejection sampling of interior plant points and loss-probability estimation
//!
//! All randomness flows through caller-supplied rng handles, so runs are
//! reproducible under seeding and trials can be sharded across independent
//! streams.
pub mod dispersal;
pub mod error;
pub mod estimate;
pub mod habitat;

/// Convenient re-exports for common types. Import with `use seedloss::prelude::*;`.
pub mod prelude {
    pub use crate::dispersal::wald::WaldKernel;
    pub use crate::dispersal::DispersalKernel;
    pub use crate::error::{Error, Result};
    pub use crate::estimate::{
        biased_loss_bound, estimate_probability, sample_lost_landings, sample_point_in_polygon,
        symmetric_loss_bound, LossEstimate, LossEstimator, TrialConfig,
    };
    pub use crate::habitat::{Aabb, Polygon};
}
