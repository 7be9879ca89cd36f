//! # Monte Carlo Pi
//!
//! Monte Carlo estimation of π on a deterministic Xoshiro256** generator,
//! single-threaded or across independent per-worker streams, with several
//! micro-optimized variants of the generator and the sampling loop.

pub mod config;
pub mod monte_carlo;
pub mod random;
pub mod registry;
pub mod report;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::monte_carlo::{
        estimate_pi, estimate_pi_parallel, EstimateError, EstimationResult, WorkerTask,
    };
    pub use crate::random::Xoshiro256StarStar;
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
}
