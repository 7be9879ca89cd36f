//! Monte Carlo π implementations.
//!
//! Two axes of variants: sampling kernels (how one worker counts its
//! points) and parallel strategies (how workers are scheduled). Every
//! kernel consumes the generator stream in the same order, so all of them
//! produce identical counts for the same seed.

mod batched;
mod branchless;
pub mod c_impl;
mod original;
mod rayon_pool;
mod threads;

pub use batched::count_inside_batched;
pub use branchless::count_inside_branchless;
pub use c_impl::count_inside_c_wrapper;
pub use original::count_inside_original;
pub use rayon_pool::run_workers_rayon;
pub use threads::{run_workers_threads, run_workers_threads_pinned};

use super::{EstimateError, WorkerTask};
use crate::random::Xoshiro256StarStar;
use crate::utils::{find_variant, VariantInfo};

/// Counts points inside the unit circle over `samples` draws.
pub type CountFn = fn(&mut Xoshiro256StarStar, u64) -> u64;

/// Runs every worker task to completion and returns the summed count.
pub type ParallelFn = fn(&[WorkerTask], CountFn) -> Result<u64, EstimateError>;

pub const DEFAULT_KERNEL: &str = "original";
pub const DEFAULT_STRATEGY: &str = "threads";

/// Inclusive boundary: points exactly on the unit circle count as inside.
#[inline(always)]
pub fn is_inside(x: f64, y: f64) -> bool {
    x * x + y * y <= 1.0
}

/// Get all available sampling kernels for this build
pub fn available_kernels() -> Vec<VariantInfo<CountFn>> {
    let mut variants: Vec<VariantInfo<CountFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Reference loop with a branch per sample",
            function: count_inside_original,
        },
        VariantInfo {
            name: "branchless",
            description: "Comparison result accumulated as an integer",
            function: count_inside_branchless,
        },
        VariantInfo {
            name: "batched",
            description: "Coordinates generated in blocks, then counted",
            function: count_inside_batched,
        },
    ];

    if c_impl::C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-original",
            description: "C sampling loop over the same generator state",
            function: count_inside_c_wrapper,
        });
    }

    variants
}

/// Get all parallel worker strategies
pub fn available_strategies() -> Vec<VariantInfo<ParallelFn>> {
    vec![
        VariantInfo {
            name: "threads",
            description: "One scoped OS thread per worker",
            function: run_workers_threads,
        },
        VariantInfo {
            name: "threads-pinned",
            description: "One OS thread per worker, each pinned to its own core",
            function: run_workers_threads_pinned,
        },
        VariantInfo {
            name: "rayon",
            description: "Dedicated rayon pool, one task per worker",
            function: run_workers_rayon,
        },
    ]
}

pub fn find_kernel(name: &str) -> Option<CountFn> {
    find_variant(&available_kernels(), name).map(|v| v.function)
}

pub fn find_strategy(name: &str) -> Option<ParallelFn> {
    find_variant(&available_strategies(), name).map(|v| v.function)
}
