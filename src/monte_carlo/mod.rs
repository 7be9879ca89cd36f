//! # Monte Carlo π Estimation
//!
//! Sample points uniformly in the unit square and count those inside the
//! quarter circle `x² + y² <= 1`. The fraction inside approaches π/4.
//!
//! ## Parallel runs
//!
//! Iterations are split evenly across workers (the remainder is dropped).
//! Worker `i` seeds its own generator with
//! `base_seed + i * 0x9E3779B97F4A7C15`, so streams are disjoint without
//! any coordination, and worker 0 reproduces the single-threaded stream.
//! Counts are summed after all workers join.

pub mod bench;
pub mod code;
mod error;
mod estimator;
#[cfg(test)]
mod test;

pub use error::EstimateError;
pub use estimator::{
    default_worker_count, derive_worker_seed, estimate_pi, estimate_pi_parallel,
    estimate_pi_parallel_with, estimate_pi_with, worker_tasks, EstimationResult, WorkerTask,
    DEFAULT_ITERATIONS, DEFAULT_SEED, PI_THEORETICAL, SEED_MULTIPLIER,
};

use crate::random::Xoshiro256StarStar;
use crate::registry::AlgorithmRunner;
use crate::utils::timer::Variant;

/// Seeds and sample count every kernel is checked against. The sample count
/// is not a multiple of any block size.
const VERIFY_SEEDS: [u64; 3] = [DEFAULT_SEED, 1, 0xdeadbeef];
const VERIFY_SAMPLES: u64 = 100_003;

/// Runner for the sampling kernels (single worker)
pub struct MonteCarloRunner;

impl AlgorithmRunner for MonteCarloRunner {
    fn name(&self) -> &'static str {
        "monte_carlo"
    }

    fn description(&self) -> &'static str {
        "Single-threaded Monte Carlo estimation of pi"
    }

    fn category(&self) -> &'static str {
        "estimation"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_kernels().iter().map(|v| v.name).collect()
    }

    fn variants(&self, size: usize, seed: u64) -> Vec<Variant<'static>> {
        bench::kernel_variants(size, seed)
    }

    fn verify(&self) -> Result<(), String> {
        let kernels = code::available_kernels();
        let original = crate::utils::find_variant(&kernels, "original")
            .ok_or("No 'original' kernel found for reference")?;

        for seed in VERIFY_SEEDS {
            let mut reference_rng = Xoshiro256StarStar::new(seed);
            let expected = (original.function)(&mut reference_rng, VERIFY_SAMPLES);

            for kernel in &kernels {
                let mut rng = Xoshiro256StarStar::new(seed);
                let got = (kernel.function)(&mut rng, VERIFY_SAMPLES);
                if got != expected {
                    return Err(format!(
                        "Kernel '{}' failed verification for seed {}. Expected {} inside, got {}",
                        kernel.name, seed, expected, got
                    ));
                }
                if rng != reference_rng {
                    return Err(format!(
                        "Kernel '{}' consumed the stream differently for seed {}",
                        kernel.name, seed
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Runner for the parallel worker strategies
pub struct MonteCarloParallelRunner;

impl AlgorithmRunner for MonteCarloParallelRunner {
    fn name(&self) -> &'static str {
        "monte_carlo_parallel"
    }

    fn description(&self) -> &'static str {
        "Parallel Monte Carlo estimation of pi with per-worker streams"
    }

    fn category(&self) -> &'static str {
        "estimation"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_strategies().iter().map(|v| v.name).collect()
    }

    fn variants(&self, size: usize, seed: u64) -> Vec<Variant<'static>> {
        bench::strategy_variants(size, seed)
    }

    fn verify(&self) -> Result<(), String> {
        let single = estimate_pi(VERIFY_SAMPLES, DEFAULT_SEED).map_err(|e| e.to_string())?;

        for strategy in code::available_strategies() {
            for workers in [1u32, 3, 4] {
                let tasks =
                    worker_tasks(VERIFY_SAMPLES, workers, DEFAULT_SEED).map_err(|e| e.to_string())?;
                let expected: u64 = tasks
                    .iter()
                    .map(|t| t.run(code::count_inside_original))
                    .sum();

                let got = (strategy.function)(&tasks, code::count_inside_original)
                    .map_err(|e| format!("Strategy '{}' failed: {}", strategy.name, e))?;
                if got != expected {
                    return Err(format!(
                        "Strategy '{}' with {} workers: expected {} inside, got {}",
                        strategy.name, workers, expected, got
                    ));
                }
                if workers == 1 && got != single.inside {
                    return Err(format!(
                        "Strategy '{}' with one worker diverges from the single-threaded run",
                        strategy.name
                    ));
                }
            }
        }

        Ok(())
    }
}
