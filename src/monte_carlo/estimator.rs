//! Single-threaded and parallel π estimation.

use log::{debug, info, warn};
use serde::Serialize;

use super::code::{count_inside_original, run_workers_threads, CountFn, ParallelFn};
use super::error::EstimateError;
use crate::random::Xoshiro256StarStar;

/// Double-precision π, the reference every estimate is measured against.
pub const PI_THEORETICAL: f64 = std::f64::consts::PI;

/// 64-bit golden-ratio constant used as the stride between worker seeds.
pub const SEED_MULTIPLIER: u64 = 0x9E3779B97F4A7C15;

/// Iterations of a harness run when none are given.
pub const DEFAULT_ITERATIONS: u64 = 100_000_000;

/// Base seed of a harness run when none is given.
pub const DEFAULT_SEED: u64 = 12345;

/// Final output of one estimation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimationResult {
    pub pi_estimate: f64,
    /// `|pi_estimate - π|`
    pub error: f64,
    /// Points actually sampled. In parallel mode this drops the remainder of
    /// `iterations / worker_count`.
    pub iterations: u64,
    pub inside: u64,
}

impl EstimationResult {
    pub fn from_counts(inside: u64, iterations: u64) -> Result<Self, EstimateError> {
        if iterations == 0 {
            return Err(EstimateError::ZeroIterations);
        }
        let pi_estimate = 4.0 * inside as f64 / iterations as f64;
        Ok(Self {
            pi_estimate,
            error: (pi_estimate - PI_THEORETICAL).abs(),
            iterations,
            inside,
        })
    }
}

/// One worker's share of a run: its sample count and private seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerTask {
    pub samples: u64,
    pub worker_index: u32,
    pub seed: u64,
}

impl WorkerTask {
    pub fn new(samples: u64, worker_index: u32, base_seed: u64) -> Self {
        Self {
            samples,
            worker_index,
            seed: derive_worker_seed(base_seed, worker_index),
        }
    }

    /// Seed a private generator and count in-circle points.
    pub fn run(&self, kernel: CountFn) -> u64 {
        let mut rng = Xoshiro256StarStar::new(self.seed);
        if rng.is_degenerate() {
            warn!(
                "worker {} seed {:#x} mixes to the all-zero state; every sample lands at the origin",
                self.worker_index, self.seed
            );
        }
        kernel(&mut rng, self.samples)
    }
}

/// Seed of worker `worker_index`: `base_seed + worker_index * SEED_MULTIPLIER` (wrapping).
pub fn derive_worker_seed(base_seed: u64, worker_index: u32) -> u64 {
    base_seed.wrapping_add(u64::from(worker_index).wrapping_mul(SEED_MULTIPLIER))
}

/// Available hardware parallelism, or 1 when it cannot be queried.
pub fn default_worker_count() -> u32 {
    std::thread::available_parallelism()
        .map(|n| u32::try_from(n.get()).unwrap_or(u32::MAX))
        .unwrap_or(1)
}

/// Split `iterations` evenly across `worker_count` workers.
pub fn worker_tasks(
    iterations: u64,
    worker_count: u32,
    base_seed: u64,
) -> Result<Vec<WorkerTask>, EstimateError> {
    if iterations == 0 {
        return Err(EstimateError::ZeroIterations);
    }
    if worker_count == 0 {
        return Err(EstimateError::ZeroWorkers);
    }

    let per_worker = iterations / u64::from(worker_count);
    if per_worker == 0 {
        return Err(EstimateError::TooFewIterations {
            iterations,
            workers: worker_count,
        });
    }

    Ok((0..worker_count)
        .map(|i| WorkerTask::new(per_worker, i, base_seed))
        .collect())
}

/// Estimate π on one thread with the reference sampling loop.
///
/// ```
/// use monte_carlo_pi::monte_carlo::estimate_pi;
///
/// let result = estimate_pi(1000, 12345).unwrap();
/// assert_eq!(result.inside, 788);
/// assert_eq!(result.pi_estimate, 3.152);
/// ```
pub fn estimate_pi(iterations: u64, seed: u64) -> Result<EstimationResult, EstimateError> {
    estimate_pi_with(iterations, seed, count_inside_original)
}

/// Estimate π on one thread with a chosen sampling kernel.
pub fn estimate_pi_with(
    iterations: u64,
    seed: u64,
    kernel: CountFn,
) -> Result<EstimationResult, EstimateError> {
    if iterations == 0 {
        return Err(EstimateError::ZeroIterations);
    }

    let inside = WorkerTask::new(iterations, 0, seed).run(kernel);
    let result = EstimationResult::from_counts(inside, iterations)?;
    info!(
        "single run: {} samples, {} inside, pi ~ {:.9} (error {:.3e})",
        result.iterations, result.inside, result.pi_estimate, result.error
    );
    Ok(result)
}

/// Estimate π across `worker_count` OS threads with the reference kernel.
pub fn estimate_pi_parallel(
    iterations: u64,
    worker_count: u32,
    base_seed: u64,
) -> Result<EstimationResult, EstimateError> {
    estimate_pi_parallel_with(
        iterations,
        worker_count,
        base_seed,
        count_inside_original,
        run_workers_threads,
    )
}

/// Estimate π in parallel with a chosen kernel and worker strategy.
///
/// Workers share nothing; the only synchronization is the final join.
pub fn estimate_pi_parallel_with(
    iterations: u64,
    worker_count: u32,
    base_seed: u64,
    kernel: CountFn,
    strategy: ParallelFn,
) -> Result<EstimationResult, EstimateError> {
    let tasks = worker_tasks(iterations, worker_count, base_seed)?;
    let sampled: u64 = tasks.iter().map(|t| t.samples).sum();
    if sampled < iterations {
        debug!(
            "dropping {} of {} iterations not divisible across {} workers",
            iterations - sampled,
            iterations,
            worker_count
        );
    }

    let inside = strategy(&tasks, kernel)?;
    let result = EstimationResult::from_counts(inside, sampled)?;
    info!(
        "parallel run: {} workers, {} samples, {} inside, pi ~ {:.9} (error {:.3e})",
        worker_count, result.iterations, result.inside, result.pi_estimate, result.error
    );
    Ok(result)
}
