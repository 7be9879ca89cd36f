use rayon::prelude::*;
use std::panic::{catch_unwind, AssertUnwindSafe};

use super::CountFn;
use crate::monte_carlo::{EstimateError, WorkerTask};

/// Run every task on a dedicated rayon pool with one thread per worker.
///
/// A panicking task is reported as `WorkerPanicked` with the lowest
/// panicked worker index, after every task has finished.
pub fn run_workers_rayon(tasks: &[WorkerTask], kernel: CountFn) -> Result<u64, EstimateError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(tasks.len().max(1))
        .thread_name(|i| format!("mc-rayon-{}", i))
        .build()
        .map_err(|e| EstimateError::WorkerStart(e.to_string()))?;

    let counts: Vec<Result<u64, EstimateError>> = pool.install(|| {
        tasks
            .par_iter()
            .map(|task| {
                catch_unwind(AssertUnwindSafe(|| task.run(kernel)))
                    .map_err(|_| EstimateError::WorkerPanicked(task.worker_index))
            })
            .collect()
    });

    counts.into_iter().sum()
}
