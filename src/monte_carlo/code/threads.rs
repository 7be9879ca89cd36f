//! One scoped OS thread per worker.

use log::debug;
use std::thread;

use super::CountFn;
use crate::monte_carlo::{EstimateError, WorkerTask};
use crate::utils::cpu_affinity::{online_cores, CpuPinGuard};

pub fn run_workers_threads(tasks: &[WorkerTask], kernel: CountFn) -> Result<u64, EstimateError> {
    spawn_and_join(tasks, kernel, false)
}

/// Same as [`run_workers_threads`], with worker `i` pinned to core `i % cores`.
pub fn run_workers_threads_pinned(
    tasks: &[WorkerTask],
    kernel: CountFn,
) -> Result<u64, EstimateError> {
    spawn_and_join(tasks, kernel, true)
}

fn spawn_and_join(tasks: &[WorkerTask], kernel: CountFn, pin: bool) -> Result<u64, EstimateError> {
    let cores = online_cores().unwrap_or(1).max(1);

    thread::scope(|scope| -> Result<u64, EstimateError> {
        let mut handles = Vec::with_capacity(tasks.len());
        let mut spawn_error = None;

        for &task in tasks {
            let spawned = thread::Builder::new()
                .name(format!("mc-worker-{}", task.worker_index))
                .spawn_scoped(scope, move || {
                    let _pin =
                        pin.then(|| CpuPinGuard::with_core(task.worker_index as usize % cores));
                    task.run(kernel)
                });

            match spawned {
                Ok(handle) => {
                    debug!(
                        "worker {} started: {} samples, seed {:#x}",
                        task.worker_index, task.samples, task.seed
                    );
                    handles.push((task.worker_index, handle));
                }
                Err(e) => {
                    spawn_error = Some(EstimateError::WorkerStart(e.to_string()));
                    break;
                }
            }
        }

        // Every handle is joined before reporting, so a panic never escapes the scope.
        let joined = handles
            .into_iter()
            .map(|(index, handle)| (index, handle.join()))
            .collect::<Vec<_>>();
        combine_joined(joined, spawn_error)
    })
}

/// Sum joined worker counts. A spawn failure takes precedence over panics,
/// and among panics the first worker in spawn order is reported.
fn combine_joined(
    joined: Vec<(u32, thread::Result<u64>)>,
    spawn_error: Option<EstimateError>,
) -> Result<u64, EstimateError> {
    let mut total = 0u64;
    let mut first_panic = None;
    for (index, outcome) in joined {
        match outcome {
            Ok(inside) => {
                debug!("worker {} joined: {} inside", index, inside);
                total += inside;
            }
            Err(_) => {
                first_panic.get_or_insert(index);
            }
        }
    }

    if let Some(e) = spawn_error {
        return Err(e);
    }
    match first_panic {
        Some(index) => Err(EstimateError::WorkerPanicked(index)),
        None => Ok(total),
    }
}
