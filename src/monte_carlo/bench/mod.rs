//! Benchmark closures for the sampling kernels and parallel strategies.

use super::code::{available_kernels, available_strategies, count_inside_original};
use super::{default_worker_count, worker_tasks};
use crate::random::Xoshiro256StarStar;
use crate::utils::timer::Variant;

/// One closure per kernel; each execution samples `size` points from a
/// fresh generator and reports the resulting π estimate.
pub fn kernel_variants(size: usize, seed: u64) -> Vec<Variant<'static>> {
    if size == 0 {
        return Vec::new();
    }
    let samples = size as u64;

    available_kernels()
        .into_iter()
        .map(|v| {
            let kernel = v.function;
            Variant {
                name: v.name,
                description: v.description,
                pinnable: true,
                run: Box::new(move || {
                    let mut rng = Xoshiro256StarStar::new(seed);
                    let (elapsed, inside) = crate::measure!(kernel(&mut rng, samples));
                    (elapsed, Some(4.0 * inside as f64 / samples as f64))
                }),
            }
        })
        .collect()
}

/// One closure per parallel strategy, all using the reference kernel and
/// the default worker count.
pub fn strategy_variants(size: usize, seed: u64) -> Vec<Variant<'static>> {
    let workers = default_worker_count();
    let tasks = match worker_tasks(size as u64, workers, seed) {
        Ok(tasks) => tasks,
        Err(e) => {
            log::warn!("skipping parallel benchmark at size {}: {}", size, e);
            return Vec::new();
        }
    };
    let sampled: u64 = tasks.iter().map(|t| t.samples).sum();

    available_strategies()
        .into_iter()
        .map(|v| {
            let (name, strategy) = (v.name, v.function);
            let tasks = tasks.clone();
            Variant {
                name,
                description: v.description,
                pinnable: false,
                run: Box::new(move || {
                    let (elapsed, outcome) =
                        crate::measure!(strategy(&tasks, count_inside_original));
                    let estimate = match outcome {
                        Ok(inside) => Some(4.0 * inside as f64 / sampled as f64),
                        Err(e) => {
                            log::error!("strategy {} failed: {}", name, e);
                            None
                        }
                    };
                    (elapsed, estimate)
                }),
            }
        })
        .collect()
}
