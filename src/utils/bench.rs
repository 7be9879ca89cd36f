//! Shared benchmark utilities.
//!
//! Common functions used by all benchmark modules.

use crate::random::Xoshiro256StarStar;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::Duration;

/// Time an expression, returning `(elapsed, value)`.
///
/// The value goes through `black_box` so the work is not optimized away.
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = ::std::time::Instant::now();
        let value = ::std::hint::black_box($e);
        (start.elapsed(), value)
    }};
}

/// Calculate standard deviation from a list of durations
pub fn calculate_std_dev(times: &[Duration], mean: Duration) -> Duration {
    if times.len() < 2 {
        return Duration::ZERO;
    }

    let mean_ns = mean.as_nanos() as f64;
    let variance: f64 = times
        .iter()
        .map(|t| {
            let diff = t.as_nanos() as f64 - mean_ns;
            diff * diff
        })
        .sum::<f64>()
        / (times.len() - 1) as f64;

    Duration::from_nanos(variance.sqrt() as u64)
}

/// Shuffle a slice with a generator seeded from `seed`.
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    slice.shuffle(&mut rng);
}

/// Fresh seed for randomizing a schedule when none was requested.
pub fn time_seed() -> u64 {
    rand::random()
}

/// Compute (average, minimum, maximum, std-dev) from a list of durations.
pub fn compute_stats(times: &[Duration]) -> (Duration, Duration, Duration, Duration) {
    let (Some(&min), Some(&max)) = (times.iter().min(), times.iter().max()) else {
        return (
            Duration::ZERO,
            Duration::ZERO,
            Duration::ZERO,
            Duration::ZERO,
        );
    };

    let total: Duration = times.iter().sum();
    let avg = total / times.len() as u32;
    let std_dev = calculate_std_dev(times, avg);

    (avg, min, max, std_dev)
}

/// Sampling throughput in points per second.
pub fn samples_per_second(samples: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        samples as f64 / secs
    } else {
        0.0
    }
}
