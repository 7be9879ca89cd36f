//! Unified timing system for variant benchmarks.
//!
//! This module provides the single timing infrastructure with:
//! - Optional CPU core pinning for stable measurements
//! - Randomized variant execution to avoid ordering bias
//! - All raw measurements preserved for external analysis

use std::hint::black_box;
use std::time::Duration;

use super::bench::{shuffle, time_seed};
use super::cpu_affinity::CpuPinGuard;

// ============================================================================
// Configuration
// ============================================================================

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Never pin; parallel variants need every core
    None,
    /// Pin once before all measurements (minimal overhead)
    Global,
    /// Pin/unpin around each execution
    #[default]
    PerExecution,
}

impl PinStrategy {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Self::None),
            "global" => Some(Self::Global),
            "per-execution" => Some(Self::PerExecution),
            _ => None,
        }
    }
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 10)
    pub runs_per_variant: usize,
    /// Number of warmup executions before measurement (default: 2)
    pub warmup_iterations: usize,
    /// CPU pinning strategy (default: PerExecution)
    pub pin_strategy: PinStrategy,
    /// Seed for the execution schedule; `None` draws a fresh one
    pub schedule_seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 10,
            warmup_iterations: 2,
            pin_strategy: PinStrategy::default(),
            schedule_seed: None,
        }
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    /// Unique name of the variant
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Whether the variant may be confined to one core (false for parallel variants)
    pub pinnable: bool,
    /// The function to benchmark - returns (elapsed, optional result value).
    /// Timing happens inside the closure to eliminate Fn trait overhead.
    pub run: Box<dyn FnMut() -> (Duration, Option<f64>) + 'a>,
}

/// Result from measuring a single variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    /// Name of the variant
    pub name: String,
    /// Description of the variant
    pub description: String,
    /// Average measurement
    pub avg_time: Duration,
    /// Median measurement
    pub median_time: Duration,
    /// Minimum measurement
    pub min_time: Duration,
    /// Maximum measurement
    pub max_time: Duration,
    /// Standard deviation
    pub std_dev: Duration,
    /// Work items (samples / draws) performed per execution
    pub size: usize,
    /// Number of measured executions
    pub runs: usize,
    /// Sample result value (for verification)
    pub result_sample: Option<f64>,
}

/// Measure multiple variants with randomized execution order.
///
/// 1. Warms up all variants
/// 2. Creates a randomized task schedule
/// 3. Measures each variant, pinned according to `config`
/// 4. Returns results for all variants, in input order
pub fn measure_variants(
    mut variants: Vec<Variant>,
    size: usize,
    config: &TimingConfig,
) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    // (variant_idx, sample_idx)
    let mut tasks: Vec<(usize, usize)> = (0..variants.len())
        .flat_map(|v| (0..samples).map(move |s| (v, s)))
        .collect();
    shuffle(&mut tasks, config.schedule_seed.unwrap_or_else(time_seed));

    let mut measurements: Vec<Vec<Duration>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    let all_pinnable = variants.iter().all(|v| v.pinnable);
    let _global_pin =
        (config.pin_strategy == PinStrategy::Global && all_pinnable).then(CpuPinGuard::new);

    for (variant_idx, _) in tasks {
        let variant = &mut variants[variant_idx];
        let _per_exec_pin = (config.pin_strategy == PinStrategy::PerExecution && variant.pinnable)
            .then(CpuPinGuard::new);
        let (elapsed, result) = (variant.run)();

        measurements[variant_idx].push(elapsed);
        result_samples[variant_idx] = result;
    }

    variants
        .into_iter()
        .enumerate()
        .map(|(idx, variant)| {
            let times = std::mem::take(&mut measurements[idx]);
            compute_variant_result(
                variant.name,
                variant.description,
                times,
                size,
                result_samples[idx].take(),
            )
        })
        .collect()
}

/// Compute statistics from raw measurements
fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    times: Vec<Duration>,
    size: usize,
    result_sample: Option<f64>,
) -> VariantResult {
    let (avg, min, max, std_dev) = super::bench::compute_stats(&times);

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: avg,
        median_time: calculate_median(&times),
        min_time: min,
        max_time: max,
        std_dev,
        size,
        runs: times.len(),
        result_sample,
    }
}

/// Calculate median from a slice of durations.
pub fn calculate_median(times: &[Duration]) -> Duration {
    if times.is_empty() {
        return Duration::ZERO;
    }
    let mut sorted: Vec<_> = times.to_vec();
    sorted.sort();
    sorted[sorted.len() / 2]
}
