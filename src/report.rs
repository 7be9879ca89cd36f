//! The record a harness-facing binary prints after one run.
//!
//! Fields the external harness measures itself (memory, cache misses, lines
//! of code, SIMD detection, CPU model) are emitted with neutral values.

use serde::Serialize;
use std::time::Duration;

use crate::monte_carlo::EstimationResult;

/// Execution mode of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Single,
    Parallel,
}

/// One run, as consumed by the benchmark harness.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub language: &'static str,
    pub variant: String,
    pub version: &'static str,
    pub mode: Mode,
    /// Iterations requested on the command line.
    pub iterations: u64,
    /// Points actually sampled.
    pub effective_iterations: u64,
    pub pi_estimate: f64,
    pub error: f64,
    pub time_ms: f64,
    pub memory_mb: f64,
    pub cache_misses: u64,
    pub lines_of_code: u64,
    pub compiler_flags: &'static str,
    pub cpu_model: &'static str,
    pub cpu_cores: usize,
    pub thread_count: u32,
    pub os: &'static str,
    pub os_version: &'static str,
    pub compiler: &'static str,
    pub simd_detected: bool,
    pub simd_instructions: Vec<String>,
}

/// Flags of the release profile the binaries are built with.
const COMPILER_FLAGS: &str = "-C opt-level=3 -C lto=fat -C codegen-units=1";

impl RunReport {
    pub fn new(
        mode: Mode,
        variant: impl Into<String>,
        requested_iterations: u64,
        result: &EstimationResult,
        elapsed: Duration,
        thread_count: u32,
    ) -> Self {
        Self {
            language: "Rust",
            variant: variant.into(),
            version: option_env!("MC_RUSTC_VERSION").unwrap_or("unknown"),
            mode,
            iterations: requested_iterations,
            effective_iterations: result.iterations,
            pi_estimate: result.pi_estimate,
            error: result.error,
            time_ms: elapsed.as_secs_f64() * 1000.0,
            memory_mb: 0.0,
            cache_misses: 0,
            lines_of_code: 0,
            compiler_flags: COMPILER_FLAGS,
            cpu_model: "N/A",
            cpu_cores: crate::utils::cpu_affinity::online_cores().unwrap_or(1),
            thread_count,
            os: std::env::consts::OS,
            os_version: "N/A",
            compiler: "rustc",
            simd_detected: false,
            simd_instructions: Vec::new(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monte_carlo::estimate_pi;

    const REQUIRED_KEYS: [&str; 20] = [
        "language",
        "variant",
        "version",
        "mode",
        "iterations",
        "effective_iterations",
        "pi_estimate",
        "error",
        "time_ms",
        "memory_mb",
        "cache_misses",
        "lines_of_code",
        "compiler_flags",
        "cpu_model",
        "cpu_cores",
        "thread_count",
        "os",
        "os_version",
        "compiler",
        "simd_detected",
    ];

    #[test]
    fn test_report_has_harness_keys() {
        let result = estimate_pi(1000, 12345).unwrap();
        let report = RunReport::new(
            Mode::Single,
            "standard",
            1000,
            &result,
            Duration::from_secs(3),
            1,
        );
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        for key in REQUIRED_KEYS {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(value["language"], "Rust");
        assert_eq!(value["mode"], "single");
        assert_eq!(value["iterations"], 1000);
        assert_eq!(value["pi_estimate"], 3.152);
        assert_eq!(value["time_ms"], 3000.0);
        assert_eq!(value["thread_count"], 1);
        assert_eq!(value["simd_instructions"], serde_json::json!([]));
    }

    #[test]
    fn test_parallel_mode_reports_effective_iterations() {
        let result = crate::monte_carlo::estimate_pi_parallel(1000, 3, 12345).unwrap();
        let report = RunReport::new(Mode::Parallel, "threads", 1000, &result, Duration::ZERO, 3);
        let value: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["mode"], "parallel");
        assert_eq!(value["iterations"], 1000);
        assert_eq!(value["effective_iterations"], 999);
        assert_eq!(value["thread_count"], 3);
    }
}
