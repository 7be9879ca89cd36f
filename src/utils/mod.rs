//! Utility modules for benchmarking and execution.

pub mod bench;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use bench::{calculate_std_dev, compute_stats, shuffle, time_seed};
pub use cpu_affinity::CpuPinGuard;
pub use timer::{
    calculate_median, measure_variants, PinStrategy, TimingConfig, Variant, VariantResult,
};

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// Information about an algorithm implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "original", "branchless")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}

/// Look up a variant by name.
pub fn find_variant<'a, F>(variants: &'a [VariantInfo<F>], name: &str) -> Option<&'a VariantInfo<F>> {
    variants.iter().find(|v| v.name == name)
}
