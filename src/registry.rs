//! Algorithm registry for dynamic algorithm discovery and execution.
//!
//! Every algorithm exposes its implementation variants as timed closures and
//! a `verify` check that compares each variant against the reference.

use crate::utils::timer::Variant;

/// Trait that all algorithm benchmarkers must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "monte_carlo")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "random", "estimation")
    fn category(&self) -> &'static str;

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Get closures for each variant, ready to be measured.
    /// Each closure performs `size` units of work from a generator seeded
    /// with `seed`, and reports a result value comparable across variants.
    fn variants(&self, size: usize, seed: u64) -> Vec<Variant<'static>>;

    /// Verify correctness of all variants against the reference
    fn verify(&self) -> Result<(), String>;
}

/// Global registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    /// Verify every registered algorithm, stopping at the first failure.
    pub fn verify_all(&self) -> Result<(), String> {
        for algo in &self.algorithms {
            algo.verify()
                .map_err(|e| format!("Algorithm '{}' failed verification: {}", algo.name(), e))?;
            log::debug!("algorithm {} verified", algo.name());
        }
        Ok(())
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::random::xoshiro::XoshiroRunner);
    registry.register(crate::monte_carlo::MonteCarloRunner);
    registry.register(crate::monte_carlo::MonteCarloParallelRunner);

    registry
}
