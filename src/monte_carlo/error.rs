use thiserror::Error;

/// Errors that can occur before or during an estimation run
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EstimateError {
    #[error("iteration count must be positive")]
    ZeroIterations,

    #[error("worker count must be positive")]
    ZeroWorkers,

    #[error("{iterations} iterations leave nothing to sample for each of {workers} workers")]
    TooFewIterations { iterations: u64, workers: u32 },

    #[error("failed to start worker: {0}")]
    WorkerStart(String),

    #[error("worker {0} panicked")]
    WorkerPanicked(u32),
}
