//! Command-line configuration for the harness-facing binaries.
//!
//! Usage:
//!   monte_carlo_single   [ITERATIONS] [--seed N] [--kernel NAME]
//!   monte_carlo_parallel [ITERATIONS] [--seed N] [--kernel NAME] [--workers N] [--strategy NAME]

use thiserror::Error;

use crate::monte_carlo::code::{
    find_kernel, find_strategy, CountFn, ParallelFn, DEFAULT_KERNEL, DEFAULT_STRATEGY,
};
use crate::monte_carlo::{default_worker_count, DEFAULT_ITERATIONS, DEFAULT_SEED};
use crate::utils::{PinStrategy, TimingConfig};

/// Errors from parsing the command line
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value '{value}' for {option}: expected a non-negative integer")]
    InvalidNumber { option: String, value: String },

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("unknown kernel '{0}'")]
    UnknownKernel(String),

    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("invalid pin strategy '{0}': expected none, global or per-execution")]
    InvalidPinStrategy(String),

    #[error("invalid size '{0}': expected a positive integer")]
    InvalidSize(String),
}

/// Settings of one estimation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub iterations: u64,
    pub seed: u64,
    pub workers: u32,
    pub kernel_name: String,
    pub strategy_name: String,
    pub kernel: CountFn,
    pub strategy: ParallelFn,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: DEFAULT_SEED,
            workers: default_worker_count(),
            kernel_name: DEFAULT_KERNEL.to_string(),
            strategy_name: DEFAULT_STRATEGY.to_string(),
            kernel: crate::monte_carlo::code::count_inside_original,
            strategy: crate::monte_carlo::code::run_workers_threads,
        }
    }
}

/// What the command line asks for.
#[derive(Debug, Clone)]
pub enum Command {
    Run(RunConfig),
    Help,
}

impl RunConfig {
    /// Parse arguments (without the program name).
    ///
    /// `parallel` enables `--workers` and `--strategy`.
    pub fn parse<I>(args: I, parallel: bool) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = RunConfig::default();
        let mut positional_seen = false;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--seed" => config.seed = parse_number(&arg, args.next())?,
                "--kernel" => {
                    let name = required(&arg, args.next())?;
                    config.kernel =
                        find_kernel(&name).ok_or_else(|| ConfigError::UnknownKernel(name.clone()))?;
                    config.kernel_name = name;
                }
                "--workers" if parallel => config.workers = parse_number(&arg, args.next())?,
                "--strategy" if parallel => {
                    let name = required(&arg, args.next())?;
                    config.strategy = find_strategy(&name)
                        .ok_or_else(|| ConfigError::UnknownStrategy(name.clone()))?;
                    config.strategy_name = name;
                }
                other if other.starts_with('-') => {
                    return Err(ConfigError::UnknownOption(other.to_string()))
                }
                _ if !positional_seen => {
                    config.iterations = parse_number("ITERATIONS", Some(arg))?;
                    positional_seen = true;
                }
                _ => return Err(ConfigError::UnexpectedArgument(arg)),
            }
        }

        if !parallel {
            config.workers = 1;
        }

        Ok(Command::Run(config))
    }

    /// Variant label for the report: "standard" unless a non-default
    /// kernel or strategy was chosen.
    pub fn variant_label(&self, parallel: bool) -> String {
        let kernel_default = self.kernel_name == DEFAULT_KERNEL;
        let strategy_default = !parallel || self.strategy_name == DEFAULT_STRATEGY;
        match (kernel_default, strategy_default) {
            (true, true) => "standard".to_string(),
            (_, true) => self.kernel_name.clone(),
            (true, false) => self.strategy_name.clone(),
            (false, false) => format!("{}+{}", self.kernel_name, self.strategy_name),
        }
    }
}

fn required(option: &str, value: Option<String>) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingValue(option.to_string()))
}

fn parse_number<T: std::str::FromStr>(option: &str, value: Option<String>) -> Result<T, ConfigError> {
    let value = required(option, value)?;
    let cleaned = value.replace('_', "");
    cleaned.parse().map_err(|_| ConfigError::InvalidNumber {
        option: option.to_string(),
        value,
    })
}

/// Options of the variant benchmark binary.
#[derive(Debug, Clone)]
pub struct BenchOptions {
    pub sizes: Vec<usize>,
    pub timing: TimingConfig,
    /// Workload and schedule seed; `None` draws one at startup.
    pub seed: Option<u64>,
    pub csv_path: Option<String>,
    pub algorithm: Option<String>,
    pub list: bool,
    pub help: bool,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            sizes: vec![100_000, 1_000_000, 10_000_000],
            timing: TimingConfig::default(),
            seed: None,
            csv_path: None,
            algorithm: None,
            list: false,
            help: false,
        }
    }
}

impl BenchOptions {
    /// Parse arguments (without the program name).
    pub fn parse<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = BenchOptions::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--list" | "-l" => options.list = true,
                "--help" | "-h" => options.help = true,
                "--sizes" => options.sizes = parse_sizes(&required(&arg, args.next())?)?,
                "--runs" => {
                    let runs: usize = parse_number(&arg, args.next())?;
                    options.timing.runs_per_variant = runs.max(1);
                }
                "--warmup" => options.timing.warmup_iterations = parse_number(&arg, args.next())?,
                "--seed" => options.seed = Some(parse_number(&arg, args.next())?),
                "--pin" => {
                    let value = required(&arg, args.next())?;
                    options.timing.pin_strategy =
                        PinStrategy::parse(&value).ok_or(ConfigError::InvalidPinStrategy(value))?;
                }
                "--csv" => options.csv_path = Some(required(&arg, args.next())?),
                other if other.starts_with('-') => {
                    return Err(ConfigError::UnknownOption(other.to_string()))
                }
                _ if options.algorithm.is_none() => options.algorithm = Some(arg),
                _ => return Err(ConfigError::UnexpectedArgument(arg)),
            }
        }

        Ok(options)
    }
}

fn parse_sizes(value: &str) -> Result<Vec<usize>, ConfigError> {
    value
        .split(',')
        .map(|part| {
            let part = part.trim();
            match part.replace('_', "").parse::<usize>() {
                Ok(size) if size > 0 => Ok(size),
                _ => Err(ConfigError::InvalidSize(part.to_string())),
            }
        })
        .collect()
}

/// Usage text for the binaries.
pub fn usage(program: &str, parallel: bool) -> String {
    let mut text = format!(
        "Usage: {} [ITERATIONS] [OPTIONS]\n\n\
         Arguments:\n  ITERATIONS        Points to sample (default: {})\n\n\
         Options:\n  --seed N          Base seed (default: {})\n  \
         --kernel NAME     Sampling kernel (default: {})\n",
        program, DEFAULT_ITERATIONS, DEFAULT_SEED, DEFAULT_KERNEL
    );
    if parallel {
        text.push_str(&format!(
            "  --workers N       Worker threads (default: available parallelism)\n  \
             --strategy NAME   Worker strategy (default: {})\n",
            DEFAULT_STRATEGY
        ));
    }
    text.push_str("  --help, -h        Show this help message\n");
    text
}
