//! Variant benchmark CLI.
//!
//! Usage:
//!   mc-bench                # Verify and run all algorithms
//!   mc-bench --list         # List available algorithms
//!   mc-bench monte_carlo    # Run specific algorithm
//!   mc-bench --help         # Show help

use monte_carlo_pi::config::BenchOptions;
use monte_carlo_pi::registry::build_registry;
use monte_carlo_pi::tui;
use monte_carlo_pi::utils::runner::{export_csv, raw_timings};
use monte_carlo_pi::utils::time_seed;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let registry = build_registry();

    let options = match BenchOptions::parse(env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run with --help for usage.");
            return ExitCode::FAILURE;
        }
    };

    if options.help {
        tui::print_help();
        return ExitCode::SUCCESS;
    }

    if options.list {
        tui::print_available_algorithms(&registry);
        return ExitCode::SUCCESS;
    }

    let algorithms: Vec<_> = match &options.algorithm {
        Some(name) => match registry.find(name) {
            Some(algo) => {
                if let Err(e) = algo.verify() {
                    eprintln!("Algorithm '{}' failed verification: {}", algo.name(), e);
                    return ExitCode::FAILURE;
                }
                vec![algo]
            }
            None => {
                eprintln!("Algorithm '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                return ExitCode::FAILURE;
            }
        },
        None => {
            if let Err(e) = registry.verify_all() {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
            registry.all().iter().map(|a| a.as_ref()).collect()
        }
    };

    let sizes = options.sizes;
    let mut config = options.timing;
    let seed = options.seed.unwrap_or_else(time_seed);
    config.schedule_seed = Some(seed);
    log::info!("workload and schedule seed: {}", seed);

    tui::print_header();

    let mut raw = Vec::new();
    for algo in &algorithms {
        let results = tui::run_and_display(*algo, &sizes, &config, seed);
        raw.extend(raw_timings(algo.name(), &results));
    }

    if let Some(path) = options.csv_path {
        match export_csv(&path, &raw) {
            Ok(()) => println!("  Raw data exported to: {}", path),
            Err(e) => eprintln!("  Warning: Failed to export CSV: {}", e),
        }
        println!();
    }

    println!("Note: Speedup is relative to the first variant (usually 'original').");
    println!("      A '!' after a result marks a value that differs from 'original'.");
    ExitCode::SUCCESS
}
