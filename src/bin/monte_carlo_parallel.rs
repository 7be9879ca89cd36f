//! Parallel π estimation over per-worker streams; prints one JSON run
//! record to stdout.

use monte_carlo_pi::config::{usage, Command, RunConfig};
use monte_carlo_pi::monte_carlo::estimate_pi_parallel_with;
use monte_carlo_pi::report::{Mode, RunReport};
use std::env;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    env_logger::init();

    let config = match RunConfig::parse(env::args().skip(1), true) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print!("{}", usage("monte_carlo_parallel", true));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", usage("monte_carlo_parallel", true));
            return ExitCode::FAILURE;
        }
    };

    log::debug!(
        "{} iterations on {} workers ({} kernel, {} strategy)",
        config.iterations,
        config.workers,
        config.kernel_name,
        config.strategy_name
    );

    let start = Instant::now();
    let result = match estimate_pi_parallel_with(
        config.iterations,
        config.workers,
        config.seed,
        config.kernel,
        config.strategy,
    ) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let elapsed = start.elapsed();

    let report = RunReport::new(
        Mode::Parallel,
        config.variant_label(true),
        config.iterations,
        &result,
        elapsed,
        config.workers,
    );
    match report.to_json() {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to serialize report: {}", e);
            ExitCode::FAILURE
        }
    }
}
