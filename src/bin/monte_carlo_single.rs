//! Single-threaded π estimation; prints one JSON run record to stdout.

use monte_carlo_pi::config::{usage, Command, RunConfig};
use monte_carlo_pi::monte_carlo::estimate_pi_with;
use monte_carlo_pi::report::{Mode, RunReport};
use std::env;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    env_logger::init();

    let config = match RunConfig::parse(env::args().skip(1), false) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print!("{}", usage("monte_carlo_single", false));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", usage("monte_carlo_single", false));
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let result = match estimate_pi_with(config.iterations, config.seed, config.kernel) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let elapsed = start.elapsed();

    let report = RunReport::new(
        Mode::Single,
        config.variant_label(false),
        config.iterations,
        &result,
        elapsed,
        1,
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
