//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the benchmark CLI.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner};
use crate::utils::bench::samples_per_second;
use crate::utils::runner::{self, SizeResults};
use crate::utils::timer::{TimingConfig, VariantResult};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Sort priority: original first, then Rust variants, then C variants.
fn variant_sort_key(result: &VariantResult) -> (u8, String) {
    let name = result.name.to_lowercase();
    if name == "original" {
        (0, String::new())
    } else if name.starts_with("c-") {
        (2, name)
    } else {
        (1, name)
    }
}

pub fn sort_variants(results: &mut [VariantResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let max_content_width = get_term_width().saturating_sub(4).max(40);

    let lines = [
        format!("Algorithm: {}", algo.name()),
        format!("Category:  {}", algo.category()),
        algo.description().to_string(),
        format!("Variants: {}", algo.available_variants().join(", ")),
    ];

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for (i, line) in lines.iter().enumerate() {
        if i == 3 {
            println!("├{}┤", border);
        }
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("└{}┘", border);
    println!();
}

/// Print results table for a single size
pub fn print_results_table(results: &[VariantResult], size: usize) {
    if results.is_empty() {
        return;
    }

    // Fixed columns: 12+12+12+14+9+8+12 = 79 chars + 7 spaces + 2 indent
    let fixed_width = 88;
    let variant_col_width = get_term_width().saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 79 + 7;

    let baseline_time = results
        .first()
        .map(|r| r.avg_time.as_nanos() as f64)
        .unwrap_or(1.0);
    let baseline_result = results.first().and_then(|r| r.result_sample);

    println!("  Size: {} ({} runs per variant)", size, results[0].runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>14} {:>9} {:>8} {:>12}",
        "Variant",
        "Average",
        "Median",
        "Min",
        "Samples/s",
        "Speedup",
        "CV",
        "Result",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let avg_ns = result.avg_time.as_nanos() as f64;
        let speedup = if avg_ns > 0.0 { baseline_time / avg_ns } else { 0.0 };
        let cv = if avg_ns > 0.0 {
            result.std_dev.as_nanos() as f64 / avg_ns
        } else {
            0.0
        };

        let display_name = if result.name.starts_with("c-") {
            match crate::utils::C_COMPILER_NAME {
                Some(c) => format!("{} ({})", result.name, c),
                None => result.name.clone(),
            }
        } else {
            result.name.clone()
        };

        let result_str = match (result.result_sample, baseline_result) {
            (Some(v), Some(base)) if v != base => format!("{:.6} !", v),
            (Some(v), _) => format!("{:.6}", v),
            (None, _) => "-".to_string(),
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>14.3e} {:>8.2}x {:>7.2}% {:>12}",
            truncate(&display_name, variant_col_width),
            format!("{:.2?}", result.avg_time),
            format!("{:.2?}", result.median_time),
            format!("{:.2?}", result.min_time),
            samples_per_second(size, result.median_time),
            speedup,
            cv * 100.0,
            result_str,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Monte Carlo Pi Variant Benchmarks ";
    let padding = term_width.saturating_sub(title.len()) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: mc-bench [OPTIONS] [ALGORITHM]");
    println!();
    println!("Options:");
    println!("  --list, -l       List all available algorithms");
    println!("  --help, -h       Show this help message");
    println!("  --sizes SIZES    Comma-separated work sizes (default: 100000,1000000,10000000)");
    println!("  --runs N         Measured runs per variant (default: 10)");
    println!("  --warmup N       Warmup runs per variant (default: 2)");
    println!("  --seed N         Workload and schedule seed (default: random)");
    println!("  --pin MODE       none | global | per-execution (default: per-execution)");
    println!("  --csv PATH       Export raw timings to CSV");
    println!();
    println!("Arguments:");
    println!("  ALGORITHM        Name of specific algorithm to run (omit for all)");
    println!();
    println!("Examples:");
    println!("  mc-bench                          # Run all algorithms");
    println!("  mc-bench monte_carlo              # Only the sampling kernels");
    println!("  mc-bench --sizes 1000000 --runs 20");
    println!("  mc-bench --seed 12345 --csv data.csv");
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<22} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
    }
}

/// Run one algorithm at every size and display the tables.
/// Returns the raw results for optional CSV export.
pub fn run_and_display(
    algo: &dyn AlgorithmRunner,
    sizes: &[usize],
    config: &TimingConfig,
    seed: u64,
) -> Vec<SizeResults> {
    print_algo_info_box(algo);

    let mut all = runner::run_algorithm(algo, sizes, config, seed);
    for size_results in &mut all {
        sort_variants(&mut size_results.results);
        print_results_table(&size_results.results, size_results.size);
    }
    all
}
