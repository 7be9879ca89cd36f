//! Benchmark driver: runs every size of an algorithm and exports raw timings.

use crate::registry::AlgorithmRunner;
use crate::utils::timer::{measure_variants, TimingConfig, VariantResult};

/// Results of all variants of one algorithm at one size.
pub struct SizeResults {
    pub size: usize,
    pub results: Vec<VariantResult>,
}

/// Measure every variant of `algo` at each size, seeding the workloads with `seed`.
pub fn run_algorithm(
    algo: &dyn AlgorithmRunner,
    sizes: &[usize],
    config: &TimingConfig,
    seed: u64,
) -> Vec<SizeResults> {
    sizes
        .iter()
        .map(|&size| {
            log::debug!("measuring {} at size {}", algo.name(), size);
            SizeResults {
                size,
                results: measure_variants(algo.variants(size, seed), size, config),
            }
        })
        .collect()
}

/// Raw timing data for a single variant (used for CSV export)
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_nanos: u64,
    pub median_nanos: u64,
    pub result_sample: Option<f64>,
}

/// Flatten results into CSV rows.
pub fn raw_timings(algo_name: &str, sizes: &[SizeResults]) -> Vec<RawTimingData> {
    sizes
        .iter()
        .flat_map(|s| {
            s.results.iter().map(move |r| RawTimingData {
                algo_name: algo_name.to_string(),
                variant_name: r.name.clone(),
                input_size: s.size,
                avg_nanos: r.avg_time.as_nanos() as u64,
                median_nanos: r.median_time.as_nanos() as u64,
                result_sample: r.result_sample,
            })
        })
        .collect()
}

/// Export timing data to CSV file
pub fn export_csv(path: &str, data: &[RawTimingData]) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(std::io::BufWriter::new(file), data)
}

fn write_csv<W: std::io::Write>(mut out: W, data: &[RawTimingData]) -> std::io::Result<()> {
    writeln!(
        out,
        "algorithm,variant,compiler,input_size,avg_time_ns,median_time_ns,result"
    )?;

    for entry in data {
        let compiler = if entry.variant_name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            out,
            "{},{},{},{},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            compiler,
            entry.input_size,
            entry.avg_nanos,
            entry.median_nanos,
            entry.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    out.flush()
}
