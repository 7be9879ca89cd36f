//! Benchmark closures for the Xoshiro256** variants.

use super::code::available_variants;
use super::generator::u64_to_unit_f64;
use crate::utils::timer::Variant;
use std::hint::black_box;
use std::time::Instant;

/// One closure per variant; each execution seeds a fresh state and draws
/// `size` words. The result is the last word mapped to [0, 1), which is
/// identical across correct variants.
pub fn variants(size: usize, seed: u64) -> Vec<Variant<'static>> {
    available_variants()
        .into_iter()
        .map(|v| {
            let imp = v.function;
            Variant {
                name: v.name,
                description: v.description,
                pinnable: true,
                run: Box::new(move || {
                    let mut state = (imp.seed)(seed);
                    let mut last = 0u64;
                    let start = Instant::now();
                    for _ in 0..size {
                        last = black_box((imp.step)(&mut state));
                    }
                    let elapsed = start.elapsed();
                    (elapsed, Some(u64_to_unit_f64(last)))
                }),
            }
        })
        .collect()
}
