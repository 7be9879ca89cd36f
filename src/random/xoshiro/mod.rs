//! # Xoshiro256**
//!
//! 256-bit-state, 64-bit-output generator. Output is produced by scrambling
//! lane 1 (`rotl(s1 * 5, 7) * 9`); the state advances through a fixed
//! sequence of XOR, shift and rotate steps. Seeding expands a single `u64`
//! into the four lanes with SplitMix64 mixing.
//!
//! The exact step order is part of the contract: every implementation
//! (Rust, C, or any other language) must yield the same stream for the
//! same seed.

pub mod bench;
pub mod code;
mod generator;
#[cfg(test)]
mod test;

pub use generator::{u64_to_unit_f64, Xoshiro256StarStar};

use crate::registry::AlgorithmRunner;
use crate::utils::timer::Variant;

/// Seed and length of the stream every variant is checked against.
const VERIFY_SEED: u64 = 12345;
const VERIFY_DRAWS: usize = 1000;

pub struct XoshiroRunner;

impl AlgorithmRunner for XoshiroRunner {
    fn name(&self) -> &'static str {
        "xoshiro256**"
    }

    fn description(&self) -> &'static str {
        "Xoshiro256** pseudo-random number generator"
    }

    fn category(&self) -> &'static str {
        "random"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn variants(&self, size: usize, seed: u64) -> Vec<Variant<'static>> {
        bench::variants(size, seed)
    }

    fn verify(&self) -> Result<(), String> {
        let variants = code::available_variants();

        let original = crate::utils::find_variant(&variants, "original")
            .ok_or("No 'original' variant found for reference")?;

        let reference_state = (original.function.seed)(VERIFY_SEED);
        let mut state = reference_state;
        let expected: Vec<u64> = (0..VERIFY_DRAWS)
            .map(|_| (original.function.step)(&mut state))
            .collect();

        for variant in &variants {
            if variant.name == "original" {
                continue;
            }

            let mut state = (variant.function.seed)(VERIFY_SEED);
            if state != reference_state {
                return Err(format!(
                    "Variant '{}' seeds differently. Expected {:x?}, got {:x?}",
                    variant.name, reference_state, state
                ));
            }

            for (i, &exp) in expected.iter().enumerate() {
                let got = (variant.function.step)(&mut state);
                if got != exp {
                    return Err(format!(
                        "Variant '{}' failed verification at draw {}. Expected {:#x}, got {:#x}",
                        variant.name, i, exp, got
                    ));
                }
            }
        }

        Ok(())
    }
}
