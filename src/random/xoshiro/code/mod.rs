//! Xoshiro256** implementations.

mod original;

pub use original::{seed_original, xoshiro_original};

pub mod c_impl;

use crate::utils::VariantInfo;

/// Expands a seed into the four state lanes.
pub type SeedFn = fn(u64) -> [u64; 4];

/// Advances the state by one step and returns the output word.
pub type StepFn = fn(&mut [u64; 4]) -> u64;

/// A complete generator implementation: seeding plus stepping.
#[derive(Clone, Copy)]
pub struct XoshiroImpl {
    pub seed: SeedFn,
    pub step: StepFn,
}

pub fn available_variants() -> Vec<VariantInfo<XoshiroImpl>> {
    let mut variants = vec![VariantInfo {
        name: "original",
        description: "Original pure Rust implementation",
        function: XoshiroImpl {
            seed: seed_original,
            step: xoshiro_original,
        },
    }];

    if c_impl::C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-original",
            description: "C implementation of Xoshiro256**",
            function: XoshiroImpl {
                seed: c_impl::seed_c_wrapper,
                step: c_impl::xoshiro_c_wrapper,
            },
        });
    }

    variants
}
