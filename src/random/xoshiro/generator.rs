//! The Xoshiro256** generator value.
//!
//! Every worker owns exactly one of these. The state is mutated in place on
//! each draw and is never shared, so no synchronization is involved.

use super::code::{seed_original, xoshiro_original};
use rand::{RngCore, SeedableRng};

/// Scale factor mapping a 53-bit integer onto [0, 1).
const UNIT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Convert a 64-bit output word to a double in [0, 1) using its top 53 bits.
#[inline(always)]
pub fn u64_to_unit_f64(word: u64) -> f64 {
    (word >> 11) as f64 * UNIT_SCALE
}

/// Deterministic 256-bit-state pseudo-random generator.
///
/// # Example
/// ```
/// use monte_carlo_pi::random::Xoshiro256StarStar;
///
/// let mut rng = Xoshiro256StarStar::new(12345);
/// assert_eq!(rng.next_u64(), 0x54a613efa4453fb0);
///
/// let x = rng.next_double();
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoshiro256StarStar {
    state: [u64; 4],
}

impl Xoshiro256StarStar {
    /// Seed a generator by running SplitMix64 mixing over `seed` four times.
    ///
    /// Seed `0` mixes to the all-zero state, from which the generator only
    /// ever returns zero. See [`is_degenerate`](Self::is_degenerate).
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed_original(seed),
        }
    }

    /// Build a generator from raw state lanes.
    pub fn from_state(state: [u64; 4]) -> Self {
        Self { state }
    }

    /// Current state lanes.
    pub fn state(&self) -> [u64; 4] {
        self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut [u64; 4] {
        &mut self.state
    }

    /// True when the state is all zero and the stream is stuck at zero.
    pub fn is_degenerate(&self) -> bool {
        self.state == [0; 4]
    }

    /// Advance the state and return the next 64-bit word.
    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        xoshiro_original(&mut self.state)
    }

    /// Next double in [0, 1) with 53 bits of precision.
    #[inline(always)]
    pub fn next_double(&mut self) -> f64 {
        u64_to_unit_f64(self.next_u64())
    }
}

impl RngCore for Xoshiro256StarStar {
    fn next_u32(&mut self) -> u32 {
        (xoshiro_original(&mut self.state) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        xoshiro_original(&mut self.state)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = xoshiro_original(&mut self.state).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Xoshiro256StarStar {
    type Seed = [u8; 32];

    /// Interpret the seed as four little-endian state lanes.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut state = [0u64; 4];
        for (lane, bytes) in state.iter_mut().zip(seed.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(bytes);
            *lane = u64::from_le_bytes(word);
        }
        Self { state }
    }

    fn seed_from_u64(seed: u64) -> Self {
        Self::new(seed)
    }
}
