//! Block-wise sampling.
//!
//! Coordinates are generated into fixed-size blocks first and tested in a
//! second pass. Draw order is unchanged (x then y for each point), so the
//! count is identical to the reference loop; the test pass is a plain
//! slice reduction the compiler can vectorize.

use super::is_inside;
use crate::random::Xoshiro256StarStar;

/// Points per block.
const BLOCK: usize = 256;

pub fn count_inside_batched(rng: &mut Xoshiro256StarStar, samples: u64) -> u64 {
    let mut xs = [0.0f64; BLOCK];
    let mut ys = [0.0f64; BLOCK];
    let mut inside = 0u64;
    let mut remaining = samples;

    while remaining > 0 {
        let n = remaining.min(BLOCK as u64) as usize;

        for (x, y) in xs[..n].iter_mut().zip(ys[..n].iter_mut()) {
            *x = rng.next_double();
            *y = rng.next_double();
        }

        inside += xs[..n]
            .iter()
            .zip(&ys[..n])
            .map(|(&x, &y)| u64::from(is_inside(x, y)))
            .sum::<u64>();

        remaining -= n as u64;
    }

    inside
}
