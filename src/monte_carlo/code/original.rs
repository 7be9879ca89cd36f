use super::is_inside;
use crate::random::Xoshiro256StarStar;

/// Reference sampling loop: draw `x` then `y`, count points inside the circle.
pub fn count_inside_original(rng: &mut Xoshiro256StarStar, samples: u64) -> u64 {
    let mut inside = 0u64;

    for _ in 0..samples {
        let x = rng.next_double();
        let y = rng.next_double();

        if is_inside(x, y) {
            inside += 1;
        }
    }

    inside
}
