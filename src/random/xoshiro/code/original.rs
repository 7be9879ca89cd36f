/// SplitMix64 multipliers used to expand a seed into the four state lanes.
const SPLITMIX_MUL_1: u64 = 0xBF58476D1CE4E5B9;
const SPLITMIX_MUL_2: u64 = 0x94D049BB133111EB;

/// Expand a 64-bit seed into a Xoshiro256** state.
///
/// The accumulator carries over from one lane to the next; it is never reset.
pub fn seed_original(seed: u64) -> [u64; 4] {
    let mut state = [0u64; 4];
    let mut s = seed;

    for lane in state.iter_mut() {
        s ^= s >> 30;
        s = s.wrapping_mul(SPLITMIX_MUL_1);
        s ^= s >> 27;
        s = s.wrapping_mul(SPLITMIX_MUL_2);
        s ^= s >> 31;
        *lane = s;
    }

    state
}

/// One Xoshiro256** step: scramble lane 1 into the output, then advance the state.
#[inline(always)]
pub fn xoshiro_original(state: &mut [u64; 4]) -> u64 {
    let result = state[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);

    let t = state[1] << 17;

    state[2] ^= state[0];
    state[3] ^= state[1];
    state[1] ^= state[2];
    state[0] ^= state[3];

    state[2] ^= t;
    state[3] = state[1].rotate_left(45); // uses the updated lane 1

    result
}
