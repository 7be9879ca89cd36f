use super::code;
use super::{u64_to_unit_f64, Xoshiro256StarStar};
use proptest::prelude::*;
use rand::{Rng, RngCore, SeedableRng};

#[test]
fn test_seed_known_state() {
    // SplitMix64 mixing applied four times to 12345, accumulator carried over
    let rng = Xoshiro256StarStar::new(12345);
    assert_eq!(
        rng.state(),
        [
            0xf36cf1164265dd51,
            0x79a8bd6cf99585ec,
            0x1e42cca5b33f8e17,
            0x704672bceb562408,
        ]
    );
}

#[test]
fn test_known_value() {
    let mut rng = Xoshiro256StarStar::new(12345);
    assert_eq!(rng.next_u64(), 0x54a613efa4453fb0);
    assert_eq!(rng.next_u64(), 0xd2539a46445df50b);
    assert_eq!(rng.next_u64(), 0xe56364d1bd6a5670);
}

#[test]
fn test_known_double() {
    let mut rng = Xoshiro256StarStar::new(12345);
    assert_eq!(rng.next_double(), 0.3306591472685526);
    assert_eq!(rng.next_double(), 0.8215881749678073);
}

#[test]
fn test_step_from_small_state() {
    // s1 = 1: result = rotl(5, 7) * 9 = 640 * 9
    let mut state = [0, 1, 0, 0];
    let result = code::xoshiro_original(&mut state);
    assert_eq!(result, 5760);
    // s2 ^= s0 -> 0; s3 ^= s1 -> 1; s1 ^= s2 -> 1; s0 ^= s3 -> 1;
    // s2 ^= 1 << 17; s3 = rotl(1, 45)
    assert_eq!(state, [1, 1, 1 << 17, 1 << 45]);
}

#[test]
fn test_zero_seed_is_degenerate() {
    let mut rng = Xoshiro256StarStar::new(0);
    assert!(rng.is_degenerate());
    assert_eq!(rng.next_u64(), 0);
    assert_eq!(rng.next_double(), 0.0);
    assert!(!Xoshiro256StarStar::new(1).is_degenerate());
}

#[test]
fn test_unit_conversion_uses_top_53_bits() {
    assert_eq!(u64_to_unit_f64(0), 0.0);
    assert_eq!(u64_to_unit_f64(0x7ff), 0.0); // low 11 bits are dropped
    assert_eq!(u64_to_unit_f64(1 << 11), 1.0 / (1u64 << 53) as f64);
    assert!(u64_to_unit_f64(u64::MAX) < 1.0);
    assert_eq!(u64_to_unit_f64(u64::MAX), 1.0 - 1.0 / (1u64 << 53) as f64);
}

#[test]
fn test_rng_core_matches_inherent() {
    let mut a = Xoshiro256StarStar::seed_from_u64(99);
    let mut b = Xoshiro256StarStar::new(99);
    for _ in 0..16 {
        assert_eq!(RngCore::next_u64(&mut a), b.next_u64());
    }
}

#[test]
fn test_fill_bytes_is_little_endian_words() {
    let mut a = Xoshiro256StarStar::new(7);
    let mut b = Xoshiro256StarStar::new(7);
    let mut buf = [0u8; 12];
    a.fill_bytes(&mut buf);
    let first = b.next_u64().to_le_bytes();
    let second = b.next_u64().to_le_bytes();
    assert_eq!(&buf[..8], &first);
    assert_eq!(&buf[8..], &second[..4]);
}

#[test]
fn test_from_seed_reads_lanes() {
    let mut seed = [0u8; 32];
    for (i, chunk) in seed.chunks_exact_mut(8).enumerate() {
        chunk.copy_from_slice(&(i as u64 + 1).to_le_bytes());
    }
    let rng = Xoshiro256StarStar::from_seed(seed);
    assert_eq!(rng.state(), [1, 2, 3, 4]);
}

#[test]
fn test_works_with_rand_distributions() {
    let mut rng = Xoshiro256StarStar::new(12345);
    for _ in 0..1000 {
        let v: f64 = rng.random_range(-1.0..1.0);
        assert!((-1.0..1.0).contains(&v));
    }
}

#[test]
fn test_all_variants_match_original() {
    let variants = code::available_variants();
    let original = variants
        .iter()
        .find(|v| v.name == "original")
        .expect("original variant not found");

    for seed in [0u64, 1, 12345, u64::MAX] {
        let mut expected_state = (original.function.seed)(seed);
        let expected: Vec<u64> = (0..1000)
            .map(|_| (original.function.step)(&mut expected_state))
            .collect();

        for variant in &variants {
            let mut state = (variant.function.seed)(seed);
            for (i, &exp) in expected.iter().enumerate() {
                let got = (variant.function.step)(&mut state);
                assert_eq!(got, exp, "Variant {} mismatch at index {}", variant.name, i);
            }
            assert_eq!(state, expected_state, "Variant {} end state", variant.name);
        }
    }
}

proptest! {
    #[test]
    fn prop_same_seed_same_stream(seed in any::<u64>()) {
        let mut a = Xoshiro256StarStar::new(seed);
        let mut b = Xoshiro256StarStar::new(seed);
        for _ in 0..64 {
            prop_assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn prop_double_in_unit_interval(seed in any::<u64>()) {
        let mut rng = Xoshiro256StarStar::new(seed);
        for _ in 0..256 {
            let x = rng.next_double();
            prop_assert!((0.0..1.0).contains(&x), "{} out of [0, 1)", x);
        }
    }

    #[test]
    fn prop_unit_conversion_in_range(word in any::<u64>()) {
        let x = u64_to_unit_f64(word);
        prop_assert!((0.0..1.0).contains(&x));
    }

    #[test]
    fn prop_nonzero_seed_is_not_degenerate(seed in 1u64..) {
        prop_assert!(!Xoshiro256StarStar::new(seed).is_degenerate());
    }
}
