//! Determinism of the generator and the estimators through the public API.
//!
//! Same seed, same worker count: same count, on every run and every strategy.

use monte_carlo_pi::monte_carlo::code::{available_kernels, available_strategies};
use monte_carlo_pi::monte_carlo::{
    derive_worker_seed, estimate_pi_parallel_with, estimate_pi_with, EstimateError,
};
use monte_carlo_pi::prelude::*;

#[test]
fn test_generator_reference_sequence() {
    let mut rng = Xoshiro256StarStar::new(12345);
    assert_eq!(
        rng.state(),
        [
            0xf36cf1164265dd51,
            0x79a8bd6cf99585ec,
            0x1e42cca5b33f8e17,
            0x704672bceb562408
        ]
    );
    assert_eq!(rng.next_u64(), 0x54a613efa4453fb0);
    assert_eq!(rng.next_u64(), 0xd2539a46445df50b);
    assert_eq!(rng.next_u64(), 0xe56364d1bd6a5670);
}

#[test]
fn test_generator_same_seed_same_sequence() {
    let mut rng1 = Xoshiro256StarStar::new(987654321);
    let mut rng2 = Xoshiro256StarStar::new(987654321);

    for _ in 0..1000 {
        assert_eq!(rng1.next_double(), rng2.next_double(), "RNG not deterministic!");
    }
}

#[test]
fn test_generator_different_seeds_different_sequences() {
    let mut rng1 = Xoshiro256StarStar::new(12345);
    let mut rng2 = Xoshiro256StarStar::new(12346);

    assert_ne!(
        rng1.next_u64(),
        rng2.next_u64(),
        "Different seeds should produce different values"
    );
}

#[test]
fn test_single_run_is_repeatable() {
    let first = estimate_pi(100_000, 12345).unwrap();
    let second = estimate_pi(100_000, 12345).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.inside, 78_401);
    assert_eq!(first.iterations, 100_000);
}

#[test]
fn test_parallel_run_is_repeatable() {
    let first = estimate_pi_parallel(100_000, 4, 12345).unwrap();
    for _ in 0..5 {
        assert_eq!(estimate_pi_parallel(100_000, 4, 12345).unwrap(), first);
    }
    assert_eq!(first.inside, 78_450);
}

#[test]
fn test_every_kernel_and_strategy_agree() {
    let expected = estimate_pi_parallel(100_000, 3, 12345).unwrap();
    assert_eq!(expected.iterations, 99_999);
    assert_eq!(expected.inside, 78_415);

    for kernel in available_kernels() {
        for strategy in available_strategies() {
            let got =
                estimate_pi_parallel_with(100_000, 3, 12345, kernel.function, strategy.function)
                    .unwrap();
            assert_eq!(
                got, expected,
                "kernel '{}' with strategy '{}' diverged",
                kernel.name, strategy.name
            );
        }
    }
}

#[test]
fn test_worker_zero_reproduces_single_stream() {
    assert_eq!(derive_worker_seed(12345, 0), 12345);

    let single = estimate_pi(50_000, 42).unwrap();
    let parallel = estimate_pi_parallel(50_000, 1, 42).unwrap();
    assert_eq!(single, parallel);

    for kernel in available_kernels() {
        assert_eq!(
            estimate_pi_with(50_000, 42, kernel.function).unwrap(),
            single,
            "kernel '{}' diverged",
            kernel.name
        );
    }
}

#[test]
fn test_invalid_inputs_are_rejected() {
    assert_eq!(estimate_pi(0, 1), Err(EstimateError::ZeroIterations));
    assert_eq!(
        estimate_pi_parallel(100, 0, 1),
        Err(EstimateError::ZeroWorkers)
    );
    assert_eq!(
        estimate_pi_parallel(3, 4, 1),
        Err(EstimateError::TooFewIterations {
            iterations: 3,
            workers: 4
        })
    );
}
