use super::code::{self, is_inside};
use super::*;
use crate::random::Xoshiro256StarStar;
use proptest::prelude::*;

#[test]
fn test_known_counts_single() {
    let result = estimate_pi(1000, 12345).unwrap();
    assert_eq!(result.inside, 788);
    assert_eq!(result.iterations, 1000);

    let result = estimate_pi(100_000, 12345).unwrap();
    assert_eq!(result.inside, 78_401);
    assert_eq!(result.pi_estimate, 4.0 * 78_401.0 / 100_000.0);
    assert_eq!(result.error, (result.pi_estimate - PI_THEORETICAL).abs());
}

#[test]
fn test_known_counts_parallel() {
    let result = estimate_pi_parallel(100_000, 4, 12345).unwrap();
    assert_eq!(result.iterations, 100_000);
    assert_eq!(result.inside, 78_450);

    // 100_000 / 3 leaves a remainder of one, which is not sampled
    let result = estimate_pi_parallel(100_000, 3, 12345).unwrap();
    assert_eq!(result.iterations, 99_999);
    assert_eq!(result.inside, 78_415);
    assert_eq!(result.pi_estimate, 4.0 * 78_415.0 / 99_999.0);
}

#[test]
fn test_convergence() {
    let result = estimate_pi(10_000_000, 12345).unwrap();
    assert!(
        result.error < 0.01,
        "estimate {} too far from pi",
        result.pi_estimate
    );
}

#[test]
fn test_single_worker_matches_single_thread() {
    let single = estimate_pi(50_000, 777).unwrap();
    for strategy in code::available_strategies() {
        let parallel = estimate_pi_parallel_with(
            50_000,
            1,
            777,
            code::count_inside_original,
            strategy.function,
        )
        .unwrap();
        assert_eq!(parallel, single, "strategy {}", strategy.name);
    }
}

#[test]
fn test_derived_seeds() {
    assert_eq!(derive_worker_seed(12345, 0), 12345);
    assert_eq!(derive_worker_seed(12345, 1), 0x9e3779b97f4aac4e);
    assert_eq!(derive_worker_seed(12345, 2), 0x3c6ef372fe952863);
    assert_eq!(derive_worker_seed(12345, 3), 0xdaa66d2c7ddfa478);
    // wraps instead of overflowing
    assert_eq!(derive_worker_seed(u64::MAX, 1), SEED_MULTIPLIER - 1);
}

#[test]
fn test_stream_independence() {
    let tasks = worker_tasks(1000, 4, 12345).unwrap();
    let firsts: Vec<u64> = tasks
        .iter()
        .map(|t| Xoshiro256StarStar::new(t.seed).next_u64())
        .collect();

    for i in 0..tasks.len() {
        for j in (i + 1)..tasks.len() {
            assert_ne!(tasks[i].seed, tasks[j].seed);
            assert_ne!(firsts[i], firsts[j]);
        }
    }
}

#[test]
fn test_worker_tasks_split() {
    let tasks = worker_tasks(10, 4, 5).unwrap();
    assert_eq!(tasks.len(), 4);
    for (i, task) in tasks.iter().enumerate() {
        assert_eq!(task.samples, 2);
        assert_eq!(task.worker_index, i as u32);
        assert_eq!(task.seed, derive_worker_seed(5, i as u32));
    }
}

#[test]
fn test_boundary_is_inside() {
    assert!(is_inside(1.0, 0.0));
    assert!(is_inside(0.0, 1.0));
    assert!(is_inside(0.0, 0.0));
    assert!(!is_inside(1.0, 1e-7));
    assert!(!is_inside(0.75, 0.75));
}

#[test]
fn test_zero_iterations_rejected() {
    assert_eq!(estimate_pi(0, 12345), Err(EstimateError::ZeroIterations));
    assert_eq!(
        estimate_pi_parallel(0, 4, 12345),
        Err(EstimateError::ZeroIterations)
    );
    assert_eq!(
        EstimationResult::from_counts(0, 0),
        Err(EstimateError::ZeroIterations)
    );
}

#[test]
fn test_zero_workers_rejected() {
    assert_eq!(
        estimate_pi_parallel(1000, 0, 12345),
        Err(EstimateError::ZeroWorkers)
    );
}

#[test]
fn test_fewer_iterations_than_workers_rejected() {
    assert_eq!(
        estimate_pi_parallel(3, 4, 12345),
        Err(EstimateError::TooFewIterations {
            iterations: 3,
            workers: 4
        })
    );
}

#[test]
fn test_zero_seed_saturates_estimate() {
    // The all-zero state always yields (0, 0), which is inside.
    let result = estimate_pi(100, 0).unwrap();
    assert_eq!(result.inside, 100);
    assert_eq!(result.pi_estimate, 4.0);
}

fn panicking_kernel(_rng: &mut Xoshiro256StarStar, _samples: u64) -> u64 {
    panic!("kernel failure")
}

fn panics_on_worker_one(rng: &mut Xoshiro256StarStar, samples: u64) -> u64 {
    // Worker 1 is recognised by its freshly seeded state.
    if rng.state() == Xoshiro256StarStar::new(derive_worker_seed(1, 1)).state() {
        panic!("kernel failure on worker 1");
    }
    code::count_inside_original(rng, samples)
}

#[test]
fn test_worker_panic_is_reported() {
    let tasks = worker_tasks(100, 2, 1).unwrap();
    for strategy in code::available_strategies() {
        let outcome =
            std::panic::catch_unwind(|| (strategy.function)(&tasks, panicking_kernel));
        assert_eq!(
            outcome.unwrap_or_else(|_| panic!("strategy {} unwound", strategy.name)),
            Err(EstimateError::WorkerPanicked(0)),
            "strategy {}",
            strategy.name
        );
    }
}

#[test]
fn test_single_worker_panic_is_reported_by_index() {
    let tasks = worker_tasks(300, 3, 1).unwrap();
    for strategy in code::available_strategies() {
        let outcome =
            std::panic::catch_unwind(|| (strategy.function)(&tasks, panics_on_worker_one));
        assert_eq!(
            outcome.unwrap_or_else(|_| panic!("strategy {} unwound", strategy.name)),
            Err(EstimateError::WorkerPanicked(1)),
            "strategy {}",
            strategy.name
        );
    }
}

#[test]
fn test_all_kernels_match_original() {
    let kernels = code::available_kernels();
    for seed in [1u64, 12345, u64::MAX] {
        for samples in [0u64, 1, 255, 256, 257, 10_000] {
            let mut reference = Xoshiro256StarStar::new(seed);
            let expected = code::count_inside_original(&mut reference, samples);
            for kernel in &kernels {
                let mut rng = Xoshiro256StarStar::new(seed);
                assert_eq!(
                    (kernel.function)(&mut rng, samples),
                    expected,
                    "kernel {} seed {} samples {}",
                    kernel.name,
                    seed,
                    samples
                );
                assert_eq!(rng, reference, "kernel {} stream position", kernel.name);
            }
        }
    }
}

#[test]
fn test_lookup_by_name() {
    assert!(code::find_kernel(code::DEFAULT_KERNEL).is_some());
    assert!(code::find_kernel("batched").is_some());
    assert!(code::find_kernel("nope").is_none());
    assert!(code::find_strategy(code::DEFAULT_STRATEGY).is_some());
    assert!(code::find_strategy("rayon").is_some());
}

#[test]
fn test_default_worker_count_positive() {
    assert!(default_worker_count() >= 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_parallel_one_worker_equals_single(seed in any::<u64>(), iterations in 1u64..2000) {
        let single = estimate_pi(iterations, seed).unwrap();
        let parallel = estimate_pi_parallel(iterations, 1, seed).unwrap();
        prop_assert_eq!(single, parallel);
    }

    #[test]
    fn prop_parallel_sum_of_workers(seed in any::<u64>(), workers in 1u32..8, per_worker in 1u64..500) {
        let iterations = per_worker * u64::from(workers);
        let result = estimate_pi_parallel(iterations, workers, seed).unwrap();
        let expected: u64 = (0..workers)
            .map(|i| {
                let mut rng = Xoshiro256StarStar::new(derive_worker_seed(seed, i));
                code::count_inside_original(&mut rng, per_worker)
            })
            .sum();
        prop_assert_eq!(result.inside, expected);
        prop_assert_eq!(result.iterations, iterations);
    }

    #[test]
    fn prop_derived_seeds_distinct(base in any::<u64>()) {
        let seeds: Vec<u64> = (0..4).map(|i| derive_worker_seed(base, i)).collect();
        for i in 0..4 {
            for j in (i + 1)..4 {
                prop_assert_ne!(seeds[i], seeds[j]);
            }
        }
    }

    #[test]
    fn prop_estimate_bounded(seed in any::<u64>(), iterations in 1u64..1000) {
        let result = estimate_pi(iterations, seed).unwrap();
        prop_assert!(result.inside <= iterations);
        prop_assert!((0.0..=4.0).contains(&result.pi_estimate));
        prop_assert_eq!(result.error, (result.pi_estimate - PI_THEORETICAL).abs());
    }
}
