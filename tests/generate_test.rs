// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the generation entry points.
//!
//! These tests validate the caller-visible contract:
//! - Every strategy identifier yields a well-formed combination
//! - Configuration errors fail fast, nothing else propagates
//! - Unknown identifiers alias random
//! - Unsatisfiable strategies fall back in bounded time with a diagnostic
//! - Repeated calls vary (no caching)

mod common;

use common::assert_valid_generation;
use lotto_gen::{generate, ConfigError, Generator, StrategyKind, StrategyParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use strum::IntoEnumIterator;

#[test]
fn test_every_kind_yields_valid_shape() {
    let generator = Generator::new();
    let mut rng = StdRng::seed_from_u64(7);
    for kind in StrategyKind::iter() {
        for _ in 0..50 {
            let generation = generator
                .generate_with(&mut rng, 45, 6, kind, StrategyParams::default())
                .unwrap();
            assert_valid_generation(&generation, 45, 6);
            assert_eq!(generation.strategy, kind);
        }
    }
}

#[test]
fn test_every_identifier_yields_valid_shape() {
    for identifier in [
        "random",
        "even_odd_balanced",
        "sequential_included",
        "prime_combination",
        "last_digit_distributed",
        "range_balanced",
        "fixed_interval",
        "range_interval_distributed",
    ] {
        let generation = generate(45, 6, identifier).unwrap();
        assert_valid_generation(&generation, 45, 6);
    }
}

#[test]
fn test_unknown_identifier_aliases_random() {
    let generation = generate(45, 6, "no_such_strategy").unwrap();
    assert_valid_generation(&generation, 45, 6);
    assert_eq!(generation.strategy, StrategyKind::Random);
    assert!(generation.fallback.is_none());
}

#[test]
fn test_configuration_errors() {
    assert_eq!(
        generate(6, 7, "random").unwrap_err(),
        ConfigError::PickCountExceedsPool { k: 7, n: 6 }
    );
    assert_eq!(generate(0, 6, "random").unwrap_err(), ConfigError::EmptyPool);
    assert_eq!(
        generate(45, 0, "even_odd_balanced").unwrap_err(),
        ConfigError::ZeroPickCount
    );
}

#[test]
fn test_configuration_checked_before_strategy_runs() {
    // A constrained strategy must not mask a bad configuration.
    let mut rng = StdRng::seed_from_u64(7);
    let err = Generator::new()
        .generate_with(
            &mut rng,
            0,
            6,
            StrategyKind::SequentialIncluded,
            StrategyParams::default(),
        )
        .unwrap_err();
    assert_eq!(err, ConfigError::EmptyPool);
}

#[test]
fn test_unsatisfiable_strategy_falls_back_in_bounded_time() {
    // 10 primes cannot fit in 6 slots; every attempt fails and the driver
    // must fall back to the unconstrained draw.
    let mut rng = StdRng::seed_from_u64(7);
    let generation = Generator::new()
        .generate_with(
            &mut rng,
            45,
            6,
            StrategyKind::PrimeCombination,
            StrategyParams { min_primes: 10 },
        )
        .unwrap();
    assert_valid_generation(&generation, 45, 6);
    let fallback = generation.fallback.expect("fallback diagnostic expected");
    assert_eq!(fallback.strategy, StrategyKind::PrimeCombination);
    assert_eq!(fallback.attempts, 1000);
}

#[test]
fn test_satisfied_strategy_reports_no_fallback() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let generation = Generator::new()
            .generate_with(
                &mut rng,
                45,
                6,
                StrategyKind::EvenOddBalanced,
                StrategyParams::default(),
            )
            .unwrap();
        assert!(generation.fallback.is_none());
        assert_eq!(generation.attempts, 1);
    }
}

#[test]
fn test_repeated_calls_vary() {
    // Shape is idempotent, values are not: over 20 generations of 6-of-45 at
    // least two must differ.
    let mut rng = StdRng::seed_from_u64(7);
    let generator = Generator::new();
    let sets: Vec<Vec<u32>> = (0..20)
        .map(|_| {
            generator
                .generate_with(&mut rng, 45, 6, StrategyKind::Random, StrategyParams::default())
                .unwrap()
                .numbers
                .as_slice()
                .to_vec()
        })
        .collect();
    assert!(sets.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn test_exhaustive_pick_is_whole_pool() {
    let generation = generate(6, 6, "random").unwrap();
    assert_eq!(generation.numbers.as_slice(), &[1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_minimal_configuration() {
    let generation = generate(1, 1, "random").unwrap();
    assert_eq!(generation.numbers.as_slice(), &[1]);
}
