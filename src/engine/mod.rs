// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bounded retry driver.
//!
//! Converts a single-attempt [`Strategy`](crate::strategy::Strategy) into a
//! terminating generator. The
//! driver owns the attempt counter: it invokes the strategy until the
//! predicate is satisfied or the ceiling is reached, then falls back to the
//! unconstrained draw, which cannot fail once `(n, k)` has been validated.
//!
//! Fallback is not an error. It surfaces as a [`Fallback`] diagnostic on the
//! [`Generation`] result plus a `tracing` warning naming the strategy that
//! failed to converge; the caller still receives a valid combination.
//!
//! Each call gets its own attempt counter and random draws, so any number of
//! concurrent callers can share one [`Generator`] without synchronization.

use crate::combination::Combination;
use crate::error::ConfigError;
use crate::pool::Pool;
use crate::strategy::{self, random, StrategyKind, StrategyParams};
use rand::RngCore;

/// Default attempt ceiling before falling back to the unconstrained draw.
pub const MAX_ATTEMPTS: usize = 1000;

/// Diagnostic recorded when a strategy hit the attempt ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallback {
    /// The strategy that failed to converge.
    pub strategy: StrategyKind,
    /// Attempts consumed before giving up.
    pub attempts: usize,
}

/// One successful generation.
///
/// Always a valid `k`-combination; `fallback` is set when the requested
/// strategy did not converge and the unconstrained draw produced the result
/// instead.
#[derive(Debug, Clone)]
pub struct Generation {
    /// The generated combination, ascending.
    pub numbers: Combination,
    /// The strategy that was requested (not necessarily the one that
    /// produced `numbers`; see `fallback`).
    pub strategy: StrategyKind,
    /// Attempts consumed, counting the successful one.
    pub attempts: usize,
    /// Set when the attempt ceiling was reached.
    pub fallback: Option<Fallback>,
}

/// Stateless generation driver.
///
/// Holds only the attempt ceiling. `generate` draws from the thread RNG;
/// `generate_with` takes an explicit random source for deterministic tests
/// and embedding.
#[derive(Debug, Clone, Copy)]
pub struct Generator {
    max_attempts: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    pub fn new() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Override the attempt ceiling (mainly for tests; 1000 is plenty for
    /// every satisfiable strategy at sane pool sizes).
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Generate one combination of `k` distinct values from `1..=n`.
    ///
    /// `identifier` is resolved via [`StrategyKind::from_identifier`], so
    /// unknown strategies alias `random`. Strategy parameters take their
    /// defaults (`min_primes = 2`).
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if `n == 0`, `k == 0`, or `k > n`. Nothing else
    /// propagates: constrained strategies that cannot converge fall back to
    /// the unconstrained draw.
    ///
    /// # Example
    ///
    /// ```
    /// use lotto_gen::Generator;
    ///
    /// let generation = Generator::new().generate(45, 6, "sequential_included")?;
    /// assert!(generation.numbers.has_adjacent_pair());
    /// # Ok::<(), lotto_gen::ConfigError>(())
    /// ```
    pub fn generate(&self, n: u32, k: usize, identifier: &str) -> Result<Generation, ConfigError> {
        let kind = StrategyKind::from_identifier(identifier);
        self.generate_with(
            &mut rand::thread_rng(),
            n,
            k,
            kind,
            StrategyParams::default(),
        )
    }

    /// Generate with an explicit random source, strategy kind, and
    /// parameters.
    pub fn generate_with(
        &self,
        rng: &mut dyn RngCore,
        n: u32,
        k: usize,
        kind: StrategyKind,
        params: StrategyParams,
    ) -> Result<Generation, ConfigError> {
        ConfigError::check(n, k)?;
        let pool = Pool::new(n);
        let strategy = strategy::build(kind, &params);

        for attempt in 1..=self.max_attempts {
            if let Some(numbers) = strategy.attempt(&pool, k, rng) {
                return Ok(Generation {
                    numbers,
                    strategy: kind,
                    attempts: attempt,
                    fallback: None,
                });
            }
        }

        tracing::warn!(
            strategy = strategy.name(),
            attempts = self.max_attempts,
            "max attempts reached, falling back to random"
        );
        let numbers = random::draw_unconstrained(&pool, k, rng);
        Ok(Generation {
            numbers,
            strategy: kind,
            attempts: self.max_attempts,
            fallback: Some(Fallback {
                strategy: kind,
                attempts: self.max_attempts,
            }),
        })
    }
}

/// Convenience wrapper: one combination from a default [`Generator`].
pub fn generate(n: u32, k: usize, identifier: &str) -> Result<Generation, ConfigError> {
    Generator::new().generate(n, k, identifier)
}
