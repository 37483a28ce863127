// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The number pool: the immutable candidate domain `1..=n`.
//!
//! A [`Pool`] supplies the two randomness primitives every strategy is built
//! from: a fair shuffle of the whole domain and a single uniform draw. The
//! pool itself never changes; all nondeterminism comes from the caller's
//! random source, so independent calls are never entangled.

pub mod primes;

use rand::{Rng, RngCore};

/// The ordered domain of selectable integers `1..=n`.
///
/// Pools are small value objects constructed per generation call. Any
/// strategy needs `n >= k` to be satisfiable; the generation entry points
/// validate that before a pool is ever used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pool {
    n: u32,
}

impl Pool {
    /// Create the pool `1..=n`.
    pub fn new(n: u32) -> Self {
        Self { n }
    }

    /// Largest selectable number.
    pub fn max(&self) -> u32 {
        self.n
    }

    /// Number of selectable values.
    pub fn len(&self) -> usize {
        self.n as usize
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Whether `value` lies in `[1, n]`.
    pub fn contains(&self, value: u32) -> bool {
        value >= 1 && value <= self.n
    }

    /// The domain in ascending order.
    pub fn numbers(&self) -> Vec<u32> {
        (1..=self.n).collect()
    }

    /// A uniformly random permutation of the domain.
    ///
    /// Fisher–Yates over a fresh copy: walk from the last index down to 1,
    /// swapping each position with a partner drawn uniformly from `[0, i]`.
    /// The pool is never mutated; every call permutes its own copy.
    pub fn shuffled(&self, rng: &mut dyn RngCore) -> Vec<u32> {
        let mut numbers = self.numbers();
        for i in (1..numbers.len()).rev() {
            let j = rng.gen_range(0..=i);
            numbers.swap(i, j);
        }
        numbers
    }

    /// One uniformly random value in `[1, n]`.
    ///
    /// # Panics
    ///
    /// Panics if the pool is empty. Generation entry points validate
    /// `n >= 1` before drawing.
    pub fn draw(&self, rng: &mut dyn RngCore) -> u32 {
        rng.gen_range(1..=self.n)
    }
}
