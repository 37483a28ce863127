// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Selection with a minimum prime count.

use crate::combination::Combination;
use crate::pool::primes::is_prime;
use crate::pool::Pool;
use crate::strategy::Strategy;
use rand::RngCore;

/// At least `min_primes` of the picked values are prime.
///
/// Shuffles the pool, partitions into primes and non-primes in shuffled
/// order, and takes `min_primes` primes plus `k - min_primes` non-primes.
/// The result therefore contains *exactly* `min_primes` primes, which
/// satisfies the at-least predicate.
///
/// Structurally unsatisfiable requests (`min_primes > k`, or more primes
/// than the pool holds) fail every attempt, leaving the driver to fall back.
#[derive(Debug)]
pub struct PrimeCombination {
    /// Minimum number of primes in the result. Default 2 via
    /// [`StrategyParams`](crate::strategy::StrategyParams).
    pub min_primes: usize,
}

impl Strategy for PrimeCombination {
    fn attempt(&self, pool: &Pool, k: usize, rng: &mut dyn RngCore) -> Option<Combination> {
        let need_other = k.checked_sub(self.min_primes)?;

        let shuffled = pool.shuffled(rng);
        let (primes, others): (Vec<u32>, Vec<u32>) =
            shuffled.into_iter().partition(|&v| is_prime(v));
        if primes.len() < self.min_primes || others.len() < need_other {
            return None;
        }

        let picked = primes[..self.min_primes]
            .iter()
            .chain(others[..need_other].iter())
            .copied();
        Combination::try_new(picked, k, pool)
    }

    fn name(&self) -> &'static str {
        "prime_combination"
    }
}
