// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Even/odd balanced selection.

use crate::combination::Combination;
use crate::pool::Pool;
use crate::strategy::Strategy;
use rand::RngCore;

/// Balanced parity split: `k/2` even values and `k - k/2` odd values.
///
/// At the usual `k = 6` this is the exact 3/3 split. Shuffles the pool,
/// partitions by parity in shuffled order, and takes the head of each
/// partition, so the picked evens and odds are themselves uniform among the
/// pool's evens and odds. The final validation catches any short partition
/// (a pool of 4 has no 3 odds to give, for instance) by failing the attempt.
#[derive(Debug)]
pub struct EvenOddBalanced;

impl Strategy for EvenOddBalanced {
    fn attempt(&self, pool: &Pool, k: usize, rng: &mut dyn RngCore) -> Option<Combination> {
        let need_even = k / 2;
        let need_odd = k - need_even;

        let shuffled = pool.shuffled(rng);
        let (evens, odds): (Vec<u32>, Vec<u32>) = shuffled.into_iter().partition(|&v| v % 2 == 0);
        if evens.len() < need_even || odds.len() < need_odd {
            return None;
        }

        let picked = evens[..need_even]
            .iter()
            .chain(odds[..need_odd].iter())
            .copied();
        Combination::try_new(picked, k, pool)
    }

    fn name(&self) -> &'static str {
        "even_odd_balanced"
    }
}
