// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Unconstrained uniform selection, the baseline every other strategy falls
//! back to.

use crate::combination::Combination;
use crate::pool::Pool;
use crate::strategy::Strategy;
use rand::RngCore;
use std::collections::BTreeSet;

/// Uniform draw of `k` distinct values, no structural constraint.
///
/// Accumulates uniform draws into a set until it reaches size `k`. Given
/// `k <= n` this always terminates, so a single attempt never fails; the
/// retry driver relies on that when it falls back here.
#[derive(Debug)]
pub struct Random;

/// Draw `k` distinct values from the pool with no constraint.
///
/// Shared between [`Random`] and the driver's fallback path. Callers must
/// have validated `k <= pool.len()`; the loop cannot terminate otherwise.
pub(crate) fn draw_unconstrained(pool: &Pool, k: usize, rng: &mut dyn RngCore) -> Combination {
    debug_assert!(k <= pool.len());
    let mut picked = BTreeSet::new();
    while picked.len() < k {
        picked.insert(pool.draw(rng));
    }
    Combination::from_set(picked)
}

impl Strategy for Random {
    fn attempt(&self, pool: &Pool, k: usize, rng: &mut dyn RngCore) -> Option<Combination> {
        if k > pool.len() {
            return None;
        }
        Some(draw_unconstrained(pool, k, rng))
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
