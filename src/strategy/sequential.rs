// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Selection guaranteeing a consecutive pair.

use crate::combination::Combination;
use crate::pool::Pool;
use crate::strategy::Strategy;
use rand::{Rng, RngCore};
use std::collections::BTreeSet;

/// Guarantees at least one pair of consecutive values.
///
/// Seeds the result with `{v, v+1}` for a uniform `v` in `[1, n-1]`, then
/// fills the remaining slots with uniform draws. The seeded pair makes the
/// predicate hold by construction, but the final check is kept: it is the
/// strategy's contract with the driver, not an optimization.
///
/// Unsatisfiable when `k < 2` or `n < 2`; those attempts fail immediately
/// and the driver falls back to the unconstrained draw.
#[derive(Debug)]
pub struct SequentialIncluded;

impl Strategy for SequentialIncluded {
    fn attempt(&self, pool: &Pool, k: usize, rng: &mut dyn RngCore) -> Option<Combination> {
        if k < 2 || pool.len() < 2 || k > pool.len() {
            return None;
        }

        let mut picked = BTreeSet::new();
        // Leave room for v + 1 at the top of the pool.
        let v = rng.gen_range(1..pool.max());
        picked.insert(v);
        picked.insert(v + 1);
        while picked.len() < k {
            picked.insert(pool.draw(rng));
        }

        let combo = Combination::try_new(picked, k, pool)?;
        if combo.has_adjacent_pair() {
            Some(combo)
        } else {
            None
        }
    }

    fn name(&self) -> &'static str {
        "sequential_included"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_always_contains_adjacent_pair() {
        let pool = Pool::new(45);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let combo = SequentialIncluded.attempt(&pool, 6, &mut rng).unwrap();
            assert_eq!(combo.len(), 6);
            assert!(combo.has_adjacent_pair());
        }
    }

    #[test]
    fn test_single_pick_cannot_satisfy() {
        let pool = Pool::new(45);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(SequentialIncluded.attempt(&pool, 1, &mut rng).is_none());
    }

    #[test]
    fn test_singleton_pool_cannot_satisfy() {
        let pool = Pool::new(1);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(SequentialIncluded.attempt(&pool, 1, &mut rng).is_none());
    }

    #[test]
    fn test_pair_pool_exhaustive() {
        // n = 2, k = 2: only {1, 2} is possible, and it is adjacent.
        let pool = Pool::new(2);
        let mut rng = StdRng::seed_from_u64(7);
        let combo = SequentialIncluded.attempt(&pool, 2, &mut rng).unwrap();
        assert_eq!(combo.as_slice(), &[1, 2]);
    }
}
