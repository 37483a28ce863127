// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The combination value type.
//!
//! A [`Combination`] is exactly `k` distinct integers from a pool,
//! materialized in ascending order. The invariant is enforced at
//! construction; strategies and the retry driver only ever hand callers a
//! value that already satisfies it.

use crate::pool::primes::is_prime;
use crate::pool::Pool;
use std::collections::BTreeSet;
use std::fmt;

/// An ordered, duplicate-free selection of `k` integers from a pool.
///
/// Invariant: all values distinct, all in `[1, n]`, stored ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    values: Vec<u32>,
}

impl Combination {
    /// Validate candidate values into a combination.
    ///
    /// Returns `None` unless the candidates are exactly `k` distinct values,
    /// each inside the pool. Strategies use this as their final guard: a
    /// construction slip (duplicate pick, short partition) becomes a failed
    /// attempt rather than a malformed result.
    pub fn try_new(
        candidates: impl IntoIterator<Item = u32>,
        k: usize,
        pool: &Pool,
    ) -> Option<Self> {
        let values: BTreeSet<u32> = candidates.into_iter().collect();
        if values.len() != k {
            return None;
        }
        if !values.iter().all(|&v| pool.contains(v)) {
            return None;
        }
        Some(Self {
            values: values.into_iter().collect(),
        })
    }

    /// Build from a set already known to be valid (drawn from the pool, size
    /// checked by the caller). BTreeSet iteration order gives ascending
    /// values for free.
    pub(crate) fn from_set(values: BTreeSet<u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// The values in ascending order.
    pub fn as_slice(&self) -> &[u32] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: u32) -> bool {
        self.values.binary_search(&value).is_ok()
    }

    /// Number of even values.
    pub fn count_even(&self) -> usize {
        self.values.iter().filter(|&&v| v % 2 == 0).count()
    }

    /// Number of odd values.
    pub fn count_odd(&self) -> usize {
        self.len() - self.count_even()
    }

    /// Number of prime values.
    pub fn count_primes(&self) -> usize {
        self.values.iter().filter(|&&v| is_prime(v)).count()
    }

    /// Whether any two values differ by exactly 1.
    ///
    /// Values are sorted, so only neighbors need checking.
    pub fn has_adjacent_pair(&self) -> bool {
        self.values.windows(2).any(|w| w[1] - w[0] == 1)
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}
