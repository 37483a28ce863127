// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Selection strategies.
//!
//! Each strategy is a pure, stateless policy mapping `(pool, k, rng)` to one
//! combination satisfying its structural predicate, or to `None` when a
//! single construction attempt misses the predicate. Retrying is *not* a
//! strategy concern: the bounded retry driver in [`crate::engine`] owns the
//! attempt ceiling, so an implementation makes exactly one attempt per call.
//!
//! # Organization
//!
//! - `random`: the unconstrained baseline draw (also the fallback target)
//! - `parity`: exact even/odd balance
//! - `sequential`: guaranteed adjacent pair
//! - `prime`: minimum prime count

pub mod parity;
pub mod prime;
pub mod random;
pub mod sequential;

// Re-export the strategy implementations for convenience
pub use parity::EvenOddBalanced;
pub use prime::PrimeCombination;
pub use random::Random;
pub use sequential::SequentialIncluded;

use crate::combination::Combination;
use crate::pool::Pool;
use rand::RngCore;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// A single-attempt selection policy.
///
/// Implementations draw all randomness from the supplied `rng`, hold no
/// state between calls, and never loop on their own predicate: one call is
/// one attempt. A `None` return means "predicate not satisfied this time";
/// the driver decides whether to retry.
pub trait Strategy {
    /// Make one construction attempt.
    ///
    /// Returns a valid `k`-combination satisfying this strategy's predicate,
    /// or `None` if this attempt failed to satisfy it.
    fn attempt(&self, pool: &Pool, k: usize, rng: &mut dyn RngCore) -> Option<Combination>;

    /// Short name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Identifier for a selection strategy.
///
/// String forms are the wire identifiers accepted by
/// [`generate`](crate::Generator::generate): `random`, `even_odd_balanced`,
/// and so on. The last four are recognized but have no defined predicate;
/// they resolve to the unconstrained draw (a documented gap, not a bug).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum StrategyKind {
    /// No constraint; any `k` distinct pool values.
    Random,
    /// Exactly half even, half odd (3/3 at `k = 6`).
    EvenOddBalanced,
    /// At least one pair of consecutive values.
    SequentialIncluded,
    /// At least `min_primes` prime values.
    PrimeCombination,
    /// Placeholder; aliases `random`.
    LastDigitDistributed,
    /// Placeholder; aliases `random`.
    RangeBalanced,
    /// Placeholder; aliases `random`.
    FixedInterval,
    /// Placeholder; aliases `random`.
    RangeIntervalDistributed,
}

impl StrategyKind {
    /// Resolve a caller-supplied identifier.
    ///
    /// Unknown identifiers alias [`StrategyKind::Random`] rather than
    /// failing; the caller always gets a combination.
    pub fn from_identifier(identifier: &str) -> Self {
        match StrategyKind::from_str(identifier) {
            Ok(kind) => kind,
            Err(_) => {
                tracing::debug!(identifier, "unknown strategy identifier, using random");
                StrategyKind::Random
            }
        }
    }
}

/// Strategy-specific parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyParams {
    /// Minimum number of primes for [`StrategyKind::PrimeCombination`].
    pub min_primes: usize,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self { min_primes: 2 }
    }
}

/// Resolve a strategy kind (plus parameters) to its implementation.
///
/// Placeholder kinds degrade to the unconstrained draw with a warning, the
/// same way the unimplemented variants always have.
pub fn build(kind: StrategyKind, params: &StrategyParams) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::Random => Box::new(Random),
        StrategyKind::EvenOddBalanced => Box::new(EvenOddBalanced),
        StrategyKind::SequentialIncluded => Box::new(SequentialIncluded),
        StrategyKind::PrimeCombination => Box::new(PrimeCombination {
            min_primes: params.min_primes,
        }),
        StrategyKind::LastDigitDistributed
        | StrategyKind::RangeBalanced
        | StrategyKind::FixedInterval
        | StrategyKind::RangeIntervalDistributed => {
            tracing::warn!(strategy = %kind, "strategy not implemented, using random");
            Box::new(Random)
        }
    }
}
