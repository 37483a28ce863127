// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Caller-facing error types.
//!
//! Only configuration problems propagate out of [`generate`]; everything a
//! strategy can get wrong at runtime is absorbed by the retry driver's
//! fallback and surfaced as a diagnostic, not an error.
//!
//! [`generate`]: crate::Generator::generate

use thiserror::Error;

/// Invalid `(n, k)` configuration, detected before any generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The pool is empty (`n == 0`); there is nothing to draw from.
    #[error("pool size must be at least 1")]
    EmptyPool,

    /// The pick count is zero (`k == 0`); an empty combination is not a draw.
    #[error("pick count must be at least 1")]
    ZeroPickCount,

    /// More numbers requested than the pool holds (`k > n`); the
    /// unconstrained draw could never terminate.
    #[error("cannot pick {k} distinct numbers from a pool of {n}")]
    PickCountExceedsPool { k: usize, n: u32 },
}

impl ConfigError {
    /// Validate a `(n, k)` pair, failing fast per the generation contract.
    pub(crate) fn check(n: u32, k: usize) -> Result<(), ConfigError> {
        if n == 0 {
            return Err(ConfigError::EmptyPool);
        }
        if k == 0 {
            return Err(ConfigError::ZeroPickCount);
        }
        if k as u64 > n as u64 {
            return Err(ConfigError::PickCountExceedsPool { k, n });
        }
        Ok(())
    }
}
