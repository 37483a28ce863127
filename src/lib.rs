// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constrained lottery-number generation with pluggable selection strategies.
//!
//! Produces one ordered, duplicate-free combination of `k` integers drawn
//! from the pool `1..=n`, optionally subject to a structural constraint
//! (parity balance, a guaranteed adjacent pair, a minimum prime count).
//!
//! # Architecture
//!
//! Three layers, each independent of display and persistence concerns:
//!
//! ## Number Pool (Immutable)
//!
//! The candidate domain `1..=n` plus its fair-shuffle and uniform-draw
//! primitives. Pools are cheap value objects; nothing is shared between
//! calls beyond the caller's random source.
//!
//! ## Strategy Engine
//!
//! Interchangeable [`Strategy`] implementations behind a common trait. Each
//! call is a *single* construction attempt: it either satisfies its
//! predicate and yields a [`Combination`], or reports failure with `None`.
//! Strategies hold no mutable state and are safely repeatable.
//!
//! ## Bounded Retry Driver
//!
//! [`Generator`] turns a single-attempt strategy into a terminating
//! generator: retry up to an attempt ceiling, then fall back to the
//! unconstrained uniform draw (which cannot fail once `n >= k` has been
//! validated). Fallback surfaces as a typed diagnostic on the result, never
//! as an error.
//!
//! # Example
//!
//! ```
//! use lotto_gen::Generator;
//!
//! let generation = Generator::new().generate(45, 6, "even_odd_balanced")?;
//! assert_eq!(generation.numbers.len(), 6);
//! # Ok::<(), lotto_gen::ConfigError>(())
//! ```

pub mod combination;
pub mod engine;
pub mod error;
pub mod pool;
pub mod strategy;

// Re-export commonly used types
pub use combination::Combination;
pub use engine::{generate, Fallback, Generation, Generator};
pub use error::ConfigError;
pub use pool::Pool;
pub use strategy::{Strategy, StrategyKind, StrategyParams};
