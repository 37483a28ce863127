// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use lotto_gen::Generation;

/// Assert the shape invariant every generation must satisfy: exactly `k`
/// distinct values, each in `[1, n]`, in ascending order.
pub fn assert_valid_generation(generation: &Generation, n: u32, k: usize) {
    let values = generation.numbers.as_slice();
    assert_eq!(values.len(), k, "expected {} values, got {:?}", k, values);
    for w in values.windows(2) {
        assert!(w[0] < w[1], "not strictly ascending: {:?}", values);
    }
    for &v in values {
        assert!(v >= 1 && v <= n, "value {} outside [1, {}]", v, n);
    }
}
