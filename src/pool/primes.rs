// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Primality test for pool values.

/// Trial-division primality test.
///
/// Short-circuits on 2 and 3, then checks divisors of the form `6k ± 1` up
/// to `sqrt(x)`. Only used by the prime-count strategy, where candidates are
/// small pool values, so trial division is more than fast enough.
pub fn is_prime(x: u32) -> bool {
    if x <= 1 {
        return false;
    }
    if x <= 3 {
        return true;
    }
    if x % 2 == 0 || x % 3 == 0 {
        return false;
    }
    let mut i = 5u32;
    while i * i <= x {
        if x % i == 0 || x % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
    }

    #[test]
    fn test_primes_up_to_45() {
        let primes: Vec<u32> = (1..=45).filter(|&x| is_prime(x)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43]
        );
    }

    #[test]
    fn test_squares_of_primes_are_composite() {
        // 25 and 49 are the first composites not caught by the 2/3 checks.
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(121));
    }
}
