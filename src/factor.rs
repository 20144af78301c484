// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_integer::Roots;

use crate::util::{from_u128, to_u128};
use crate::{Error, Result};

/// Splits a composite modulus into `(a, b)` with `a * b = n` and
/// `a >= b > 1`, choosing `b` as close to `sqrt(n)` as possible so the two
/// Feistel halves stay balanced.
///
/// Deterministic downward trial division: the first divisor found at or
/// below the integer square root wins, so encrypt and decrypt always agree
/// on the split. A prime modulus has no such divisor and is reported as
/// [`Error::PrimeModulus`].
///
/// The modulus must already have passed validation; the search runs on
/// `u128`, which the [`crate::MAX_MODULUS_BYTES`] bound guarantees is wide
/// enough.
pub(crate) fn balanced_factors(modulus: &BigUint) -> Result<(BigUint, BigUint)> {
    let n = to_u128(modulus);

    let mut d = n.sqrt();
    while d >= 2 {
        if n % d == 0 {
            return Ok((from_u128(n / d), from_u128(d)));
        }
        d -= 1;
    }

    Err(Error::PrimeModulus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors(n: u128) -> (BigUint, BigUint) {
        balanced_factors(&from_u128(n)).unwrap()
    }

    fn pair(a: u128, b: u128) -> (BigUint, BigUint) {
        (from_u128(a), from_u128(b))
    }

    #[test]
    fn perfect_squares_split_evenly() {
        assert_eq!(factors(4), pair(2, 2));
        assert_eq!(factors(36), pair(6, 6));
        assert_eq!(factors(10_000), pair(100, 100));
    }

    #[test]
    fn b_is_the_divisor_closest_to_the_square_root() {
        assert_eq!(factors(12), pair(4, 3));
        assert_eq!(factors(15), pair(5, 3));
        assert_eq!(factors(5001), pair(1667, 3));
        assert_eq!(factors(9_999_999_999_999_999), pair(100_000_001, 99_999_999));
    }

    #[test]
    fn lopsided_semiprimes_still_factor() {
        // 9998 = 2 * 4999 with 4999 prime; the only divisor below the root is 2.
        assert_eq!(factors(9998), pair(4999, 2));
    }

    #[test]
    fn largest_allowed_modulus_factors() {
        // 2^128 - 1 = (2^64 + 1)(2^64 - 1), and 2^64 - 1 is exactly the
        // integer square root, so the search succeeds on its first probe.
        assert_eq!(factors(u128::MAX), pair((1u128 << 64) + 1, (1u128 << 64) - 1));
    }

    #[test]
    fn primes_are_rejected() {
        for p in [2u128, 3, 5, 13, 10_007] {
            assert_eq!(balanced_factors(&from_u128(p)), Err(Error::PrimeModulus));
        }
    }
}
