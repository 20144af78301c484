// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_integer::Integer;

use crate::factor::balanced_factors;
use crate::prf::RoundFunction;
use crate::util::validate;
use crate::{Result, ROUNDS};

/// Encrypts `plaintext` into the same range `[0, modulus)`.
///
/// The modulus must be composite, at least 2, and fit in
/// [`crate::MAX_MODULUS_BYTES`] bytes; `key` and `tweak` must be nonempty.
/// For a fixed `(modulus, key, tweak)` the mapping is a bijection on
/// `[0, modulus)`, inverted exactly by [`crate::decrypt()`].
///
/// The call is pure and reentrant: no shared state, same inputs always
/// produce the same ciphertext.
///
/// ## Errors
///
/// [`crate::ErrorKind::InvalidArgument`] for contract violations caught up
/// front, [`crate::ErrorKind::Fpe`] when the modulus turns out to be prime.
pub fn encrypt(modulus: &BigUint, plaintext: &BigUint, key: &[u8], tweak: &[u8]) -> Result<BigUint> {
    validate(modulus, plaintext, key, tweak)?;
    let (a, b) = balanced_factors(modulus)?;
    let f = RoundFunction::derive(modulus, &a, key, tweak);

    // Each round re-splits x = l*b + r, masks the large half with the
    // round value, and reassembles with r as the high digit. Every round
    // maps [0, n) onto [0, n).
    let mut x = plaintext.clone();
    for round in 0..ROUNDS {
        let (l, r) = x.div_rem(&b);
        let w = (l + f.eval(round, &r)) % &a;
        x = &a * r + w;
    }
    Ok(x)
}
