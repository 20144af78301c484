// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_integer::Integer;

use crate::factor::balanced_factors;
use crate::prf::RoundFunction;
use crate::util::validate;
use crate::{Result, ROUNDS};

/// Decrypts `ciphertext` back to the plaintext in `[0, modulus)`.
///
/// Inverse of [`crate::encrypt()`]: the same deterministic factorization and
/// derived key, with the rounds replayed in reverse and the round values
/// subtracted instead of added. Failure semantics are identical to
/// encryption's.
pub fn decrypt(
    modulus: &BigUint,
    ciphertext: &BigUint,
    key: &[u8],
    tweak: &[u8],
) -> Result<BigUint> {
    validate(modulus, ciphertext, key, tweak)?;
    let (a, b) = balanced_factors(modulus)?;
    let f = RoundFunction::derive(modulus, &a, key, tweak);

    // Undo x = a*r + w from the highest round down: recover r and w,
    // strip the round value from w, and reassemble x = l*b + r.
    let mut x = ciphertext.clone();
    for round in (0..ROUNDS).rev() {
        let (r, w) = x.div_rem(&a);
        let l = (w + &a - f.eval(round, &r)) % &a;
        x = &b * l + r;
    }
    Ok(x)
}
