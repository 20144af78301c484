// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_traits::Zero;

use crate::{Error, Result, MAX_MODULUS_BYTES};

/// Checks the shared preconditions of `encrypt` and `decrypt`.
///
/// All violations here are argument errors; primality of the modulus is
/// only discovered later, during factorization.
pub(crate) fn validate(
    modulus: &BigUint,
    value: &BigUint,
    key: &[u8],
    tweak: &[u8],
) -> Result<()> {
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }
    if tweak.is_empty() {
        return Err(Error::EmptyTweak);
    }
    // The wire format prefixes the tweak with a 4-byte length.
    if u32::try_from(tweak.len()).is_err() {
        return Err(Error::TweakTooLong);
    }
    if value >= modulus {
        return Err(Error::InputOutOfRange {
            value: value.clone(),
            modulus: modulus.clone(),
        });
    }
    if *modulus < BigUint::from(2u32) {
        return Err(Error::ModulusTooSmall);
    }
    let width = (modulus.bits() + 7) / 8;
    if width > MAX_MODULUS_BYTES {
        return Err(Error::ModulusTooLarge(width));
    }
    Ok(())
}

/// Minimal unsigned big-endian encoding; zero encodes as the empty string.
pub(crate) fn unsigned_be_bytes(value: &BigUint) -> Vec<u8> {
    if value.is_zero() {
        Vec::new()
    } else {
        value.to_bytes_be()
    }
}

/// Narrows a validated modulus to `u128`.
///
/// Callers must have checked the [`MAX_MODULUS_BYTES`] bound first; a wider
/// value panics.
pub(crate) fn to_u128(value: &BigUint) -> u128 {
    let bytes = value.to_bytes_be();
    let mut buf = [0u8; 16];
    buf[16 - bytes.len()..].copy_from_slice(&bytes);
    u128::from_be_bytes(buf)
}

pub(crate) fn from_u128(value: u128) -> BigUint {
    BigUint::from_bytes_be(&value.to_be_bytes())
}
