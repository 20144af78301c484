// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use hmac::{Hmac, Mac};
use num_bigint_dig::BigUint;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::util::unsigned_be_bytes;

type HmacSha256 = Hmac<Sha256>;

/// The keyed round function of the Feistel network.
///
/// Construction binds the MAC key to both the modulus and the tweak: the
/// long-lived key is `HMAC-SHA256(key, |n| ‖ n ‖ |t| ‖ t)` over the
/// canonical header, where integers are minimal unsigned big-endian and
/// every length is a 4-byte big-endian prefix. Changing either the modulus
/// or the tweak therefore yields an unrelated key stream.
///
/// The derived key lives for one encrypt or decrypt call and is wiped from
/// memory on drop. `num-bigint-dig` digits are not secret here: `a` is a
/// public factor of the public modulus.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct RoundFunction {
    key: [u8; 32],

    /// Reduction modulus for the round values; the larger factor of `n`,
    /// used in every round regardless of which half is being processed.
    #[zeroize(skip)]
    a: BigUint,
}

impl RoundFunction {
    pub(crate) fn derive(modulus: &BigUint, a: &BigUint, key: &[u8], tweak: &[u8]) -> Self {
        let n_bytes = unsigned_be_bytes(modulus);

        let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
        mac.update(&(n_bytes.len() as u32).to_be_bytes());
        mac.update(&n_bytes);
        mac.update(&(tweak.len() as u32).to_be_bytes());
        mac.update(tweak);

        let mut derived = [0u8; 32];
        derived.copy_from_slice(&mac.finalize().into_bytes());

        Self {
            key: derived,
            a: a.clone(),
        }
    }

    /// The per-round pseudo-random value
    /// `OS2IP(HMAC-SHA256(K, enc32(round) ‖ enc_var(r))) mod a`.
    ///
    /// `enc_var` keeps its 4-byte length prefix even for `r = 0`, whose
    /// payload is empty. The 32-byte MAC output is huge next to `a`
    /// (`a < 2^128`), so the reduction bias is at most `2^-128`.
    pub(crate) fn eval(&self, round: u32, r: &BigUint) -> BigUint {
        let r_bytes = unsigned_be_bytes(r);

        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC accepts keys of any length");
        mac.update(&round.to_be_bytes());
        mac.update(&(r_bytes.len() as u32).to_be_bytes());
        mac.update(&r_bytes);

        BigUint::from_bytes_be(&mac.finalize().into_bytes()) % &self.a
    }
}
