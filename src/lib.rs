// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # FE1 Format-Preserving Encryption
//!
//! Feistel-network cipher over an arbitrary integer modulus `n`, with
//! HMAC-SHA256 as the round function. Encryption is a bijection on
//! `{0, 1, ..., n-1}`: every plaintext maps to a distinct ciphertext in the
//! same range, and decryption inverts it exactly.
//!
//! Reference: [Black & Rogaway (2002), Ciphers with Arbitrary Finite Domains](https://link.springer.com/chapter/10.1007/3-540-45760-7_9)
//!
//! The modulus must be composite (the cipher works over the factorization
//! `n = a * b`) and fit in [`MAX_MODULUS_BYTES`] bytes. A non-secret tweak
//! diversifies the permutation per call without changing the key.
//!
//! ```
//! use fe1::{decrypt, encrypt};
//! use num_bigint_dig::BigUint;
//!
//! let modulus = BigUint::from(10_000u32);
//! let plaintext = BigUint::from(1234u32);
//! let key = [0x20, 0x01, 0x30, 0x50, 0x60, 0x70];
//! let tweak = [0x00, 0x01, 0x02, 0x03, 0x04];
//!
//! let ciphertext = encrypt(&modulus, &plaintext, &key, &tweak).unwrap();
//! assert!(ciphertext < modulus);
//!
//! let recovered = decrypt(&modulus, &ciphertext, &key, &tweak).unwrap();
//! assert_eq!(recovered, plaintext);
//! ```
//!
//! ## Security
//!
//! The scheme runs a fixed 3 rounds, matching the construction it derives
//! from; it is not an approved NIST mode (see FF1/FF3 for those). Keys and
//! tweaks must be at least one byte. The per-call MAC key derived from
//! `(modulus, tweak, key)` is zeroized on drop via the `zeroize` crate.
//! No side-channel guarantees are made beyond what HMAC-SHA256 provides.

mod decrypt;
mod encrypt;
mod error;
mod factor;
mod prf;
mod util;

pub use decrypt::*;
pub use encrypt::*;
pub use error::*;

/// Maximum width of the modulus: `n` must fit in this many bytes
/// (big-endian, unsigned). Bounds factorization cost and the PRF domain;
/// kept at 16 for compatibility with existing FE1 implementations.
pub const MAX_MODULUS_BYTES: usize = 16;

/// Number of Feistel rounds, fixed by the original FE1 design.
pub const ROUNDS: u32 = 3;
