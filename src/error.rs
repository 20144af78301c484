// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;

use crate::MAX_MODULUS_BYTES;

/// Errors that can occur during encryption or decryption.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("key must be at least one byte long")]
    EmptyKey,

    #[error("tweak must be at least one byte long")]
    EmptyTweak,

    #[error("tweak length exceeds 2^32 - 1 bytes")]
    TweakTooLong,

    #[error("input {value} is outside the range [0, {modulus})")]
    InputOutOfRange { value: BigUint, modulus: BigUint },

    #[error("modulus must be at least 2")]
    ModulusTooSmall,

    #[error("modulus is {0} bytes wide, the limit is {max} bytes", max = MAX_MODULUS_BYTES)]
    ModulusTooLarge(usize),

    #[error("modulus is prime and has no nontrivial factorization")]
    PrimeModulus,
}

/// The two observable failure categories.
///
/// Argument errors are caller mistakes caught before any cryptographic
/// work; FPE errors mean the inputs were well-formed but the algorithm
/// cannot proceed (the modulus has no usable factorization).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    Fpe,
}

impl Error {
    /// The failure category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::PrimeModulus => ErrorKind::Fpe,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
