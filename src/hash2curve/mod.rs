// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! RFC 9380 hash-to-field and the maps from field elements to curve points
//!
//! # [`hash_to_field`]
//!
//! Expands `(msg, dst)` with `expand_message_xmd` into `count * m * L` uniform
//! bytes and reduces each `L`-byte chunk modulo the field order.
//!
//! # [`sswu`]
//!
//! Simplified Shallue-van de Woestijne-Ulas map for short Weierstrass curves
//! with `A != 0` (the NIST curves).
//!
//! # [`elligator2`]
//!
//! Elligator 2 map to curve25519 and the rational map to edwards25519.

use crate::field::Field;
use crate::utils::error::Error;

use elliptic_curve::hash2curve::{ExpandMsg, ExpandMsgXmd, Expander};
use num_bigint::BigUint;
use sha2::{Sha256, Sha384, Sha512};

/// Simplified SWU map for Weierstrass curves
pub mod sswu;

/// Elligator 2 map for curve25519 and edwards25519
pub mod elligator2;

/// The hash function driving `expand_message_xmd` for a ciphersuite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// SHA2-256
    Sha256,
    /// SHA2-384
    Sha384,
    /// SHA2-512
    Sha512,
}

impl HashAlgorithm {
    /// Expands `input` under `dst` into `length` uniform bytes.
    ///
    /// # Errors
    ///
    /// - `ExpandMessage` if `length` is zero or too large for the hash function
    pub fn expand_message_xmd(self, input: &[u8], dst: &[u8], length: usize) -> Result<Vec<u8>, Error> {
        match self {
            HashAlgorithm::Sha256 => expand::<ExpandMsgXmd<Sha256>>(input, dst, length),
            HashAlgorithm::Sha384 => expand::<ExpandMsgXmd<Sha384>>(input, dst, length),
            HashAlgorithm::Sha512 => expand::<ExpandMsgXmd<Sha512>>(input, dst, length),
        }
    }
}

fn expand<X>(input: &[u8], dst: &[u8], length: usize) -> Result<Vec<u8>, Error>
where
    X: for<'a> ExpandMsg<'a>,
{
    let dsts = [dst];
    let mut expander = X::expand_message(&[input], &dsts, length)
        .map_err(|e| Error::ExpandMessage(e.to_string()))?;

    let mut uniform = vec![0u8; length];
    expander.fill_bytes(&mut uniform);

    Ok(uniform)
}

/// Hashes `input` into `count * extension_degree` elements of `field`.
///
/// `security_length` is the per-element expansion length `L`, which must be
/// `ceil((ceil(log2(p)) + k) / 8)` for `k`-bit security so that the modular
/// reduction has negligible bias.
///
/// # Errors
///
/// - `ExpandMessage` if the expansion length is rejected by `expand_message_xmd`
pub fn hash_to_field(
    hash: HashAlgorithm,
    input: &[u8],
    dst: &[u8],
    count: usize,
    extension_degree: usize,
    security_length: usize,
    field: &Field,
) -> Result<Vec<BigUint>, Error> {
    let elements = count * extension_degree;
    let uniform = hash.expand_message_xmd(input, dst, elements * security_length)?;

    let ret = uniform
        .chunks_exact(security_length)
        .map(|chunk| field.reduce(&BigUint::from_bytes_be(chunk)))
        .collect();

    Ok(ret)
}
