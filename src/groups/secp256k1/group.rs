// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! CurveBackend implementation for secp256k1

use crate::groups::native::{PointElement, PrimeScalar};
use crate::groups::nist::curves::weierstrass_identity;
use crate::traits::groups::{BackendElement, BackendScalar, CurveBackend, NativePoint};
use crate::utils::error::Error;

use elliptic_curve::hash2curve::{ExpandMsgXmd, GroupDigest};
use k256::{ProjectivePoint, Scalar, Secp256k1};
use sha2::Sha256;

/// Secp256k1 hash-to-curve ciphersuite.
pub const H2C_SECP256K1: &str = "secp256k1_XMD:SHA-256_SSWU_RO_";

/// Secp256k1 encode-to-curve ciphersuite.
pub const H2C_SECP256K1_NU: &str = "secp256k1_XMD:SHA-256_SSWU_NU_";

const ORDER: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

impl NativePoint for ProjectivePoint {
    const NAME: &'static str = "Secp256k1";

    fn identity_encoding() -> Vec<u8> {
        weierstrass_identity(33)
    }
}

/**
 * Secp256k1 implementation of [`CurveBackend`].
 *
 * `A = 0` on secp256k1, so SSWU goes through a 3-isogenous curve; hashing is
 * delegated to the [`GroupDigest`] implementation of the k256 crate.
 */
#[derive(Debug, Clone, Default)]
pub struct Secp256k1Group;

impl Secp256k1Group {
    #[must_use]
    pub fn new() -> Self {
        Secp256k1Group
    }
}

fn map_err(e: elliptic_curve::Error) -> Error {
    Error::ExpandMessage(e.to_string())
}

impl CurveBackend for Secp256k1Group {
    fn new_scalar(&self) -> Box<dyn BackendScalar> {
        Box::new(PrimeScalar::new(Scalar::ZERO))
    }

    fn new_element(&self) -> Box<dyn BackendElement> {
        Box::new(PointElement::new(ProjectivePoint::IDENTITY))
    }

    fn base(&self) -> Box<dyn BackendElement> {
        Box::new(PointElement::new(ProjectivePoint::GENERATOR))
    }

    /// # Errors
    ///
    /// - `ExpandMessage` if `Secp256k1::hash_to_scalar` returns error
    fn hash_to_scalar(&self, input: &[u8], dst: &[u8]) -> Result<Box<dyn BackendScalar>, Error> {
        let s = Secp256k1::hash_to_scalar::<ExpandMsgXmd<Sha256>>(&[input], &[dst]).map_err(map_err)?;

        Ok(Box::new(PrimeScalar::new(s)))
    }

    /// # Errors
    ///
    /// - `ExpandMessage` if `Secp256k1::hash_from_bytes` returns error
    fn hash_to_group(&self, input: &[u8], dst: &[u8]) -> Result<Box<dyn BackendElement>, Error> {
        let p = Secp256k1::hash_from_bytes::<ExpandMsgXmd<Sha256>>(&[input], &[dst]).map_err(map_err)?;

        Ok(Box::new(PointElement::new(p)))
    }

    /// # Errors
    ///
    /// - `ExpandMessage` if `Secp256k1::encode_from_bytes` returns error
    fn encode_to_group(
        &self,
        input: &[u8],
        dst: &[u8],
    ) -> Result<Box<dyn BackendElement>, Error> {
        let p = Secp256k1::encode_from_bytes::<ExpandMsgXmd<Sha256>>(&[input], &[dst]).map_err(map_err)?;

        Ok(Box::new(PointElement::new(p)))
    }

    fn ciphersuite(&self) -> &'static str {
        H2C_SECP256K1
    }

    fn encode_ciphersuite(&self) -> &'static str {
        H2C_SECP256K1_NU
    }

    fn element_length(&self) -> usize {
        33
    }

    fn scalar_length(&self) -> usize {
        32
    }

    fn order(&self) -> Vec<u8> {
        hex::decode(ORDER).expect("order constant is valid hex")
    }
}
