// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! CurveBackend implementation for edwards25519

use crate::field::{hex_int, Field};
use crate::groups::native::{PointElement, PrimeScalar};
use crate::groups::ristretto255::group::ORDER_25519;
use crate::hash2curve::elligator2::Curve25519Map;
use crate::hash2curve::{hash_to_field, HashAlgorithm};
use crate::traits::groups::{BackendElement, BackendScalar, CurveBackend, NativePoint};
use crate::utils::error::Error;

use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::Scalar as DalekScalar;
use group::Group as _;
use num_bigint::BigUint;

/// Edwards25519 hash-to-curve ciphersuite.
pub const H2C_EDWARDS25519: &str = "edwards25519_XMD:SHA-512_ELL2_RO_";

/// Edwards25519 encode-to-curve ciphersuite.
pub const H2C_EDWARDS25519_NU: &str = "edwards25519_XMD:SHA-512_ELL2_NU_";

const SECURITY_LENGTH: usize = 48;

impl NativePoint for EdwardsPoint {
    const NAME: &'static str = "Edwards25519";

    fn identity_encoding() -> Vec<u8> {
        let mut encoding = vec![0u8; 32];
        encoding[0] = 1;
        encoding
    }

    fn in_prime_order_subgroup(&self) -> bool {
        self.is_torsion_free()
    }
}

/**
 * Edwards25519 implementation of [`CurveBackend`].
 *
 * Points are restricted to the prime-order subgroup: decoding rejects torsion
 * components and both hashing modes clear the cofactor.
 */
#[derive(Debug, Clone)]
pub struct Edwards25519Group {
    map: Curve25519Map,
    scalar_field: Field,
}

impl Default for Edwards25519Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Edwards25519Group {
    #[must_use]
    pub fn new() -> Self {
        Edwards25519Group {
            map: Curve25519Map::new(),
            scalar_field: Field::new(hex_int(ORDER_25519)),
        }
    }

    fn hash_to_field(&self, input: &[u8], dst: &[u8], count: usize) -> Result<Vec<BigUint>, Error> {
        hash_to_field(
            HashAlgorithm::Sha512,
            input,
            dst,
            count,
            1,
            SECURITY_LENGTH,
            self.map.field(),
        )
    }

    /// Maps a field element onto the full curve, without clearing the cofactor.
    ///
    /// # Panics
    ///
    /// - Panics if the map output does not decompress. Elligator 2 only produces points on the curve.
    fn map_to_curve(&self, u: &BigUint) -> EdwardsPoint {
        let affine = self.map.map_to_edwards(u);
        CompressedEdwardsY(self.map.compress_edwards(&affine))
            .decompress()
            .expect("Elligator 2 output is on edwards25519")
    }

    /// `hash_to_curve` with two Elligator 2 maps.
    ///
    /// # Errors
    ///
    /// - `ExpandMessage` if message expansion fails
    pub fn hash_to_curve(&self, input: &[u8], dst: &[u8]) -> Result<EdwardsPoint, Error> {
        let u = self.hash_to_field(input, dst, 2)?;
        let q = u
            .iter()
            .map(|u| self.map_to_curve(u))
            .fold(EdwardsPoint::identity(), |acc, q| acc + q);

        Ok(q.mul_by_cofactor())
    }

    /// `encode_to_curve` with one Elligator 2 map.
    ///
    /// # Errors
    ///
    /// - `ExpandMessage` if message expansion fails
    pub fn encode_to_curve(&self, input: &[u8], dst: &[u8]) -> Result<EdwardsPoint, Error> {
        let u = self.hash_to_field(input, dst, 1)?;
        let q = u
            .first()
            .map(|u| self.map_to_curve(u))
            .ok_or_else(|| Error::ExpandMessage("unexpected hash_to_field output".to_string()))?;

        Ok(q.mul_by_cofactor())
    }
}

impl CurveBackend for Edwards25519Group {
    fn new_scalar(&self) -> Box<dyn BackendScalar> {
        Box::new(PrimeScalar::new(DalekScalar::ZERO))
    }

    fn new_element(&self) -> Box<dyn BackendElement> {
        Box::new(PointElement::new(EdwardsPoint::identity()))
    }

    fn base(&self) -> Box<dyn BackendElement> {
        Box::new(PointElement::new(ED25519_BASEPOINT_POINT))
    }

    /// # Errors
    ///
    /// - `ExpandMessage` if message expansion fails
    fn hash_to_scalar(&self, input: &[u8], dst: &[u8]) -> Result<Box<dyn BackendScalar>, Error> {
        let s = hash_to_field(
            HashAlgorithm::Sha512,
            input,
            dst,
            1,
            1,
            SECURITY_LENGTH,
            &self.scalar_field,
        )?;
        let value = s
            .first()
            .ok_or_else(|| Error::ExpandMessage("unexpected hash_to_field output".to_string()))?;

        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&self.scalar_field.encode_le(value));

        Ok(Box::new(PrimeScalar::new(DalekScalar::from_bytes_mod_order(bytes))))
    }

    /// # Errors
    ///
    /// - `ExpandMessage` if message expansion fails
    fn hash_to_group(&self, input: &[u8], dst: &[u8]) -> Result<Box<dyn BackendElement>, Error> {
        let p = self.hash_to_curve(input, dst)?;
        Ok(Box::new(PointElement::new(p)))
    }

    /// # Errors
    ///
    /// - `ExpandMessage` if message expansion fails
    fn encode_to_group(
        &self,
        input: &[u8],
        dst: &[u8],
    ) -> Result<Box<dyn BackendElement>, Error> {
        let p = self.encode_to_curve(input, dst)?;
        Ok(Box::new(PointElement::new(p)))
    }

    fn ciphersuite(&self) -> &'static str {
        H2C_EDWARDS25519
    }

    fn encode_ciphersuite(&self) -> &'static str {
        H2C_EDWARDS25519_NU
    }

    fn element_length(&self) -> usize {
        32
    }

    fn scalar_length(&self) -> usize {
        32
    }

    fn order(&self) -> Vec<u8> {
        self.scalar_field.order().to_bytes_be()
    }
}
