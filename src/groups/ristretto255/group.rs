// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! CurveBackend implementation for the Ristretto group

use crate::field::hex_int;
use crate::groups::native::{PointElement, PrimeScalar};
use crate::hash2curve::HashAlgorithm;
use crate::traits::groups::{BackendElement, BackendScalar, CurveBackend, NativePoint};
use crate::utils::error::Error;

use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::{RistrettoPoint, Scalar as DalekScalar};
use group::Group as _;

/// Ristretto hash-to-group ciphersuite.
pub const H2C_RISTRETTO255: &str = "ristretto255_XMD:SHA-512_R255MAP_RO_";

/// `2^252 + 27742317777372353535851937790883648493`, shared with edwards25519.
pub(crate) const ORDER_25519: &str = "1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed";

const UNIFORM_LENGTH: usize = 64;

impl NativePoint for RistrettoPoint {
    const NAME: &'static str = "Ristretto255";

    fn identity_encoding() -> Vec<u8> {
        vec![0u8; 32]
    }
}

/**
 * Ristretto implementation of [`CurveBackend`].
 *
 * Ristretto has no non-uniform suite: `encode_to_group` uses the same one-way
 * map as `hash_to_group`.
 */
#[derive(Debug, Clone, Default)]
pub struct Ristretto255Group;

impl Ristretto255Group {
    #[must_use]
    pub fn new() -> Self {
        Ristretto255Group
    }

    fn uniform_bytes(input: &[u8], dst: &[u8]) -> Result<[u8; UNIFORM_LENGTH], Error> {
        let expanded = HashAlgorithm::Sha512.expand_message_xmd(input, dst, UNIFORM_LENGTH)?;

        let mut uniform = [0u8; UNIFORM_LENGTH];
        uniform.copy_from_slice(&expanded);

        Ok(uniform)
    }

    /// Hashes to a point with `expand_message_xmd` and the Ristretto one-way map.
    ///
    /// # Errors
    ///
    /// - `ExpandMessage` if message expansion fails
    pub fn hash_to_point(input: &[u8], dst: &[u8]) -> Result<RistrettoPoint, Error> {
        let uniform = Self::uniform_bytes(input, dst)?;

        Ok(RistrettoPoint::from_uniform_bytes(&uniform))
    }
}

impl CurveBackend for Ristretto255Group {
    fn new_scalar(&self) -> Box<dyn BackendScalar> {
        Box::new(PrimeScalar::new(DalekScalar::ZERO))
    }

    fn new_element(&self) -> Box<dyn BackendElement> {
        Box::new(PointElement::new(RistrettoPoint::identity()))
    }

    fn base(&self) -> Box<dyn BackendElement> {
        Box::new(PointElement::new(RISTRETTO_BASEPOINT_POINT))
    }

    /// # Errors
    ///
    /// - `ExpandMessage` if message expansion fails
    fn hash_to_scalar(&self, input: &[u8], dst: &[u8]) -> Result<Box<dyn BackendScalar>, Error> {
        let uniform = Self::uniform_bytes(input, dst)?;
        let scalar = DalekScalar::from_bytes_mod_order_wide(&uniform);

        Ok(Box::new(PrimeScalar::new(scalar)))
    }

    /// # Errors
    ///
    /// - `ExpandMessage` if message expansion fails
    fn hash_to_group(&self, input: &[u8], dst: &[u8]) -> Result<Box<dyn BackendElement>, Error> {
        let point = Self::hash_to_point(input, dst)?;

        Ok(Box::new(PointElement::new(point)))
    }

    /// # Errors
    ///
    /// - `ExpandMessage` if message expansion fails
    fn encode_to_group(
        &self,
        input: &[u8],
        dst: &[u8],
    ) -> Result<Box<dyn BackendElement>, Error> {
        self.hash_to_group(input, dst)
    }

    fn ciphersuite(&self) -> &'static str {
        H2C_RISTRETTO255
    }

    fn encode_ciphersuite(&self) -> &'static str {
        H2C_RISTRETTO255
    }

    fn element_length(&self) -> usize {
        32
    }

    fn scalar_length(&self) -> usize {
        32
    }

    fn order(&self) -> Vec<u8> {
        hex_int(ORDER_25519).to_bytes_be()
    }
}
