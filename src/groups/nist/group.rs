// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! CurveBackend implementation for the NIST curves

use crate::field::{dec_int, hex_int, Field};
use crate::groups::native::{PointElement, PrimeScalar};
use crate::groups::nist::curves::{NistCurve, NIST_A};
use crate::hash2curve::hash_to_field;
use crate::hash2curve::sswu::{AffinePoint, WeierstrassCurve};
use crate::traits::groups::{BackendElement, BackendScalar, CurveBackend};
use crate::utils::error::Error;

use ff::{Field as _, PrimeField};
use std::marker::PhantomData;

/**
 * A prime-order group over a NIST curve.
 *
 * Group law and encodings are delegated to the native point type `P`.
 * Hash-to-curve and hash-to-scalar are computed with the crate's own field
 * arithmetic and SSWU map, configured from [`NistCurve::PARAMS`].
 */
#[derive(Debug, Clone)]
pub struct NistGroup<P> {
    curve: WeierstrassCurve,
    scalar_field: Field,
    _point: PhantomData<fn() -> P>,
}

impl<P: NistCurve> Default for NistGroup<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: NistCurve> NistGroup<P> {
    /// Builds the group from the parameters of `P`.
    #[must_use]
    pub fn new() -> Self {
        let params = P::PARAMS;
        let curve = WeierstrassCurve::new(
            Field::new(dec_int(params.prime)),
            NIST_A,
            hex_int(params.b),
            params.z,
            params.hash,
            params.security_length,
        );

        NistGroup {
            curve,
            scalar_field: Field::new(hex_int(params.order)),
            _point: PhantomData,
        }
    }

    /// The curve with its SSWU parameters.
    #[must_use]
    pub fn curve(&self) -> &WeierstrassCurve {
        &self.curve
    }

    /// Converts a map output to a native point through its compressed encoding.
    ///
    /// # Panics
    ///
    /// - Panics if `p` is not on the curve. The SSWU map only produces points on the curve.
    #[must_use]
    pub fn point_from_affine(&self, p: &AffinePoint) -> P {
        let field = self.curve.field();
        let mut repr = P::Repr::default();
        let bytes = repr.as_mut();
        bytes[0] = 0x02 | u8::from(field.sgn0(&p.y));
        bytes[1..].copy_from_slice(&field.encode(&p.x));

        Option::from(P::from_bytes(&repr)).expect("SSWU output is on the curve")
    }

    /// `hash_to_curve`: two field elements, two maps, one addition (the cofactor is 1).
    ///
    /// # Errors
    ///
    /// - `ExpandMessage` if message expansion fails
    pub fn hash_to_curve(&self, input: &[u8], dst: &[u8]) -> Result<P, Error> {
        let [u0, u1] = self.curve.hash_to_field_ro(input, dst)?;
        let q0 = self.point_from_affine(&self.curve.map_to_curve(&u0));
        let q1 = self.point_from_affine(&self.curve.map_to_curve(&u1));

        Ok(q0 + q1)
    }

    /// `encode_to_curve`: one field element, one map.
    ///
    /// # Errors
    ///
    /// - `ExpandMessage` if message expansion fails
    pub fn encode_to_curve(&self, input: &[u8], dst: &[u8]) -> Result<P, Error> {
        let u = self.curve.hash_to_field_nu(input, dst)?;

        Ok(self.point_from_affine(&self.curve.map_to_curve(&u)))
    }

    /// Hashes to a scalar with `hash_to_field` over the scalar field.
    ///
    /// # Errors
    ///
    /// - `ExpandMessage` if message expansion fails
    pub fn hash_to_native_scalar(&self, input: &[u8], dst: &[u8]) -> Result<P::Scalar, Error> {
        let s = hash_to_field(
            self.curve.hash(),
            input,
            dst,
            1,
            1,
            self.curve.security_length(),
            &self.scalar_field,
        )?;

        let value = s
            .first()
            .ok_or_else(|| Error::ExpandMessage("unexpected hash_to_field output".to_string()))?;

        let mut repr = <P::Scalar as PrimeField>::Repr::default();
        repr.as_mut().copy_from_slice(&self.scalar_field.encode(value));

        Ok(Option::from(P::Scalar::from_repr(repr)).expect("value is reduced modulo the group order"))
    }
}

impl<P: NistCurve> CurveBackend for NistGroup<P> {
    fn new_scalar(&self) -> Box<dyn BackendScalar> {
        Box::new(PrimeScalar::new(P::Scalar::ZERO))
    }

    fn new_element(&self) -> Box<dyn BackendElement> {
        Box::new(PointElement::new(P::identity()))
    }

    fn base(&self) -> Box<dyn BackendElement> {
        Box::new(PointElement::new(P::generator()))
    }

    fn hash_to_scalar(&self, input: &[u8], dst: &[u8]) -> Result<Box<dyn BackendScalar>, Error> {
        let s = self.hash_to_native_scalar(input, dst)?;
        Ok(Box::new(PrimeScalar::new(s)))
    }

    fn hash_to_group(&self, input: &[u8], dst: &[u8]) -> Result<Box<dyn BackendElement>, Error> {
        let p = self.hash_to_curve(input, dst)?;
        Ok(Box::new(PointElement::new(p)))
    }

    fn encode_to_group(
        &self,
        input: &[u8],
        dst: &[u8],
    ) -> Result<Box<dyn BackendElement>, Error> {
        let p = self.encode_to_curve(input, dst)?;
        Ok(Box::new(PointElement::new(p)))
    }

    fn ciphersuite(&self) -> &'static str {
        P::PARAMS.ciphersuite
    }

    fn encode_ciphersuite(&self) -> &'static str {
        P::PARAMS.encode_ciphersuite
    }

    fn element_length(&self) -> usize {
        1 + self.curve.field().byte_len()
    }

    fn scalar_length(&self) -> usize {
        self.scalar_field.byte_len()
    }

    fn order(&self) -> Vec<u8> {
        self.scalar_field.order().to_bytes_be()
    }
}
