// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Backend values over native curve types
//!
//! [`PrimeScalar`] wraps any [`ff::PrimeField`] and [`PointElement`] wraps any
//! [`NativePoint`], so every backend shares one implementation of the
//! [`BackendScalar`] and [`BackendElement`] contracts.

use crate::traits::groups::{BackendElement, BackendScalar, NativePoint};
use crate::utils::error::{Error, ERR_CAST_ELEMENT, ERR_CAST_SCALAR};
use crate::utils::rng;

use ff::PrimeField;
use std::any::Any;

/**
 * A [`BackendScalar`] over a native prime field.
 *
 * Encodings use the native representation of the field: big-endian for the
 * RustCrypto curves, little-endian for curve25519-dalek.
 */
#[derive(Debug, Clone, Copy)]
pub struct PrimeScalar<S>(pub S);

impl<S: PrimeField> PrimeScalar<S> {
    /// Create a new `PrimeScalar` from a native scalar.
    #[must_use]
    pub fn new(scalar: S) -> Self {
        PrimeScalar(scalar)
    }

    /// Length of the canonical encoding.
    #[must_use]
    pub fn encoding_length() -> usize {
        S::Repr::default().as_ref().len()
    }

    /// Downcasts a scalar of the same group.
    ///
    /// # Panics
    ///
    /// - Panics with [`ERR_CAST_SCALAR`] if `other` belongs to another group.
    pub fn cast(other: &dyn BackendScalar) -> &S {
        &other
            .as_any()
            .downcast_ref::<Self>()
            .expect(ERR_CAST_SCALAR)
            .0
    }
}

impl<S: PrimeField> BackendScalar for PrimeScalar<S> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn BackendScalar> {
        Box::new(*self)
    }

    fn set_zero(&mut self) {
        self.0 = S::ZERO;
    }

    fn set_one(&mut self) {
        self.0 = S::ONE;
    }

    fn set_random(&mut self) {
        let mut rng = rng::rng();
        loop {
            let candidate = S::random(&mut rng);
            if !bool::from(candidate.is_zero()) {
                self.0 = candidate;
                return;
            }
        }
    }

    fn set_u64(&mut self, value: u64) {
        self.0 = S::from(value);
    }

    fn set(&mut self, other: &dyn BackendScalar) {
        self.0 = *Self::cast(other);
    }

    fn add(&mut self, other: &dyn BackendScalar) {
        self.0 += Self::cast(other);
    }

    fn sub(&mut self, other: &dyn BackendScalar) {
        self.0 -= Self::cast(other);
    }

    fn mul(&mut self, other: &dyn BackendScalar) {
        self.0 *= Self::cast(other);
    }

    fn negate(&mut self) {
        self.0 = -self.0;
    }

    fn invert(&mut self) {
        // inverting zero leaves zero
        if let Some(inverted) = Option::<S>::from(self.0.invert()) {
            self.0 = inverted;
        }
    }

    fn equal(&self, other: &dyn BackendScalar) -> bool {
        self.0 == *Self::cast(other)
    }

    fn is_zero(&self) -> bool {
        bool::from(self.0.is_zero())
    }

    fn encode(&self) -> Vec<u8> {
        self.0.to_repr().as_ref().to_vec()
    }

    fn decode(&mut self, bytes: &[u8]) -> Result<(), Error> {
        if bytes.is_empty() {
            return Err(Error::EmptyEncoding);
        }

        let mut repr = S::Repr::default();
        if bytes.len() != repr.as_ref().len() {
            return Err(Error::InvalidLength {
                expected: repr.as_ref().len(),
                actual: bytes.len(),
            });
        }
        repr.as_mut().copy_from_slice(bytes);

        self.0 = Option::from(S::from_repr(repr)).ok_or(Error::InvalidScalarEncoding)?;

        Ok(())
    }
}

/**
 * A [`BackendElement`] over a native point type.
 */
#[derive(Debug, Clone, Copy)]
pub struct PointElement<P>(pub P);

impl<P: NativePoint> PointElement<P> {
    /// Create a new `PointElement` from a native point.
    #[must_use]
    pub fn new(point: P) -> Self {
        PointElement(point)
    }

    /// Length of the compressed encoding.
    #[must_use]
    pub fn encoding_length() -> usize {
        P::Repr::default().as_ref().len()
    }

    /// Downcasts an element of the same group.
    ///
    /// # Panics
    ///
    /// - Panics with [`ERR_CAST_ELEMENT`] if `other` belongs to another group.
    pub fn cast(other: &dyn BackendElement) -> &P {
        &other
            .as_any()
            .downcast_ref::<Self>()
            .expect(ERR_CAST_ELEMENT)
            .0
    }

    /// Decodes a compressed non-identity point of the prime-order subgroup.
    ///
    /// # Errors
    ///
    /// See [`BackendElement::decode`].
    pub fn decode_point(bytes: &[u8]) -> Result<P, Error> {
        if bytes.is_empty() {
            return Err(Error::EmptyEncoding);
        }

        let mut repr = P::Repr::default();
        if bytes.len() != repr.as_ref().len() {
            return Err(Error::InvalidLength {
                expected: repr.as_ref().len(),
                actual: bytes.len(),
            });
        }
        if bytes == P::identity_encoding().as_slice() {
            return Err(Error::IdentityElement(P::NAME));
        }
        repr.as_mut().copy_from_slice(bytes);

        let point: P = Option::from(P::from_bytes(&repr)).ok_or(Error::InvalidPointEncoding(P::NAME))?;

        if bool::from(point.is_identity()) {
            return Err(Error::IdentityElement(P::NAME));
        }
        if !point.in_prime_order_subgroup() {
            return Err(Error::NotInSubgroup(P::NAME));
        }
        // reject non-canonical encodings
        if point.to_bytes().as_ref() != bytes {
            return Err(Error::InvalidPointEncoding(P::NAME));
        }

        Ok(point)
    }
}

impl<P: NativePoint> BackendElement for PointElement<P> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn BackendElement> {
        Box::new(*self)
    }

    fn set_identity(&mut self) {
        self.0 = P::identity();
    }

    fn set_base(&mut self) {
        self.0 = P::generator();
    }

    fn set(&mut self, other: &dyn BackendElement) {
        self.0 = *Self::cast(other);
    }

    fn add(&mut self, other: &dyn BackendElement) {
        self.0 += Self::cast(other);
    }

    fn sub(&mut self, other: &dyn BackendElement) {
        self.0 -= Self::cast(other);
    }

    fn double(&mut self) {
        self.0 = self.0.double();
    }

    fn negate(&mut self) {
        self.0 = -self.0;
    }

    fn mul(&mut self, scalar: &dyn BackendScalar) {
        self.0 *= PrimeScalar::<P::Scalar>::cast(scalar);
    }

    fn equal(&self, other: &dyn BackendElement) -> bool {
        self.0 == *Self::cast(other)
    }

    fn is_identity(&self) -> bool {
        bool::from(self.0.is_identity())
    }

    fn encode(&self) -> Vec<u8> {
        if self.is_identity() {
            return P::identity_encoding();
        }

        self.0.to_bytes().as_ref().to_vec()
    }

    fn decode(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.0 = Self::decode_point(bytes)?;

        Ok(())
    }
}
