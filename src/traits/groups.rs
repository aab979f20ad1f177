// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Backend seams
//!
//! A [`CurveBackend`] owns the native point and scalar types of one curve and
//! hands them out as [`BackendScalar`] and [`BackendElement`] trait objects,
//! so that the [`Scalar`](crate::Scalar) and [`Element`](crate::Element)
//! facades can hold values of any group behind one type.
//!
//! Binary operations take the other operand as a trait object and downcast it
//! to the native type of the receiver. A failed downcast means the operands
//! belong to different groups, which is a programming fault: it panics with
//! [`ERR_CAST_SCALAR`](crate::utils::error::ERR_CAST_SCALAR) or
//! [`ERR_CAST_ELEMENT`](crate::utils::error::ERR_CAST_ELEMENT).

use crate::utils::error::Error;

use enum_dispatch::enum_dispatch;
use std::any::Any;
use std::fmt::Debug;

/**
 * A scalar of a curve backend, mutated in place.
 */
pub trait BackendScalar: Debug + Send + Sync {
    /// Downcasting support.
    fn as_any(&self) -> &dyn Any;

    /// Returns a boxed deep copy.
    fn clone_box(&self) -> Box<dyn BackendScalar>;

    /// Sets the scalar to 0.
    fn set_zero(&mut self);

    /// Sets the scalar to 1.
    fn set_one(&mut self);

    /// Sets the scalar to a uniformly random non-zero value.
    fn set_random(&mut self);

    /// Sets the scalar to the given integer.
    fn set_u64(&mut self, value: u64);

    /// Copies the value of `other` into the scalar.
    fn set(&mut self, other: &dyn BackendScalar);

    fn add(&mut self, other: &dyn BackendScalar);

    fn sub(&mut self, other: &dyn BackendScalar);

    fn mul(&mut self, other: &dyn BackendScalar);

    fn negate(&mut self);

    /// Sets the scalar to its multiplicative inverse. Zero is left unchanged.
    fn invert(&mut self);

    fn equal(&self, other: &dyn BackendScalar) -> bool;

    fn is_zero(&self) -> bool;

    /// Canonical fixed-length encoding in the native byte order of the curve.
    fn encode(&self) -> Vec<u8>;

    /// Sets the scalar from its canonical encoding.
    ///
    /// # Errors
    ///
    /// - `EmptyEncoding` if `bytes` is empty
    /// - `InvalidLength` if `bytes` has the wrong length
    /// - `InvalidScalarEncoding` if the value is not reduced modulo the group order
    fn decode(&mut self, bytes: &[u8]) -> Result<(), Error>;
}

/**
 * An element of a curve backend, mutated in place.
 *
 * Every value is either the identity or a point of the prime-order subgroup.
 */
pub trait BackendElement: Debug + Send + Sync {
    /// Downcasting support.
    fn as_any(&self) -> &dyn Any;

    /// Returns a boxed deep copy.
    fn clone_box(&self) -> Box<dyn BackendElement>;

    fn set_identity(&mut self);

    /// Sets the element to the canonical generator.
    fn set_base(&mut self);

    fn set(&mut self, other: &dyn BackendElement);

    fn add(&mut self, other: &dyn BackendElement);

    fn sub(&mut self, other: &dyn BackendElement);

    fn double(&mut self);

    fn negate(&mut self);

    /// Multiplies the element by a scalar of the same group.
    fn mul(&mut self, scalar: &dyn BackendScalar);

    fn equal(&self, other: &dyn BackendElement) -> bool;

    fn is_identity(&self) -> bool;

    /// Fixed-length compressed encoding. The identity has a fixed per-curve encoding.
    fn encode(&self) -> Vec<u8>;

    /// Sets the element from its compressed encoding.
    ///
    /// # Errors
    ///
    /// - `EmptyEncoding` if `bytes` is empty
    /// - `InvalidLength` if `bytes` has the wrong length
    /// - `IdentityElement` if `bytes` encodes the identity
    /// - `InvalidPointEncoding` if `bytes` is not a valid point
    /// - `NotInSubgroup` if the point is outside the prime-order subgroup
    fn decode(&mut self, bytes: &[u8]) -> Result<(), Error>;
}

/**
 * A prime-order group with RFC 9380 hashing.
 *
 * Implemented by every backend and dispatched statically through [`Backend`](crate::groups::Backend).
 */
#[enum_dispatch]
pub trait CurveBackend {
    /// Returns a new scalar set to 0.
    fn new_scalar(&self) -> Box<dyn BackendScalar>;

    /// Returns a new element set to the identity.
    fn new_element(&self) -> Box<dyn BackendElement>;

    /// Returns the canonical generator.
    fn base(&self) -> Box<dyn BackendElement>;

    /// Hashes to a uniformly distributed scalar.
    ///
    /// # Errors
    ///
    /// - `ExpandMessage` if message expansion fails
    fn hash_to_scalar(&self, input: &[u8], dst: &[u8]) -> Result<Box<dyn BackendScalar>, Error>;

    /// Hashes to a uniformly distributed element (random oracle suite).
    ///
    /// # Errors
    ///
    /// - `ExpandMessage` if message expansion fails
    fn hash_to_group(&self, input: &[u8], dst: &[u8]) -> Result<Box<dyn BackendElement>, Error>;

    /// Encodes to a non-uniformly distributed element (non-uniform suite).
    ///
    /// # Errors
    ///
    /// - `ExpandMessage` if message expansion fails
    fn encode_to_group(&self, input: &[u8], dst: &[u8])
        -> Result<Box<dyn BackendElement>, Error>;

    /// The hash-to-curve ciphersuite of [`CurveBackend::hash_to_group`].
    fn ciphersuite(&self) -> &'static str;

    /// The hash-to-curve ciphersuite of [`CurveBackend::encode_to_group`].
    fn encode_ciphersuite(&self) -> &'static str;

    fn element_length(&self) -> usize;

    fn scalar_length(&self) -> usize;

    /// The order of the prime-order subgroup, big-endian.
    fn order(&self) -> Vec<u8>;
}

/**
 * A native point type usable as a backend element.
 *
 * Implemented once per curve, next to the backend that uses it.
 */
pub trait NativePoint: group::Group + group::GroupEncoding {
    /// Curve name used in error messages, e.g. `P256`.
    const NAME: &'static str;

    /// The fixed encoding of the identity element.
    fn identity_encoding() -> Vec<u8>;

    /// Whether a decoded, non-identity point lies in the prime-order subgroup.
    ///
    /// Always true on curves with cofactor 1 and on prime-order encodings.
    fn in_prime_order_subgroup(&self) -> bool {
        true
    }
}
