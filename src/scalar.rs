// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Scalar facade

use crate::group::Group;
use crate::traits::groups::BackendScalar;
use crate::utils::error::{Error, ERR_CAST_SCALAR};

use std::fmt;

/**
 * A scalar of a prime-order group, tagged with its group.
 *
 * Arithmetic mutates the receiver and returns it, so calls can be chained:
 *
 * ```
 * use ecgroup::Group;
 *
 * let g = Group::Ristretto255Sha512;
 * let mut one = g.new_scalar();
 * one.one();
 *
 * let mut three = one.copy();
 * three.add(&one).add(&one);
 *
 * let mut expected = g.new_scalar();
 * expected.set_uint64(3);
 * assert_eq!(three, expected);
 * ```
 *
 * Arithmetic takes `&mut self`; sharing one value between threads requires
 * external synchronization.
 *
 * Mixing scalars of two different groups is a programming error and panics
 * with [`ERR_CAST_SCALAR`].
 */
pub struct Scalar {
    group: Group,
    inner: Box<dyn BackendScalar>,
}

#[allow(clippy::should_implement_trait)]
impl Scalar {
    pub(crate) fn from_backend(group: Group, inner: Box<dyn BackendScalar>) -> Self {
        Scalar { group, inner }
    }

    pub(crate) fn inner(&self) -> &dyn BackendScalar {
        self.inner.as_ref()
    }

    /// Returns the inner value of `other` after checking it belongs to the same group.
    fn same_group<'a>(&self, other: &'a Scalar) -> &'a dyn BackendScalar {
        if self.group != other.group {
            panic!("{}", ERR_CAST_SCALAR);
        }

        other.inner()
    }

    /// The group of the scalar.
    #[must_use]
    pub fn group(&self) -> Group {
        self.group
    }

    /// Sets the scalar to 0.
    pub fn zero(&mut self) -> &mut Self {
        self.inner.set_zero();
        self
    }

    /// Sets the scalar to 1.
    pub fn one(&mut self) -> &mut Self {
        self.inner.set_one();
        self
    }

    /// Sets the scalar to `order - 1`.
    pub fn minus_one(&mut self) -> &mut Self {
        self.inner.set_one();
        self.inner.negate();
        self
    }

    /// Sets the scalar to a random non-zero value.
    pub fn random(&mut self) -> &mut Self {
        self.inner.set_random();
        self
    }

    /// Adds `other`. `None` adds 0.
    ///
    /// # Panics
    ///
    /// - Panics with [`ERR_CAST_SCALAR`] if `other` belongs to another group.
    pub fn add<'a>(&mut self, other: impl Into<Option<&'a Scalar>>) -> &mut Self {
        if let Some(other) = other.into() {
            let other = self.same_group(other);
            self.inner.add(other);
        }

        self
    }

    /// Subtracts `other`. `None` subtracts 0.
    ///
    /// # Panics
    ///
    /// - Panics with [`ERR_CAST_SCALAR`] if `other` belongs to another group.
    pub fn subtract<'a>(&mut self, other: impl Into<Option<&'a Scalar>>) -> &mut Self {
        if let Some(other) = other.into() {
            let other = self.same_group(other);
            self.inner.sub(other);
        }

        self
    }

    /// Multiplies by `other`. `None` multiplies by 0.
    ///
    /// # Panics
    ///
    /// - Panics with [`ERR_CAST_SCALAR`] if `other` belongs to another group.
    pub fn multiply<'a>(&mut self, other: impl Into<Option<&'a Scalar>>) -> &mut Self {
        match other.into() {
            Some(other) => {
                let other = self.same_group(other);
                self.inner.mul(other);
            }
            None => self.inner.set_zero(),
        }

        self
    }

    /// Sets the scalar to its additive inverse.
    pub fn negate(&mut self) -> &mut Self {
        self.inner.negate();
        self
    }

    /// Sets the scalar to its multiplicative inverse. 0 stays 0.
    pub fn invert(&mut self) -> &mut Self {
        self.inner.invert();
        self
    }

    /// Returns whether both scalars are equal.
    ///
    /// # Panics
    ///
    /// - Panics with [`ERR_CAST_SCALAR`] if `other` belongs to another group.
    #[must_use]
    pub fn equal(&self, other: &Scalar) -> bool {
        self.inner.equal(self.same_group(other))
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }

    /// Copies the value of `other`. `None` sets the scalar to 0.
    ///
    /// # Panics
    ///
    /// - Panics with [`ERR_CAST_SCALAR`] if `other` belongs to another group.
    pub fn set<'a>(&mut self, other: impl Into<Option<&'a Scalar>>) -> &mut Self {
        match other.into() {
            Some(other) => {
                let other = self.same_group(other);
                self.inner.set(other);
            }
            None => self.inner.set_zero(),
        }

        self
    }

    /// Sets the scalar to the integer `value`.
    pub fn set_uint64(&mut self, value: u64) -> &mut Self {
        self.inner.set_u64(value);
        self
    }

    /// Returns an independent copy.
    #[must_use]
    pub fn copy(&self) -> Scalar {
        self.clone()
    }

    /// Fixed-length canonical encoding, of [`Group::scalar_length`] bytes.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        self.inner.encode()
    }

    /// Sets the scalar from its canonical encoding. The scalar is unchanged on error.
    ///
    /// # Errors
    ///
    /// - `EmptyEncoding`, `InvalidLength` or `InvalidScalarEncoding`, in a `scalar Decode` context
    pub fn decode(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.inner
            .decode(bytes)
            .map_err(|e| e.context("scalar Decode"))
    }

    /// Lowercase hexadecimal encoding.
    #[must_use]
    pub fn hex(&self) -> String {
        hex::encode(self.encode())
    }

    /// Sets the scalar from its hexadecimal encoding.
    ///
    /// # Errors
    ///
    /// - `Hex` if `s` is not hexadecimal
    /// - any [`Scalar::decode`] error, in a `scalar DecodeHex` context
    pub fn decode_hex(&mut self, s: &str) -> Result<(), Error> {
        let bytes = hex::decode(s).map_err(|e| Error::from(e).context("scalar DecodeHex"))?;
        self.inner
            .decode(&bytes)
            .map_err(|e| e.context("scalar DecodeHex"))
    }
}

impl Clone for Scalar {
    fn clone(&self) -> Self {
        Scalar {
            group: self.group,
            inner: self.inner.clone_box(),
        }
    }
}

/// Scalars of different groups compare unequal.
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group && self.inner.equal(other.inner())
    }
}

impl Eq for Scalar {}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scalar")
            .field("group", &self.group)
            .field("value", &self.hex())
            .finish()
    }
}
