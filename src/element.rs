// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Element facade

use crate::group::Group;
use crate::scalar::Scalar;
use crate::traits::groups::BackendElement;
use crate::utils::error::{Error, ERR_CAST_ELEMENT, ERR_CAST_SCALAR};

use std::fmt;

/**
 * An element of a prime-order group, tagged with its group.
 *
 * Every element is either the identity or a point of the prime-order
 * subgroup. Arithmetic mutates the receiver and returns it:
 *
 * ```
 * use ecgroup::Group;
 *
 * let g = Group::P256Sha256;
 * let mut two = g.new_scalar();
 * two.set_uint64(2);
 *
 * let mut doubled = g.base();
 * doubled.double();
 *
 * let mut multiplied = g.base();
 * multiplied.multiply(&two);
 * assert_eq!(doubled, multiplied);
 * ```
 *
 * Arithmetic takes `&mut self`; sharing one value between threads requires
 * external synchronization.
 *
 * Mixing elements of two different groups is a programming error and panics
 * with [`ERR_CAST_ELEMENT`].
 */
pub struct Element {
    group: Group,
    inner: Box<dyn BackendElement>,
}

#[allow(clippy::should_implement_trait)]
impl Element {
    pub(crate) fn from_backend(group: Group, inner: Box<dyn BackendElement>) -> Self {
        Element { group, inner }
    }

    fn same_group<'a>(&self, other: &'a Element) -> &'a dyn BackendElement {
        if self.group != other.group {
            panic!("{}", ERR_CAST_ELEMENT);
        }

        other.inner.as_ref()
    }

    /// The group of the element.
    #[must_use]
    pub fn group(&self) -> Group {
        self.group
    }

    /// Sets the element to the canonical generator.
    pub fn base(&mut self) -> &mut Self {
        self.inner.set_base();
        self
    }

    /// Sets the element to the identity.
    pub fn identity(&mut self) -> &mut Self {
        self.inner.set_identity();
        self
    }

    /// Adds `other`. `None` adds the identity.
    ///
    /// # Panics
    ///
    /// - Panics with [`ERR_CAST_ELEMENT`] if `other` belongs to another group.
    pub fn add<'a>(&mut self, other: impl Into<Option<&'a Element>>) -> &mut Self {
        if let Some(other) = other.into() {
            let other = self.same_group(other);
            self.inner.add(other);
        }

        self
    }

    /// Doubles the element.
    pub fn double(&mut self) -> &mut Self {
        self.inner.double();
        self
    }

    /// Sets the element to its inverse.
    pub fn negate(&mut self) -> &mut Self {
        self.inner.negate();
        self
    }

    /// Subtracts `other`. `None` subtracts the identity.
    ///
    /// # Panics
    ///
    /// - Panics with [`ERR_CAST_ELEMENT`] if `other` belongs to another group.
    pub fn subtract<'a>(&mut self, other: impl Into<Option<&'a Element>>) -> &mut Self {
        if let Some(other) = other.into() {
            let other = self.same_group(other);
            self.inner.sub(other);
        }

        self
    }

    /// Multiplies by `scalar`. `None` multiplies by 0, giving the identity.
    ///
    /// # Panics
    ///
    /// - Panics with [`ERR_CAST_SCALAR`] if `scalar` belongs to another group.
    pub fn multiply<'a>(&mut self, scalar: impl Into<Option<&'a Scalar>>) -> &mut Self {
        match scalar.into() {
            Some(scalar) => {
                if scalar.group() != self.group {
                    panic!("{}", ERR_CAST_SCALAR);
                }
                self.inner.mul(scalar.inner());
            }
            None => self.inner.set_identity(),
        }

        self
    }

    /// Returns whether both elements are equal.
    ///
    /// # Panics
    ///
    /// - Panics with [`ERR_CAST_ELEMENT`] if `other` belongs to another group.
    #[must_use]
    pub fn equal(&self, other: &Element) -> bool {
        self.inner.equal(self.same_group(other))
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    /// Copies the value of `other`. `None` sets the element to the identity.
    ///
    /// # Panics
    ///
    /// - Panics with [`ERR_CAST_ELEMENT`] if `other` belongs to another group.
    pub fn set<'a>(&mut self, other: impl Into<Option<&'a Element>>) -> &mut Self {
        match other.into() {
            Some(other) => {
                let other = self.same_group(other);
                self.inner.set(other);
            }
            None => self.inner.set_identity(),
        }

        self
    }

    /// Returns an independent copy.
    #[must_use]
    pub fn copy(&self) -> Element {
        self.clone()
    }

    /// Fixed-length compressed encoding, of [`Group::element_length`] bytes.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        self.inner.encode()
    }

    /// Sets the element from its compressed encoding. The element is unchanged on error.
    ///
    /// The identity is never accepted.
    ///
    /// # Errors
    ///
    /// - `EmptyEncoding`, `InvalidLength`, `IdentityElement`, `InvalidPointEncoding`
    ///   or `NotInSubgroup`, in an `element Decode` context
    pub fn decode(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.inner
            .decode(bytes)
            .map_err(|e| e.context("element Decode"))
    }

    /// Lowercase hexadecimal encoding.
    #[must_use]
    pub fn hex(&self) -> String {
        hex::encode(self.encode())
    }

    /// Sets the element from its hexadecimal encoding.
    ///
    /// # Errors
    ///
    /// - `Hex` if `s` is not hexadecimal
    /// - any [`Element::decode`] error, in an `element DecodeHex` context
    pub fn decode_hex(&mut self, s: &str) -> Result<(), Error> {
        let bytes = hex::decode(s).map_err(|e| Error::from(e).context("element DecodeHex"))?;
        self.inner
            .decode(&bytes)
            .map_err(|e| e.context("element DecodeHex"))
    }
}

impl Clone for Element {
    fn clone(&self) -> Self {
        Element {
            group: self.group,
            inner: self.inner.clone_box(),
        }
    }
}

/// Elements of different groups compare unequal.
impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group && self.inner.equal(other.inner.as_ref())
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("group", &self.group)
            .field("value", &self.hex())
            .finish()
    }
}
