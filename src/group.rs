// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Group identifiers and the group-level API
//!
//! A [`Group`] names one curve with its hash-to-curve suites. Every operation
//! resolves the backend through the [registry](crate::registry), which builds it
//! on first use.

use crate::element::Element;
use crate::encoding;
use crate::registry;
use crate::scalar::Scalar;
use crate::traits::groups::CurveBackend;
use crate::utils::error::{Error, ERR_INVALID_GROUP, ERR_ZERO_LENGTH_DST};

use std::fmt;

/// Reserved identifier of decaf448 with SHAKE256, never available.
pub const DECAF448_SHAKE256: u8 = 2;

/// Upper bound (exclusive) of group identifiers.
pub const MAX_ID: u8 = 8;

/// DSTs shorter than this are accepted with a warning.
pub const MIN_DST_LENGTH: usize = 16;

/**
 * Identifier of a prime-order group and its hash-to-curve ciphersuite.
 */
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    /// Ristretto255 with SHA2-512
    Ristretto255Sha512 = 1,
    /// NIST P-256 with SHA2-256
    P256Sha256 = 3,
    /// NIST P-384 with SHA2-384
    P384Sha384 = 4,
    /// NIST P-521 with SHA2-512
    P521Sha512 = 5,
    /// Edwards25519 with SHA2-512
    Edwards25519Sha512 = 6,
    /// Secp256k1 with SHA2-256
    Secp256k1Sha256 = 7,
}

impl Group {
    /// All available groups, in identifier order.
    pub const ALL: [Group; 6] = [
        Group::Ristretto255Sha512,
        Group::P256Sha256,
        Group::P384Sha384,
        Group::P521Sha512,
        Group::Edwards25519Sha512,
        Group::Secp256k1Sha256,
    ];

    /// The numeric identifier.
    #[inline]
    #[must_use]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Returns whether `id` designates an implemented group.
    #[must_use]
    pub fn available(id: u8) -> bool {
        Group::try_from(id).is_ok()
    }

    /// Returns the group with identifier `id`.
    ///
    /// # Panics
    ///
    /// - Panics with [`ERR_INVALID_GROUP`] if `id` is not available. Use
    ///   [`Group::try_from`] for identifiers read from untrusted input.
    #[must_use]
    pub fn from_id(id: u8) -> Group {
        match Group::try_from(id) {
            Ok(group) => group,
            Err(_) => panic!("{}", ERR_INVALID_GROUP),
        }
    }

    /// Returns a new scalar set to 0.
    #[must_use]
    pub fn new_scalar(self) -> Scalar {
        Scalar::from_backend(self, registry::backend(self).new_scalar())
    }

    /// Returns a new element set to the identity.
    #[must_use]
    pub fn new_element(self) -> Element {
        Element::from_backend(self, registry::backend(self).new_element())
    }

    /// Returns the canonical generator.
    #[must_use]
    pub fn base(self) -> Element {
        Element::from_backend(self, registry::backend(self).base())
    }

    /// Hashes `input` to a uniformly distributed scalar.
    ///
    /// # Panics
    ///
    /// - Panics with [`ERR_ZERO_LENGTH_DST`] if `dst` is empty.
    ///
    /// # Errors
    ///
    /// - `ExpandMessage` if message expansion fails
    pub fn hash_to_scalar(self, input: &[u8], dst: &[u8]) -> Result<Scalar, Error> {
        check_dst(dst);
        let inner = registry::backend(self)
            .hash_to_scalar(input, dst)
            .map_err(|e| e.context("HashToScalar"))?;

        Ok(Scalar::from_backend(self, inner))
    }

    /// Hashes `input` to a uniformly distributed element, with the random oracle suite.
    ///
    /// # Panics
    ///
    /// - Panics with [`ERR_ZERO_LENGTH_DST`] if `dst` is empty.
    ///
    /// # Errors
    ///
    /// - `ExpandMessage` if message expansion fails
    pub fn hash_to_group(self, input: &[u8], dst: &[u8]) -> Result<Element, Error> {
        check_dst(dst);
        let inner = registry::backend(self)
            .hash_to_group(input, dst)
            .map_err(|e| e.context("HashToGroup"))?;

        Ok(Element::from_backend(self, inner))
    }

    /// Maps `input` to an element with the non-uniform suite.
    ///
    /// The output is not uniformly distributed and must not be used where a
    /// random oracle is required.
    ///
    /// # Panics
    ///
    /// - Panics with [`ERR_ZERO_LENGTH_DST`] if `dst` is empty.
    ///
    /// # Errors
    ///
    /// - `ExpandMessage` if message expansion fails
    pub fn encode_to_group(self, input: &[u8], dst: &[u8]) -> Result<Element, Error> {
        check_dst(dst);
        let inner = registry::backend(self)
            .encode_to_group(input, dst)
            .map_err(|e| e.context("EncodeToGroup"))?;

        Ok(Element::from_backend(self, inner))
    }

    /// Decodes `element` and `scalar` and returns their product.
    ///
    /// # Errors
    ///
    /// - Any decoding error of the element or the scalar, with context `MultBytes`
    pub fn mult_bytes(self, scalar: &[u8], element: &[u8]) -> Result<Element, Error> {
        let mut e = self.new_element();
        e.decode(element).map_err(|e| e.context("MultBytes"))?;

        let mut s = self.new_scalar();
        s.decode(scalar).map_err(|e| e.context("MultBytes"))?;

        e.multiply(&s);
        Ok(e)
    }

    /// The random oracle hash-to-curve ciphersuite, e.g. `P256_XMD:SHA-256_SSWU_RO_`.
    #[must_use]
    pub fn ciphersuite(self) -> &'static str {
        registry::backend(self).ciphersuite()
    }

    /// The non-uniform encode-to-curve ciphersuite, e.g. `P256_XMD:SHA-256_SSWU_NU_`.
    #[must_use]
    pub fn encode_ciphersuite(self) -> &'static str {
        registry::backend(self).encode_ciphersuite()
    }

    #[must_use]
    pub fn scalar_length(self) -> usize {
        registry::backend(self).scalar_length()
    }

    #[must_use]
    pub fn element_length(self) -> usize {
        registry::backend(self).element_length()
    }

    /// The order of the group, big-endian.
    #[must_use]
    pub fn order(self) -> Vec<u8> {
        registry::backend(self).order()
    }

    /// Builds a domain separation tag `<app>-V<version>-CS<id>-<ciphersuite>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ecgroup::Group;
    ///
    /// let dst = Group::P256Sha256.make_dst("app", 1);
    /// assert_eq!(dst, b"app-V01-CS03-P256_XMD:SHA-256_SSWU_RO_");
    /// ```
    #[must_use]
    pub fn make_dst(self, app: &str, version: u8) -> Vec<u8> {
        encoding::make_dst(app, version, self.id(), self.ciphersuite())
    }
}

impl TryFrom<u8> for Group {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Group::Ristretto255Sha512),
            3 => Ok(Group::P256Sha256),
            4 => Ok(Group::P384Sha384),
            5 => Ok(Group::P521Sha512),
            6 => Ok(Group::Edwards25519Sha512),
            7 => Ok(Group::Secp256k1Sha256),
            _ => Err(Error::InvalidGroup),
        }
    }
}

impl From<Group> for u8 {
    fn from(group: Group) -> u8 {
        group.id()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ciphersuite())
    }
}

/// Rejects empty DSTs and warns about short ones.
///
/// # Panics
///
/// - Panics with [`ERR_ZERO_LENGTH_DST`] if `dst` is empty.
pub(crate) fn check_dst(dst: &[u8]) {
    if dst.is_empty() {
        panic!("{}", ERR_ZERO_LENGTH_DST);
    }

    if dst.len() < MIN_DST_LENGTH {
        tracing::warn!(
            length = dst.len(),
            minimum = MIN_DST_LENGTH,
            "DST is shorter than the recommended length"
        );
    }
}
