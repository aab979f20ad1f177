// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Textual encodings and domain separation
//!
//! Binary encodings are owned by the backends; this module builds on them.
//!
//! # [`json`]
//!
//! `{"group":<id>,"scalar":"<hex>"}` / `{"group":<id>,"element":"<hex>"}`
//! objects, decoded with a targeted match on one key rather than a JSON parser.
//!
//! # `serde`
//!
//! With the `serde` feature, [`Scalar`](crate::Scalar) and
//! [`Element`](crate::Element) implement `Serialize` and `Deserialize` with the
//! same shape.

/// Targeted JSON field extraction
pub mod json;

/// Serde implementations built on the hex encodings
#[cfg(feature = "serde")]
pub mod serde;

#[cfg(test)]
mod tests;

/// Formats a domain separation tag `<app>-V<version>-CS<id>-<ciphersuite>`,
/// with version and id on two digits.
#[must_use]
pub fn make_dst(app: &str, version: u8, id: u8, ciphersuite: &str) -> Vec<u8> {
    format!("{app}-V{version:02}-CS{id:02}-{ciphersuite}").into_bytes()
}
