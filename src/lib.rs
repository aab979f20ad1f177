// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Prime-order elliptic curve groups behind one Scalar/Element API

#![doc = include_str!("../README.md")]

/// Utilities such as error handling and random number generation.
pub mod utils;
// `traits` precedes `groups`: `enum_dispatch` must see the trait before the enum.
/// Abstractions for curve backends, scalars and elements.
pub mod traits;

/// Element facade.
pub mod element;
/// Textual encodings and domain separation tags.
pub mod encoding;
pub mod field;
/// Group identifiers and the group-level API.
pub mod group;
pub mod groups;
/// RFC 9380 hash-to-field and mappings to curves.
pub mod hash2curve;
pub mod registry;
/// Scalar facade.
pub mod scalar;

pub use element::Element;
pub use self::group::Group;
pub use scalar::Scalar;
pub use utils::error::Error;

#[cfg(test)]
mod tests;
