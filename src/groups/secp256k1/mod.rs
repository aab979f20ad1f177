// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Group over curve secp256k1

pub use self::group::Secp256k1Group;

/// Secp256k1 implementation of [`CurveBackend`](crate::traits::groups::CurveBackend)
pub mod group;
