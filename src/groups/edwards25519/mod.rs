// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Group over the prime-order subgroup of edwards25519

pub use self::group::Edwards25519Group;

/// Edwards25519 implementation of [`CurveBackend`](crate::traits::groups::CurveBackend)
pub mod group;
