// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Group over the Ristretto group

pub use self::group::Ristretto255Group;

/// Ristretto implementation of [`CurveBackend`](crate::traits::groups::CurveBackend)
pub mod group;
