// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Groups over the NIST curves P-256, P-384 and P-521

pub use curves::{NistCurve, NistParams};
pub use self::group::NistGroup;

/// Curve and suite parameters
pub mod curves;

/// Generic NIST implementation of [`CurveBackend`](crate::traits::groups::CurveBackend)
pub mod group;

/// Group over P-256, backed by the [p256](https://github.com/RustCrypto/elliptic-curves/tree/master/p256) crate
pub type P256Group = NistGroup<p256::ProjectivePoint>;

/// Group over P-384, backed by the [p384](https://github.com/RustCrypto/elliptic-curves/tree/master/p384) crate
pub type P384Group = NistGroup<p384::ProjectivePoint>;

/// Group over P-521, backed by the [p521](https://github.com/RustCrypto/elliptic-curves/tree/master/p521) crate
pub type P521Group = NistGroup<p521::ProjectivePoint>;
