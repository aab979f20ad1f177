// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Curve backends
//!
//! # [`ristretto255`]
//!
//! Group over the Ristretto group, backed by the [curve25519-dalek](https://github.com/dalek-cryptography/curve25519-dalek) crate
//!
//! # [`nist`]
//!
//! Groups over P-256, P-384 and P-521, backed by the [RustCrypto](https://github.com/RustCrypto/elliptic-curves)
//! curve crates for the group law, with hash-to-curve computed in [`crate::hash2curve`]
//!
//! # [`edwards25519`]
//!
//! Group over the prime-order subgroup of edwards25519, backed by curve25519-dalek,
//! with the Elligator 2 map computed in [`crate::hash2curve`]
//!
//! # [`secp256k1`]
//!
//! Group over secp256k1, backed by the [k256](https://github.com/RustCrypto/elliptic-curves/tree/master/k256) crate

use crate::traits::groups::{BackendElement, BackendScalar, CurveBackend};
use crate::utils::error::Error;

use enum_dispatch::enum_dispatch;

/// Group over edwards25519
pub mod edwards25519;

/// Backend values shared by all groups
pub mod native;

/// Groups over the NIST curves
pub mod nist;

/// Group over the Ristretto group
pub mod ristretto255;

/// Group over secp256k1
pub mod secp256k1;

pub use edwards25519::Edwards25519Group;
pub use nist::{P256Group, P384Group, P521Group};
pub use ristretto255::Ristretto255Group;
pub use secp256k1::Secp256k1Group;

/**
 * One of the supported backends.
 *
 * Built once per group by the [registry](crate::registry).
 */
#[enum_dispatch(CurveBackend)]
#[derive(Debug, Clone)]
pub enum Backend {
    Ristretto255Group,
    P256Group,
    P384Group,
    P521Group,
    Edwards25519Group,
    Secp256k1Group,
}
