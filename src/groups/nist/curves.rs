// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Parameters of the NIST curves and their hash-to-curve suites

use crate::hash2curve::HashAlgorithm;
use crate::traits::groups::NativePoint;

/**
 * Curve and suite constants of a NIST curve `y^2 = x^3 - 3x + B`.
 */
#[derive(Debug, Clone, Copy)]
pub struct NistParams {
    /// Coordinate field modulus, decimal
    pub prime: &'static str,
    /// Curve coefficient `B`, hexadecimal
    pub b: &'static str,
    /// SSWU constant `Z`
    pub z: i64,
    pub hash: HashAlgorithm,
    /// Per-element expansion length `L` of hash_to_field
    pub security_length: usize,
    /// Order of the prime-order group, hexadecimal
    pub order: &'static str,
    pub ciphersuite: &'static str,
    pub encode_ciphersuite: &'static str,
}

/**
 * A NIST curve point type with its suite parameters.
 */
pub trait NistCurve: NativePoint {
    const PARAMS: NistParams;
}

/// `A = -3` on all NIST curves.
pub const NIST_A: i64 = -3;

/// P-256 with `P256_XMD:SHA-256_SSWU_RO_`
pub const P256_PARAMS: NistParams = NistParams {
    prime: "115792089210356248762697446949407573530086143415290314195533631308867097853951",
    b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    z: -10,
    hash: HashAlgorithm::Sha256,
    security_length: 48,
    order: "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
    ciphersuite: "P256_XMD:SHA-256_SSWU_RO_",
    encode_ciphersuite: "P256_XMD:SHA-256_SSWU_NU_",
};

/// P-384 with `P384_XMD:SHA-384_SSWU_RO_`
pub const P384_PARAMS: NistParams = NistParams {
    prime: "39402006196394479212279040100143613805079739270465446667948293404245721771496870329047266088258938001861606973112319",
    b: "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
    z: -12,
    hash: HashAlgorithm::Sha384,
    security_length: 72,
    order: "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973",
    ciphersuite: "P384_XMD:SHA-384_SSWU_RO_",
    encode_ciphersuite: "P384_XMD:SHA-384_SSWU_NU_",
};

/// P-521 with `P521_XMD:SHA-512_SSWU_RO_`
pub const P521_PARAMS: NistParams = NistParams {
    prime: "6864797660130609714981900799081393217269435300143305409394463459185543183397656052122559640661454554977296311391480858037121987999716643812574028291115057151",
    b: "051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
    z: -4,
    hash: HashAlgorithm::Sha512,
    security_length: 98,
    order: "1fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409",
    ciphersuite: "P521_XMD:SHA-512_SSWU_RO_",
    encode_ciphersuite: "P521_XMD:SHA-512_SSWU_NU_",
};

/// `0x02` followed by zeros: the identity encoding shared by the compressed Weierstrass curves.
#[must_use]
pub fn weierstrass_identity(length: usize) -> Vec<u8> {
    let mut encoding = vec![0u8; length];
    encoding[0] = 0x02;
    encoding
}

impl NativePoint for p256::ProjectivePoint {
    const NAME: &'static str = "P256";

    fn identity_encoding() -> Vec<u8> {
        weierstrass_identity(33)
    }
}

impl NistCurve for p256::ProjectivePoint {
    const PARAMS: NistParams = P256_PARAMS;
}

impl NativePoint for p384::ProjectivePoint {
    const NAME: &'static str = "P384";

    fn identity_encoding() -> Vec<u8> {
        weierstrass_identity(49)
    }
}

impl NistCurve for p384::ProjectivePoint {
    const PARAMS: NistParams = P384_PARAMS;
}

impl NativePoint for p521::ProjectivePoint {
    const NAME: &'static str = "P521";

    fn identity_encoding() -> Vec<u8> {
        weierstrass_identity(67)
    }
}

impl NistCurve for p521::ProjectivePoint {
    const PARAMS: NistParams = P521_PARAMS;
}
