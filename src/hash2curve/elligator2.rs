// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Elligator 2 (RFC 9380, sections 6.7.1 and 6.8.2)
//!
//! Maps a field element to curve25519 in Montgomery form `t^2 = s^3 + J * s^2 + s`,
//! then through the rational map onto edwards25519. Cofactor clearing is left
//! to the caller, which owns the point type.

use crate::field::{hex_int, Field};
use crate::hash2curve::sswu::AffinePoint;

use num_bigint::BigUint;

const CURVE25519_PRIME: &str = "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed";
const J: i64 = 486_662;
const Z: i64 = 2;

/**
 * The curve25519/edwards25519 pair with the constants of the Elligator 2 suite.
 */
#[derive(Debug, Clone)]
pub struct Curve25519Map {
    field: Field,
    j: BigUint,
    z: BigUint,
    /// `sqrt(-486664)` with `sgn0 = 0`, scaling Montgomery to Edwards coordinates
    c1: BigUint,
}

impl Default for Curve25519Map {
    fn default() -> Self {
        Self::new()
    }
}

impl Curve25519Map {
    /// Builds the map over `GF(2^255 - 19)`.
    ///
    /// # Panics
    ///
    /// - Panics if `-486664` has no square root, which cannot happen for this prime.
    #[must_use]
    pub fn new() -> Self {
        let field = Field::new(hex_int(CURVE25519_PRIME));
        let j = field.from_i64(J);
        let z = field.from_i64(Z);

        let c1 = field
            .sqrt(&field.from_i64(-(J + 2)))
            .expect("-486664 is a square mod 2^255 - 19");
        let c1 = field.cmov(&c1, &field.neg(&c1), field.sgn0(&c1));

        Curve25519Map { field, j, z, c1 }
    }

    /// The coordinate field shared by both curve models.
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Maps `u` to a point `(s, t)` on curve25519.
    #[must_use]
    pub fn map_to_montgomery(&self, u: &BigUint) -> AffinePoint {
        let f = &self.field;
        let one = BigUint::from(1u32);

        // tv1 = Z * u^2, with the exceptional value -1 sent to 0
        let tv1 = f.mul(&self.z, &f.square(u));
        let tv1 = f.cmov(&tv1, &BigUint::default(), tv1 == f.neg(&one));

        // x1 = -J / (1 + tv1)
        let x1 = f.mul(&f.neg(&self.j), &f.inv(&f.add(&tv1, &one)));

        // gx1 = x1^3 + J * x1^2 + x1
        let gx1 = f.mul(&f.add(&f.mul(&f.add(&x1, &self.j), &x1), &one), &x1);

        let x2 = f.sub(&f.neg(&x1), &self.j);
        let gx2 = f.mul(&tv1, &gx1);

        let e2 = f.is_square(&gx1);
        let x = f.cmov(&x2, &x1, e2);
        let y2 = f.cmov(&gx2, &gx1, e2);

        let y = f.sqrt(&y2).unwrap_or_default();
        let e3 = f.sgn0(&y);
        let y = f.cmov(&y, &f.neg(&y), e2 ^ e3);

        AffinePoint { x, y }
    }

    /// Maps `u` to a point `(x, y)` on edwards25519.
    ///
    /// The result is on the curve but not necessarily in the prime-order subgroup.
    #[must_use]
    pub fn map_to_edwards(&self, u: &BigUint) -> AffinePoint {
        let f = &self.field;
        let one = BigUint::from(1u32);
        let AffinePoint { x: s, y: t } = self.map_to_montgomery(u);

        // x = c1 * s / t, y = (s - 1) / (s + 1), and (0, 1) when t * (s + 1) = 0
        let s_plus_one = f.add(&s, &one);
        let denominator = f.inv(&f.mul(&s_plus_one, &t));
        let exceptional = f.is_zero(&denominator);

        let x = f.mul(&f.mul(&self.c1, &s), &f.mul(&denominator, &s_plus_one));
        let y = f.mul(&f.sub(&s, &one), &f.mul(&denominator, &t));

        AffinePoint {
            x: f.cmov(&x, &BigUint::default(), exceptional),
            y: f.cmov(&y, &one, exceptional),
        }
    }

    /// Encodes an edwards25519 affine point in the RFC 8032 compressed form:
    /// `y` little-endian with the sign of `x` in the top bit.
    #[must_use]
    pub fn compress_edwards(&self, p: &AffinePoint) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.field.encode_le(&p.y));
        if self.field.sgn0(&p.x) {
            out[31] |= 0x80;
        }

        out
    }
}
