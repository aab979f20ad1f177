// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Simplified SWU map (RFC 9380, section 6.6.2)

use crate::field::Field;
use crate::hash2curve::HashAlgorithm;
use crate::utils::error::Error;

use num_bigint::BigUint;

/**
 * A short Weierstrass curve `y^2 = x^3 + A * x + B` over `GF(p)` with the
 * parameters of its hash-to-curve suite.
 *
 * All values derived from the parameters are computed once in [`WeierstrassCurve::new`].
 */
#[derive(Debug, Clone)]
pub struct WeierstrassCurve {
    field: Field,
    a: BigUint,
    b: BigUint,
    z: BigUint,
    hash: HashAlgorithm,
    security_length: usize,
    /// `-B / A`
    minus_b_over_a: BigUint,
    /// `B / (Z * A)`
    b_over_za: BigUint,
}

/// An affine point produced by the map, before it is handed to a curve backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffinePoint {
    pub x: BigUint,
    pub y: BigUint,
}

impl WeierstrassCurve {
    /// Configures a curve for SSWU.
    ///
    /// `z` is the non-square SSWU constant, given as a small signed integer.
    ///
    /// # Panics
    ///
    /// - Panics if `A` is zero, where SSWU is undefined without an isogeny.
    #[must_use]
    pub fn new(
        field: Field,
        a: i64,
        b: BigUint,
        z: i64,
        hash: HashAlgorithm,
        security_length: usize,
    ) -> Self {
        let a = field.from_i64(a);
        assert!(!field.is_zero(&a), "SSWU requires A != 0");
        let b = field.reduce(&b);
        let z = field.from_i64(z);

        let minus_b_over_a = field.mul(&field.neg(&b), &field.inv(&a));
        let b_over_za = field.mul(&b, &field.inv(&field.mul(&z, &a)));

        WeierstrassCurve {
            field,
            a,
            b,
            z,
            hash,
            security_length,
            minus_b_over_a,
            b_over_za,
        }
    }

    /// The coordinate field of the curve.
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The expansion hash of the suite.
    #[must_use]
    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    /// The per-element expansion length `L` of the suite.
    #[must_use]
    pub fn security_length(&self) -> usize {
        self.security_length
    }

    /// Returns `x^3 + A * x + B`.
    fn g(&self, x: &BigUint) -> BigUint {
        let f = &self.field;
        let x3 = f.mul(&f.square(x), x);
        f.add(&f.add(&x3, &f.mul(&self.a, x)), &self.b)
    }

    /// Returns whether `(x, y)` satisfies the curve equation.
    #[must_use]
    pub fn is_on_curve(&self, p: &AffinePoint) -> bool {
        self.field.square(&p.y) == self.g(&p.x)
    }

    /// Maps a field element to a point on the curve.
    ///
    /// The map is total: `Z` is chosen so that there are no exceptional inputs,
    /// and the output is never the point at infinity.
    #[must_use]
    pub fn map_to_curve(&self, u: &BigUint) -> AffinePoint {
        let f = &self.field;

        // tv1 = inv0(Z^2 * u^4 + Z * u^2)
        let zu2 = f.mul(&self.z, &f.square(u));
        let tv1 = f.inv(&f.add(&f.square(&zu2), &zu2));

        // x1 = (-B / A) * (1 + tv1), or B / (Z * A) when tv1 = 0
        let x1 = f.cmov(
            &f.mul(&self.minus_b_over_a, &f.add(&BigUint::from(1u32), &tv1)),
            &self.b_over_za,
            f.is_zero(&tv1),
        );
        let gx1 = self.g(&x1);

        // x2 = Z * u^2 * x1
        let x2 = f.mul(&zu2, &x1);
        let gx2 = self.g(&x2);

        let e = f.is_square(&gx1);
        let x = f.cmov(&x2, &x1, e);
        let gx = f.cmov(&gx2, &gx1, e);

        // one of gx1, gx2 is always a square for a non-square Z
        let y = f.sqrt(&gx).unwrap_or_default();
        let y = f.cmov(&y, &f.neg(&y), f.sgn0(u) != f.sgn0(&y));

        AffinePoint { x, y }
    }

    /// Hashes into two field elements, for the random oracle construction.
    ///
    /// # Errors
    ///
    /// - `ExpandMessage` if `expand_message_xmd` rejects its parameters
    pub fn hash_to_field_ro(&self, input: &[u8], dst: &[u8]) -> Result<[BigUint; 2], Error> {
        let u = crate::hash2curve::hash_to_field(
            self.hash,
            input,
            dst,
            2,
            1,
            self.security_length,
            &self.field,
        )?;
        let [u0, u1]: [BigUint; 2] = u
            .try_into()
            .map_err(|_| Error::ExpandMessage("unexpected hash_to_field output".to_string()))?;

        Ok([u0, u1])
    }

    /// Hashes into one field element, for the non-uniform construction.
    ///
    /// # Errors
    ///
    /// - `ExpandMessage` if `expand_message_xmd` rejects its parameters
    pub fn hash_to_field_nu(&self, input: &[u8], dst: &[u8]) -> Result<BigUint, Error> {
        let u = crate::hash2curve::hash_to_field(
            self.hash,
            input,
            dst,
            1,
            1,
            self.security_length,
            &self.field,
        )?;

        u.into_iter()
            .next()
            .ok_or_else(|| Error::ExpandMessage("unexpected hash_to_field output".to_string()))
    }
}
