// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Arithmetic modulo a fixed prime
//!
//! A [`Field`] is an immutable description of `GF(p)`: the modulus, its bit and
//! byte lengths, and the exponents needed for Legendre symbols and square roots,
//! all computed once at construction. Field elements are plain [`BigUint`]
//! values in `[0, p)`; every operation takes its operands by reference and
//! returns a fresh value.
//!
//! The same type serves both the coordinate fields of the curves (for the
//! hash-to-curve maps) and their scalar fields (for hash-to-scalar).
//!
//! # Examples
//!
//! ```
//! use ecgroup::field::Field;
//! use num_bigint::BigUint;
//!
//! let f = Field::new(BigUint::from(13u32));
//! let x = BigUint::from(10u32);
//! let y = f.sqrt(&x).unwrap();
//! assert_eq!(f.square(&y), x);
//! assert_eq!(f.encode(&x), vec![10]);
//! ```

use crate::utils::error::Error;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/**
 * A prime field `GF(p)`.
 *
 * The modulus must be an odd prime; this is not checked.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    prime: BigUint,
    bit_len: usize,
    byte_len: usize,
    /// `(p - 1) / 2`, the Euler criterion exponent
    legendre_exp: BigUint,
    /// `p - 2`, the Fermat inversion exponent
    inv_exp: BigUint,
    sqrt: SqrtMethod,
}

/// Square root strategy, selected from the residue of the modulus.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SqrtMethod {
    /// `p = 3 mod 4`: `sqrt(x) = x^((p + 1) / 4)`
    ThreeMod4 { exp: BigUint },
    /// `p = 5 mod 8`: candidate `x^((p + 3) / 8)`, fixed up by `sqrt(-1)`
    FiveMod8 {
        exp: BigUint,
        sqrt_minus_one: BigUint,
    },
    /// Any other odd prime
    TonelliShanks {
        /// `p - 1 = q * 2^s` with `q` odd
        s: u64,
        q: BigUint,
        /// `z^q` for the smallest quadratic non-residue `z`
        c: BigUint,
    },
}

impl Field {
    /// Builds the field of integers modulo `prime`.
    ///
    /// # Panics
    ///
    /// - Panics if `prime` is smaller than 3.
    #[must_use]
    pub fn new(prime: BigUint) -> Self {
        assert!(prime > BigUint::from(2u32), "field modulus must be an odd prime");

        let one = BigUint::one();
        let bits = prime.bits();
        let bit_len = usize::try_from(bits).unwrap_or(usize::MAX);
        let byte_len = bit_len.div_ceil(8);
        let legendre_exp = (&prime - &one) >> 1u32;
        let inv_exp = &prime - BigUint::from(2u32);

        let mut field = Field {
            sqrt: SqrtMethod::ThreeMod4 {
                exp: BigUint::zero(),
            },
            prime,
            bit_len,
            byte_len,
            legendre_exp,
            inv_exp,
        };
        field.sqrt = field.sqrt_method();

        field
    }

    /// Builds a field from a big-endian hexadecimal modulus, with or without a `0x` prefix.
    ///
    /// # Panics
    ///
    /// - Panics if `hex` is not a valid hexadecimal integer. Only used on built-in constants.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        Self::new(hex_int(hex))
    }

    fn sqrt_method(&self) -> SqrtMethod {
        let p = &self.prime;
        let low = (p % 8u32).to_u32_digits().first().copied().unwrap_or(0);

        match low {
            3 | 7 => SqrtMethod::ThreeMod4 {
                exp: (p + 1u32) >> 2u32,
            },
            5 => {
                // 2 is a non-residue when p = 5 mod 8
                let quarter = (p - 1u32) >> 2u32;
                SqrtMethod::FiveMod8 {
                    exp: (p + 3u32) >> 3u32,
                    sqrt_minus_one: BigUint::from(2u32).modpow(&quarter, p),
                }
            }
            _ => {
                let mut q = p - 1u32;
                let mut s = 0u64;
                while !q.bit(0) {
                    q >>= 1u32;
                    s += 1;
                }

                let mut z = BigUint::from(2u32);
                while self.is_square(&z) {
                    z += 1u32;
                }

                SqrtMethod::TonelliShanks {
                    c: z.modpow(&q, p),
                    s,
                    q,
                }
            }
        }
    }

    /// The field modulus.
    #[must_use]
    pub fn order(&self) -> &BigUint {
        &self.prime
    }

    /// The bit length of the modulus.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// The byte length of canonical encodings, `ceil(bit_len / 8)`.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Returns `x mod p`.
    #[must_use]
    pub fn reduce(&self, x: &BigUint) -> BigUint {
        x % &self.prime
    }

    /// Maps a small signed integer into the field, e.g. `-10` to `p - 10`.
    #[must_use]
    pub fn from_i64(&self, v: i64) -> BigUint {
        let magnitude = self.reduce(&BigUint::from(v.unsigned_abs()));
        if v < 0 {
            self.neg(&magnitude)
        } else {
            magnitude
        }
    }

    #[must_use]
    pub fn is_zero(&self, x: &BigUint) -> bool {
        x.is_zero()
    }

    #[must_use]
    pub fn add(&self, x: &BigUint, y: &BigUint) -> BigUint {
        (x + y) % &self.prime
    }

    #[must_use]
    pub fn sub(&self, x: &BigUint, y: &BigUint) -> BigUint {
        (x + &self.prime - self.reduce(y)) % &self.prime
    }

    #[must_use]
    pub fn neg(&self, x: &BigUint) -> BigUint {
        if x.is_zero() {
            BigUint::zero()
        } else {
            &self.prime - x
        }
    }

    #[must_use]
    pub fn mul(&self, x: &BigUint, y: &BigUint) -> BigUint {
        (x * y) % &self.prime
    }

    #[must_use]
    pub fn square(&self, x: &BigUint) -> BigUint {
        self.mul(x, x)
    }

    /// Returns `x^e mod p`.
    #[must_use]
    pub fn exp(&self, x: &BigUint, e: &BigUint) -> BigUint {
        x.modpow(e, &self.prime)
    }

    /// Multiplicative inverse with the `inv0` convention: the inverse of 0 is 0.
    #[must_use]
    pub fn inv(&self, x: &BigUint) -> BigUint {
        self.exp(x, &self.inv_exp)
    }

    /// Returns whether `x` is a square in the field. Zero is a square.
    #[must_use]
    pub fn is_square(&self, x: &BigUint) -> bool {
        let l = self.exp(x, &self.legendre_exp);
        l.is_zero() || l.is_one()
    }

    /// Returns a square root of `x`, or `None` if `x` is not a square.
    ///
    /// Which of the two roots is returned is unspecified; callers fix the
    /// sign with [`Field::sgn0`].
    #[must_use]
    pub fn sqrt(&self, x: &BigUint) -> Option<BigUint> {
        let candidate = match &self.sqrt {
            SqrtMethod::ThreeMod4 { exp } => self.exp(x, exp),
            SqrtMethod::FiveMod8 {
                exp,
                sqrt_minus_one,
            } => {
                let tv1 = self.exp(x, exp);
                if self.square(&tv1) == *x {
                    tv1
                } else {
                    self.mul(&tv1, sqrt_minus_one)
                }
            }
            SqrtMethod::TonelliShanks { s, q, c } => self.tonelli_shanks(x, *s, q, c)?,
        };

        (self.square(&candidate) == *x).then_some(candidate)
    }

    fn tonelli_shanks(&self, x: &BigUint, s: u64, q: &BigUint, c: &BigUint) -> Option<BigUint> {
        if x.is_zero() {
            return Some(BigUint::zero());
        }
        if !self.is_square(x) {
            return None;
        }

        let mut m = s;
        let mut c = c.clone();
        let mut t = self.exp(x, q);
        let mut r = self.exp(x, &((q + 1u32) >> 1u32));

        while !t.is_one() {
            // least i in (0, m) with t^(2^i) = 1
            let mut i = 0u64;
            let mut t2i = t.clone();
            while !t2i.is_one() {
                t2i = self.square(&t2i);
                i += 1;
                if i == m {
                    return None;
                }
            }

            let mut b = c.clone();
            for _ in 0..(m - i - 1) {
                b = self.square(&b);
            }

            m = i;
            c = self.square(&b);
            t = self.mul(&t, &c);
            r = self.mul(&r, &b);
        }

        Some(r)
    }

    /// The RFC 9380 `sgn0` of a prime field element: its least significant bit.
    #[must_use]
    pub fn sgn0(&self, x: &BigUint) -> bool {
        x.bit(0)
    }

    /// Returns `b` if `choice` is set, `a` otherwise.
    #[must_use]
    pub fn cmov(&self, a: &BigUint, b: &BigUint, choice: bool) -> BigUint {
        if choice {
            b.clone()
        } else {
            a.clone()
        }
    }

    /// Big-endian encoding, left-padded with zeros to [`Field::byte_len`] bytes.
    #[must_use]
    pub fn encode(&self, x: &BigUint) -> Vec<u8> {
        let bytes = self.reduce(x).to_bytes_be();
        let mut out = vec![0u8; self.byte_len];
        let offset = self.byte_len.saturating_sub(bytes.len());
        out[offset..].copy_from_slice(&bytes[bytes.len().saturating_sub(self.byte_len)..]);

        out
    }

    /// Little-endian variant of [`Field::encode`].
    #[must_use]
    pub fn encode_le(&self, x: &BigUint) -> Vec<u8> {
        let mut out = self.encode(x);
        out.reverse();
        out
    }

    /// Decodes a canonical big-endian encoding.
    ///
    /// # Errors
    ///
    /// - `EmptyEncoding` if `bytes` is empty
    /// - `InvalidLength` if `bytes` is not exactly [`Field::byte_len`] long
    /// - `InvalidFieldElement` if the value is not smaller than the modulus
    pub fn decode(&self, bytes: &[u8]) -> Result<BigUint, Error> {
        if bytes.is_empty() {
            return Err(Error::EmptyEncoding);
        }
        if bytes.len() != self.byte_len {
            return Err(Error::InvalidLength {
                expected: self.byte_len,
                actual: bytes.len(),
            });
        }

        let x = BigUint::from_bytes_be(bytes);
        if x >= self.prime {
            return Err(Error::InvalidFieldElement);
        }

        Ok(x)
    }
}

/// Parses a built-in hexadecimal constant.
///
/// # Panics
///
/// - Panics on invalid input. Only used on constants of this crate.
#[must_use]
pub(crate) fn hex_int(hex: &str) -> BigUint {
    let digits = hex.trim_start_matches("0x");
    BigUint::parse_bytes(digits.as_bytes(), 16).expect("hex constant is valid")
}

/// Parses a built-in decimal constant.
///
/// # Panics
///
/// - Panics on invalid input. Only used on constants of this crate.
#[must_use]
pub(crate) fn dec_int(dec: &str) -> BigUint {
    BigUint::parse_bytes(dec.as_bytes(), 10).expect("decimal constant is valid")
}
