// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

use crate::group::{DECAF448_SHAKE256, MAX_ID};
use crate::registry;
use crate::utils::error::{ERR_CAST_ELEMENT, ERR_CAST_SCALAR, ERR_INVALID_GROUP, ERR_ZERO_LENGTH_DST};
use crate::{Element, Error, Group, Scalar};

const DST: &[u8] = b"ecgroup-tests-V01-CS00-facade";

fn random_scalar(group: Group) -> Scalar {
    let mut s = group.new_scalar();
    s.random();
    s
}

fn random_element(group: Group) -> Element {
    let mut e = group.base();
    e.multiply(&random_scalar(group));
    e
}

fn uint(group: Group, value: u64) -> Scalar {
    let mut s = group.new_scalar();
    s.set_uint64(value);
    s
}

fn little_endian(group: Group) -> bool {
    matches!(group, Group::Ristretto255Sha512 | Group::Edwards25519Sha512)
}

#[test]
fn test_group_identifiers() {
    for id in 0..=u8::MAX {
        let expected = matches!(id, 1 | 3..=7);
        assert_eq!(Group::available(id), expected, "id {id}");
        assert_eq!(Group::try_from(id).is_ok(), expected, "id {id}");
    }

    assert!(!Group::available(DECAF448_SHAKE256));
    assert!(!Group::available(MAX_ID));

    for group in Group::ALL {
        assert_eq!(Group::from_id(group.id()), group);
        assert_eq!(u8::from(group), group.id());
        assert!(group.id() < MAX_ID);
    }
}

#[test]
#[should_panic(expected = "invalid group identifier")]
fn test_from_id_reserved_panics() {
    let _ = Group::from_id(DECAF448_SHAKE256);
}

#[test]
#[should_panic(expected = "invalid group identifier")]
fn test_from_id_zero_panics() {
    let _ = Group::from_id(0);
}

#[test]
fn test_panic_messages() {
    assert_eq!(ERR_INVALID_GROUP, "invalid group identifier");
    assert_eq!(ERR_ZERO_LENGTH_DST, "zero-length DST");
    assert!(ERR_CAST_ELEMENT.contains("wrong group"));
    assert!(ERR_CAST_SCALAR.contains("wrong group"));
}

#[test]
fn test_lengths_table() {
    let expected = [
        (Group::Ristretto255Sha512, 32, 32),
        (Group::P256Sha256, 33, 32),
        (Group::P384Sha384, 49, 48),
        (Group::P521Sha512, 67, 66),
        (Group::Edwards25519Sha512, 32, 32),
        (Group::Secp256k1Sha256, 33, 32),
    ];

    for (group, element_length, scalar_length) in expected {
        assert_eq!(group.element_length(), element_length, "{group}");
        assert_eq!(group.scalar_length(), scalar_length, "{group}");
        assert_eq!(group.base().encode().len(), element_length, "{group}");
        assert_eq!(random_scalar(group).encode().len(), scalar_length, "{group}");
    }
}

#[test]
fn test_ciphersuites_and_display() {
    let expected = [
        (Group::Ristretto255Sha512, "ristretto255_XMD:SHA-512_R255MAP_RO_", "ristretto255_XMD:SHA-512_R255MAP_RO_"),
        (Group::P256Sha256, "P256_XMD:SHA-256_SSWU_RO_", "P256_XMD:SHA-256_SSWU_NU_"),
        (Group::P384Sha384, "P384_XMD:SHA-384_SSWU_RO_", "P384_XMD:SHA-384_SSWU_NU_"),
        (Group::P521Sha512, "P521_XMD:SHA-512_SSWU_RO_", "P521_XMD:SHA-512_SSWU_NU_"),
        (Group::Edwards25519Sha512, "edwards25519_XMD:SHA-512_ELL2_RO_", "edwards25519_XMD:SHA-512_ELL2_NU_"),
        (Group::Secp256k1Sha256, "secp256k1_XMD:SHA-256_SSWU_RO_", "secp256k1_XMD:SHA-256_SSWU_NU_"),
    ];

    for (group, ro, nu) in expected {
        assert_eq!(group.ciphersuite(), ro);
        assert_eq!(group.encode_ciphersuite(), nu);
        assert_eq!(group.to_string(), ro);
    }
}

#[test]
fn test_make_dst_all_groups() {
    let expected = [
        (Group::Ristretto255Sha512, "app-V01-CS01-ristretto255_XMD:SHA-512_R255MAP_RO_"),
        (Group::P256Sha256, "app-V01-CS03-P256_XMD:SHA-256_SSWU_RO_"),
        (Group::P384Sha384, "app-V01-CS04-P384_XMD:SHA-384_SSWU_RO_"),
        (Group::P521Sha512, "app-V01-CS05-P521_XMD:SHA-512_SSWU_RO_"),
        (Group::Edwards25519Sha512, "app-V01-CS06-edwards25519_XMD:SHA-512_ELL2_RO_"),
        (Group::Secp256k1Sha256, "app-V01-CS07-secp256k1_XMD:SHA-256_SSWU_RO_"),
    ];

    for (group, dst) in expected {
        assert_eq!(group.make_dst("app", 1), dst.as_bytes());
    }
}

#[test]
fn test_group_axioms() {
    for group in Group::ALL {
        let a = random_scalar(group);
        let b = random_scalar(group);

        // (a + b)B == aB + bB
        let mut sum = a.copy();
        sum.add(&b);
        let mut left = group.base();
        left.multiply(&sum);

        let mut a_b = group.base();
        a_b.multiply(&a);
        let mut b_b = group.base();
        b_b.multiply(&b);
        let mut right = a_b.copy();
        right.add(&b_b);
        assert_eq!(left, right, "{group}");

        // aB + (-a)B == identity
        let mut neg_a = a.copy();
        neg_a.negate();
        let mut neg = group.base();
        neg.multiply(&neg_a);
        let mut zero = a_b.copy();
        zero.add(&neg);
        assert!(zero.is_identity(), "{group}");

        // 2B == B + B
        let mut doubled = group.base();
        doubled.double();
        let mut added = group.base();
        added.add(&group.base());
        assert_eq!(doubled, added, "{group}");

        let mut two_b = group.base();
        two_b.multiply(&uint(group, 2));
        assert_eq!(doubled, two_b, "{group}");

        // 3B == B + B + B
        let mut three_b = group.base();
        three_b.multiply(&uint(group, 3));
        let base = group.base();
        let mut triple = group.base();
        triple.add(&base).add(&base);
        assert_eq!(three_b, triple, "{group}");

        // aB - aB == identity
        let mut diff = a_b.copy();
        diff.subtract(&a_b);
        assert!(diff.is_identity(), "{group}");

        let mut negated = a_b.copy();
        negated.negate();
        assert_eq!(negated, neg, "{group}");
    }
}

#[test]
fn test_scalar_arithmetic() {
    for group in Group::ALL {
        let a = random_scalar(group);

        let mut inverse = a.copy();
        inverse.invert();
        let mut product = a.copy();
        product.multiply(&inverse);
        assert_eq!(product, uint(group, 1), "{group}");

        let mut zero = group.new_scalar();
        assert!(zero.is_zero());
        zero.invert();
        assert!(zero.is_zero(), "{group}");

        let mut minus_one = group.new_scalar();
        minus_one.minus_one();
        minus_one.add(&uint(group, 1));
        assert!(minus_one.is_zero(), "{group}");

        let mut diff = uint(group, 10);
        diff.subtract(&uint(group, 3));
        assert_eq!(diff, uint(group, 7), "{group}");

        let mut twelve = uint(group, 3);
        twelve.multiply(&uint(group, 4));
        assert!(twelve.equal(&uint(group, 12)), "{group}");

        let mut one = group.new_scalar();
        one.one();
        assert_eq!(one, uint(group, 1), "{group}");
        one.zero();
        assert!(one.is_zero(), "{group}");
    }
}

#[test]
fn test_scalar_none_operands() {
    let group = Group::P384Sha384;
    let a = random_scalar(group);

    let mut s = a.copy();
    s.add(None).subtract(None);
    assert_eq!(s, a);

    s.multiply(None);
    assert!(s.is_zero());

    let mut t = a.copy();
    t.set(None);
    assert!(t.is_zero());

    t.set(&a);
    assert_eq!(t, a);
}

#[test]
fn test_element_none_operands() {
    let group = Group::Secp256k1Sha256;
    let x = random_element(group);

    let mut e = x.copy();
    e.add(None).subtract(None);
    assert_eq!(e, x);

    e.multiply(None);
    assert!(e.is_identity());

    let mut f = x.copy();
    f.set(None);
    assert!(f.is_identity());

    f.set(&x);
    assert_eq!(f, x);
    f.identity();
    assert!(f.is_identity());
    f.base();
    assert_eq!(f, group.base());
}

#[test]
fn test_copies_are_independent() {
    let group = Group::Ristretto255Sha512;
    let a = random_scalar(group);
    let mut b = a.copy();
    b.negate();
    assert_ne!(a, b);

    let x = group.base();
    let mut y = x.clone();
    y.double();
    assert_ne!(x, y);
    assert_eq!(x, group.base());
}

#[test]
fn test_identity_handling() {
    let goldens = [
        (Group::Ristretto255Sha512, "00".repeat(32)),
        (Group::P256Sha256, format!("02{}", "00".repeat(32))),
        (Group::P384Sha384, format!("02{}", "00".repeat(48))),
        (Group::P521Sha512, format!("02{}", "00".repeat(66))),
        (Group::Edwards25519Sha512, format!("01{}", "00".repeat(31))),
        (Group::Secp256k1Sha256, format!("02{}", "00".repeat(32))),
    ];

    for (group, golden) in goldens {
        let identity = group.new_element();
        assert!(identity.is_identity(), "{group}");
        assert_eq!(identity.hex(), golden, "{group}");

        let x = random_element(group);
        let mut sum = identity.copy();
        sum.add(&x);
        assert_eq!(sum, x, "{group}");

        let mut scaled = identity.copy();
        scaled.multiply(&random_scalar(group));
        assert!(scaled.is_identity(), "{group}");

        let mut scaled = identity.copy();
        scaled.multiply(&group.new_scalar());
        assert!(scaled.is_identity(), "{group}");

        let mut scaled = identity.copy();
        scaled.multiply(None);
        assert!(scaled.is_identity(), "{group}");

        let mut by_zero = x.copy();
        by_zero.multiply(&group.new_scalar());
        assert!(by_zero.is_identity(), "{group}");
    }
}

#[test]
fn test_roundtrip_all_groups() {
    for group in Group::ALL {
        for _ in 0..8 {
            let s = random_scalar(group);
            let mut decoded = group.new_scalar();
            decoded.decode(&s.encode()).unwrap();
            assert_eq!(decoded, s, "{group}");

            let mut decoded = group.new_scalar();
            decoded.decode_hex(&s.hex()).unwrap();
            assert_eq!(decoded, s, "{group}");

            let e = random_element(group);
            let mut decoded = group.new_element();
            decoded.decode(&e.encode()).unwrap();
            assert_eq!(decoded, e, "{group}");

            let mut decoded = group.new_element();
            decoded.decode_hex(&e.hex()).unwrap();
            assert_eq!(decoded, e, "{group}");
        }
    }
}

#[test]
fn test_decode_empty_fails() {
    for group in Group::ALL {
        let mut s = group.new_scalar();
        let err = s.decode(&[]).unwrap_err();
        assert!(matches!(err.root(), Error::EmptyEncoding), "{group}");

        let mut e = group.new_element();
        let err = e.decode(&[]).unwrap_err();
        assert!(matches!(err.root(), Error::EmptyEncoding), "{group}");
    }
}

#[test]
fn test_decode_failure_leaves_value_unchanged() {
    for group in Group::ALL {
        let s = random_scalar(group);
        let mut target = s.copy();
        assert!(target.decode(&[0xff; 3]).is_err());
        assert_eq!(target, s, "{group}");

        let e = random_element(group);
        let mut target = e.copy();
        assert!(target.decode(&group.new_element().encode()).is_err());
        assert_eq!(target, e, "{group}");
    }
}

#[test]
fn test_identity_decode_is_rejected_with_context() {
    for group in Group::ALL {
        let identity = group.new_element();
        let mut e = group.new_element();

        let err = e.decode(&identity.encode()).unwrap_err();
        assert!(matches!(err.root(), Error::IdentityElement(_)), "{group}");
        assert!(err.to_string().starts_with("element Decode: "), "{group}");

        let err = e.decode_hex(&identity.hex()).unwrap_err();
        assert!(matches!(err.root(), Error::IdentityElement(_)), "{group}");
        assert!(err.to_string().starts_with("element DecodeHex: "), "{group}");
    }
}

#[test]
fn test_decode_hex_errors() {
    let group = Group::P256Sha256;

    let mut s = group.new_scalar();
    let err = s.decode_hex("zz").unwrap_err();
    assert!(matches!(err.root(), Error::Hex(_)));
    assert!(err.to_string().starts_with("scalar DecodeHex: "));

    let mut e = group.new_element();
    let err = e.decode_hex("0").unwrap_err();
    assert!(matches!(err.root(), Error::Hex(_)));

    let err = e.decode_hex("02").unwrap_err();
    assert!(matches!(err.root(), Error::InvalidLength { expected: 33, actual: 1 }));
}

#[test]
fn test_scalar_order_boundary() {
    for group in Group::ALL {
        let length = group.scalar_length();

        let mut order = vec![0u8; length];
        let be = group.order();
        order[length - be.len()..].copy_from_slice(&be);

        let mut order_minus_one = order.clone();
        *order_minus_one.last_mut().unwrap() -= 1;

        if little_endian(group) {
            order.reverse();
            order_minus_one.reverse();
        }

        let mut s = group.new_scalar();
        let err = s.decode(&order).unwrap_err();
        assert!(matches!(err.root(), Error::InvalidScalarEncoding), "{group}");

        let mut minus_one = group.new_scalar();
        minus_one.minus_one();
        assert_eq!(minus_one.encode(), order_minus_one, "{group}");

        s.decode(&order_minus_one).unwrap();
        assert_eq!(s, minus_one, "{group}");
    }
}

#[test]
fn test_scalar_byte_order() {
    for group in Group::ALL {
        let encoded = uint(group, 1).encode();
        let (first, last) = (encoded[0], encoded[encoded.len() - 1]);
        if little_endian(group) {
            assert_eq!((first, last), (1, 0), "{group}");
        } else {
            assert_eq!((first, last), (0, 1), "{group}");
        }
    }
}

#[test]
fn test_p256_base_end_to_end() {
    let hex = "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";
    let group = Group::P256Sha256;
    assert_eq!(group.base().hex(), hex);

    let mut e = group.new_element();
    e.decode_hex(hex).unwrap();
    assert!(e.equal(&group.base()));
}

#[test]
fn test_mult_bytes_matches_multiply() {
    for group in Group::ALL {
        let k = random_scalar(group);
        let p = random_element(group);

        let mut expected = p.clone();
        expected.multiply(&k);

        let product = group.mult_bytes(&k.encode(), &p.encode()).unwrap();
        assert_eq!(product, expected, "{group}");

        let zero = group.mult_bytes(&group.new_scalar().encode(), &p.encode()).unwrap();
        assert!(zero.is_identity(), "{group}");
    }
}

#[test]
fn test_mult_bytes_bad_scalar() {
    for group in Group::ALL {
        let p = group.base().encode();

        let err = group.mult_bytes(&[1u8], &p).unwrap_err();
        assert!(matches!(err.root(), Error::InvalidLength { actual: 1, .. }), "{group}");
        assert!(err.to_string().starts_with("MultBytes: scalar Decode: "), "{group}");

        let err = group.mult_bytes(&[], &p).unwrap_err();
        assert!(matches!(err.root(), Error::EmptyEncoding), "{group}");

        let too_big = vec![0xffu8; group.scalar_length()];
        let err = group.mult_bytes(&too_big, &p).unwrap_err();
        assert!(matches!(err.root(), Error::InvalidScalarEncoding), "{group}");
    }
}

#[test]
fn test_mult_bytes_bad_element() {
    for group in Group::ALL {
        let k = uint(group, 5).encode();

        let identity = group.new_element().encode();
        let err = group.mult_bytes(&k, &identity).unwrap_err();
        assert!(matches!(err.root(), Error::IdentityElement(_)), "{group}");
        assert!(err.to_string().starts_with("MultBytes: element Decode: "), "{group}");

        let err = group.mult_bytes(&k, &[0x02]).unwrap_err();
        assert!(matches!(err.root(), Error::InvalidLength { actual: 1, .. }), "{group}");

        let err = group.mult_bytes(&k, &[]).unwrap_err();
        assert!(matches!(err.root(), Error::EmptyEncoding), "{group}");
    }
}

#[test]
fn test_hash_determinism_and_non_degeneracy() {
    for group in Group::ALL {
        let dst = group.make_dst("ecgroup-tests", 1);
        let base = group.base();

        for i in 0u32..16 {
            let msg = i.to_be_bytes();

            let p = group.hash_to_group(&msg, &dst).unwrap();
            assert_eq!(p, group.hash_to_group(&msg, &dst).unwrap(), "{group}");
            assert!(!p.is_identity(), "{group}");
            assert_ne!(p, base, "{group}");

            let q = group.encode_to_group(&msg, &dst).unwrap();
            assert_eq!(q, group.encode_to_group(&msg, &dst).unwrap(), "{group}");
            assert!(!q.is_identity(), "{group}");

            let s = group.hash_to_scalar(&msg, &dst).unwrap();
            assert_eq!(s, group.hash_to_scalar(&msg, &dst).unwrap(), "{group}");
            assert!(!s.is_zero(), "{group}");
            assert_ne!(s, uint(group, 1), "{group}");
        }
    }
}

#[test]
fn test_hash_outputs_decode() {
    for group in Group::ALL {
        let p = group.hash_to_group(b"roundtrip", DST).unwrap();
        let mut decoded = group.new_element();
        decoded.decode(&p.encode()).unwrap();
        assert_eq!(decoded, p, "{group}");
    }
}

#[test]
fn test_hash_domain_separation() {
    for group in Group::ALL {
        let a = group.hash_to_group(b"msg", b"ecgroup-tests-dst-A").unwrap();
        let b = group.hash_to_group(b"msg", b"ecgroup-tests-dst-B").unwrap();
        assert_ne!(a, b, "{group}");

        let c = group.hash_to_group(b"other", b"ecgroup-tests-dst-A").unwrap();
        assert_ne!(a, c, "{group}");
    }
}

#[test]
fn test_encode_to_group_differs_from_hash_to_group() {
    for group in Group::ALL {
        if group == Group::Ristretto255Sha512 {
            continue;
        }
        let ro = group.hash_to_group(b"msg", DST).unwrap();
        let nu = group.encode_to_group(b"msg", DST).unwrap();
        assert_ne!(ro, nu, "{group}");
    }
}

#[test]
fn test_short_dst_is_accepted() {
    let p = Group::P256Sha256.hash_to_group(b"msg", b"short").unwrap();
    assert!(!p.is_identity());
}

#[test]
#[should_panic(expected = "zero-length DST")]
fn test_hash_to_group_empty_dst_panics() {
    let _ = Group::P256Sha256.hash_to_group(b"msg", b"");
}

#[test]
#[should_panic(expected = "zero-length DST")]
fn test_hash_to_scalar_empty_dst_panics() {
    let _ = Group::Ristretto255Sha512.hash_to_scalar(b"msg", b"");
}

#[test]
#[should_panic(expected = "zero-length DST")]
fn test_encode_to_group_empty_dst_panics() {
    let _ = Group::Edwards25519Sha512.encode_to_group(b"msg", b"");
}

#[test]
#[should_panic(expected = "could not cast to same group element")]
fn test_cross_group_element_add_panics() {
    let mut a = Group::P256Sha256.base();
    a.add(&Group::Secp256k1Sha256.base());
}

#[test]
#[should_panic(expected = "could not cast to same group element")]
fn test_cross_group_element_equal_panics() {
    let a = Group::Ristretto255Sha512.base();
    let _ = a.equal(&Group::Edwards25519Sha512.base());
}

#[test]
#[should_panic(expected = "could not cast to same group scalar")]
fn test_cross_group_multiply_panics() {
    let mut a = Group::P384Sha384.base();
    a.multiply(&uint(Group::P521Sha512, 2));
}

#[test]
#[should_panic(expected = "could not cast to same group scalar")]
fn test_cross_group_scalar_add_panics() {
    let mut a = uint(Group::P256Sha256, 1);
    a.add(&uint(Group::Secp256k1Sha256, 1));
}

#[test]
fn test_cross_group_partial_eq_is_false() {
    // Same byte width, different groups.
    assert_ne!(uint(Group::P256Sha256, 5), uint(Group::Secp256k1Sha256, 5));
    assert_ne!(Group::Ristretto255Sha512.new_element(), Group::P256Sha256.new_element());
}

#[test]
fn test_registry_exactly_once() {
    let fresh = registry::Registry::new();
    let group = Group::P384Sha384;
    assert!(!fresh.is_ready(group));

    let addresses: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| fresh.backend(group) as *const _ as usize))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    assert!(fresh.is_ready(group));
    assert!(!fresh.is_ready(Group::P256Sha256));
    assert_eq!(addresses[0], fresh.backend(group) as *const _ as usize);

    // The process-wide registry is distinct and stable.
    assert!(std::ptr::eq(registry::backend(group), registry::backend(group)));
    assert!(registry::is_ready(group));
    assert!(!std::ptr::eq(registry::backend(group), fresh.backend(group)));
}

#[test]
fn test_arbitrary_ids_and_bytes() {
    // Every id/input pair must yield either a value or a data fault.
    let inputs: Vec<Vec<u8>> = vec![
        vec![],
        vec![0x00],
        vec![0x02; 33],
        vec![0x03; 49],
        vec![0xff; 32],
        vec![0x01; 67],
        (0u8..66).collect(),
        (0u8..32).rev().collect(),
    ];

    for id in 0..=u8::MAX {
        let Ok(group) = Group::try_from(id) else {
            continue;
        };

        for input in &inputs {
            let mut s = group.new_scalar();
            let _ = s.decode(input);
            let mut e = group.new_element();
            if e.decode(input).is_ok() {
                assert!(!e.is_identity());
                assert_eq!(&e.encode(), input);
            }
        }
    }
}
