// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

use super::json::{get_group, get_hex_field, DEFAULT_GROUP_KEY};
use super::*;
use crate::element::Element;
use crate::group::Group;
use crate::scalar::Scalar;
use crate::utils::error::Error;

const P256_BASE: &str = "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";

#[test]
fn test_make_dst_format() {
    assert_eq!(
        make_dst("app", 1, 3, "P256_XMD:SHA-256_SSWU_RO_"),
        b"app-V01-CS03-P256_XMD:SHA-256_SSWU_RO_".to_vec()
    );
    assert_eq!(make_dst("x", 12, 7, "suite"), b"x-V12-CS07-suite".to_vec());
    assert_eq!(make_dst("", 0, 1, ""), b"-V00-CS01-".to_vec());
}

#[test]
fn test_get_group() {
    for group in Group::ALL {
        let json = format!(r#"{{"group":{},"scalar":"00"}}"#, group.id());
        assert_eq!(get_group(&json, DEFAULT_GROUP_KEY).unwrap(), group);
    }

    let custom = r#"{"curve":6}"#;
    assert_eq!(get_group(custom, "curve").unwrap(), Group::Edwards25519Sha512);
}

#[test]
fn test_get_group_errors() {
    let missing = get_group(r#"{"scalar":"00"}"#, DEFAULT_GROUP_KEY);
    assert!(matches!(missing, Err(Error::InvalidJsonEncoding)));

    let duplicate = get_group(r#"{"group":3,"group":3}"#, DEFAULT_GROUP_KEY);
    assert!(matches!(duplicate, Err(Error::InvalidJsonEncoding)));

    // Quoted values are not bare integers.
    let quoted = get_group(r#"{"group":"3"}"#, DEFAULT_GROUP_KEY);
    assert!(matches!(quoted, Err(Error::InvalidJsonEncoding)));

    let not_int = get_group(r#"{"group":abc}"#, DEFAULT_GROUP_KEY);
    assert!(matches!(not_int, Err(Error::GroupParse(_))));

    let too_big = get_group(r#"{"group":300}"#, DEFAULT_GROUP_KEY);
    assert!(matches!(too_big, Err(Error::InvalidGroup)));

    for id in [0, 2, 8, 255] {
        let json = format!(r#"{{"group":{id}}}"#);
        assert!(matches!(get_group(&json, DEFAULT_GROUP_KEY), Err(Error::InvalidGroup)));
    }
}

#[test]
fn test_get_group_escapes_key() {
    // `.` must not act as a wildcard.
    let json = r#"{"aXb":3}"#;
    assert!(matches!(get_group(json, "a.b"), Err(Error::InvalidJsonEncoding)));

    let json = r#"{"a.b":3}"#;
    assert_eq!(get_group(json, "a.b").unwrap(), Group::P256Sha256);
}

#[test]
fn test_get_hex_field() {
    assert_eq!(get_hex_field(r#"{"k":"0aBf"}"#, "k").unwrap(), "0aBf");
    assert_eq!(get_hex_field(r#"{"k":""}"#, "k").unwrap(), "");

    assert!(matches!(
        get_hex_field(r#"{"k":"xyz"}"#, "k"),
        Err(Error::InvalidJsonEncoding)
    ));
    assert!(matches!(
        get_hex_field(r#"{"k":"00","k":"01"}"#, "k"),
        Err(Error::InvalidJsonEncoding)
    ));
}

#[test]
fn test_element_to_json_golden() {
    let base = Group::P256Sha256.base();
    let expected = format!(r#"{{"group":3,"element":"{P256_BASE}"}}"#);
    assert_eq!(base.to_json(), expected);

    let decoded = Element::from_json(&expected).unwrap();
    assert_eq!(decoded, base);
}

#[test]
fn test_scalar_json_roundtrip_all_groups() {
    for group in Group::ALL {
        let mut scalar = group.new_scalar();
        scalar.random();

        let json = scalar.to_json();
        assert!(json.starts_with(&format!(r#"{{"group":{},"scalar":""#, group.id())));

        let decoded = Scalar::from_json(&json).unwrap();
        assert_eq!(decoded.group(), group);
        assert_eq!(decoded, scalar);
    }
}

#[test]
fn test_element_json_roundtrip_all_groups() {
    for group in Group::ALL {
        let mut scalar = group.new_scalar();
        scalar.random();
        let mut element = group.base();
        element.multiply(&scalar);

        let decoded = Element::from_json(&element.to_json()).unwrap();
        assert_eq!(decoded, element);
    }
}

#[test]
fn test_from_json_errors() {
    let identity = Group::P256Sha256.new_element();
    let err = Element::from_json(&identity.to_json()).unwrap_err();
    assert!(matches!(err.root(), Error::IdentityElement("P256")));
    assert!(err.to_string().starts_with("element FromJSON: element DecodeHex: "));

    let mut scalar = Group::P256Sha256.new_scalar();
    scalar.one();
    let err = Element::from_json(&scalar.to_json()).unwrap_err();
    assert!(matches!(err.root(), Error::InvalidJsonEncoding));

    let err = Scalar::from_json(r#"{"group":2,"scalar":"00"}"#).unwrap_err();
    assert!(matches!(err.root(), Error::InvalidGroup));
    assert!(err.to_string().starts_with("scalar FromJSON: "));

    let err = Scalar::from_json(r#"{"group":3,"scalar":"01"}"#).unwrap_err();
    assert!(matches!(err.root(), Error::InvalidLength { expected: 32, actual: 1 }));
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn test_serde_matches_json_encoding() {
        for group in Group::ALL {
            let mut scalar = group.new_scalar();
            scalar.random();
            assert_eq!(serde_json::to_string(&scalar).unwrap(), scalar.to_json());

            let element = group.base();
            assert_eq!(serde_json::to_string(&element).unwrap(), element.to_json());
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut scalar = Group::Secp256k1Sha256.new_scalar();
        scalar.random();
        let json = serde_json::to_string(&scalar).unwrap();
        let decoded: Scalar = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, scalar);

        let mut element = Group::Ristretto255Sha512.base();
        element.double();
        let json = serde_json::to_string(&element).unwrap();
        let decoded: Element = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, element);
    }

    #[test]
    fn test_serde_rejects_invalid_values() {
        let unknown_group = serde_json::from_str::<Scalar>(r#"{"group":2,"scalar":"00"}"#);
        assert!(unknown_group.is_err());

        let identity = Group::P384Sha384.new_element().to_json();
        assert!(serde_json::from_str::<Element>(&identity).is_err());

        let missing_field = serde_json::from_str::<Element>(r#"{"group":3}"#);
        assert!(missing_field.is_err());
    }
}
