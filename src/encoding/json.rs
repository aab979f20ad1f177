// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Targeted JSON field extraction
//!
//! Only the fields this crate writes are looked up, each with a single regular
//! expression. A key that is missing or present more than once is an
//! `InvalidJsonEncoding` error.

use crate::element::Element;
use crate::group::Group;
use crate::scalar::Scalar;
use crate::utils::error::Error;

use regex::Regex;

/// Key holding the group identifier.
pub const DEFAULT_GROUP_KEY: &str = "group";

const SCALAR_KEY: &str = "scalar";
const ELEMENT_KEY: &str = "element";

/// Returns the first capture of `pattern`, which must match exactly once.
fn single_capture(json: &str, pattern: &str) -> Result<String, Error> {
    let re = Regex::new(pattern).map_err(|_| Error::InvalidJsonEncoding)?;
    let mut captures = re.captures_iter(json);

    let first = captures.next().ok_or(Error::InvalidJsonEncoding)?;
    if captures.next().is_some() {
        return Err(Error::InvalidJsonEncoding);
    }

    first
        .get(1)
        .map(|m| m.as_str().to_string())
        .ok_or(Error::InvalidJsonEncoding)
}

/// Reads the group identifier stored under `key` in `json`.
///
/// # Examples
///
/// ```
/// use ecgroup::encoding::json::get_group;
/// use ecgroup::Group;
///
/// let group = get_group(r#"{"group":3,"other":"data"}"#, "group").unwrap();
/// assert_eq!(group, Group::P256Sha256);
/// ```
///
/// # Errors
///
/// - `InvalidJsonEncoding` if `key` does not appear exactly once with a bare value
/// - `GroupParse` if the value is not an integer
/// - `InvalidGroup` if the value is not an available group identifier
pub fn get_group(json: &str, key: &str) -> Result<Group, Error> {
    let pattern = format!(r#""{}":(\w+)"#, regex::escape(key));
    let value = single_capture(json, &pattern)?;

    let id: i64 = value.parse()?;
    let id = u8::try_from(id).map_err(|_| Error::InvalidGroup)?;

    Group::try_from(id)
}

/// Reads the hexadecimal string stored under `key` in `json`.
///
/// # Errors
///
/// - `InvalidJsonEncoding` if `key` does not appear exactly once with a hexadecimal string value
pub fn get_hex_field(json: &str, key: &str) -> Result<String, Error> {
    let pattern = format!(r#""{}":"([0-9a-fA-F]*)""#, regex::escape(key));
    single_capture(json, &pattern)
}

impl Scalar {
    /// JSON encoding `{"group":<id>,"scalar":"<hex>"}`.
    #[must_use]
    pub fn to_json(&self) -> String {
        format!(
            r#"{{"{DEFAULT_GROUP_KEY}":{},"{SCALAR_KEY}":"{}"}}"#,
            self.group().id(),
            self.hex()
        )
    }

    /// Decodes a scalar from the output of [`Scalar::to_json`].
    ///
    /// # Errors
    ///
    /// - any [`get_group`] or [`get_hex_field`] error
    /// - any [`Scalar::decode_hex`] error
    ///
    /// All wrapped in a `scalar FromJSON` context.
    pub fn from_json(json: &str) -> Result<Scalar, Error> {
        let decode = || -> Result<_, Error> {
            let group = get_group(json, DEFAULT_GROUP_KEY)?;
            let hex = get_hex_field(json, SCALAR_KEY)?;

            let mut scalar = group.new_scalar();
            scalar.decode_hex(&hex)?;

            Ok(scalar)
        };

        decode().map_err(|e| e.context("scalar FromJSON"))
    }
}

impl Element {
    /// JSON encoding `{"group":<id>,"element":"<hex>"}`.
    #[must_use]
    pub fn to_json(&self) -> String {
        format!(
            r#"{{"{DEFAULT_GROUP_KEY}":{},"{ELEMENT_KEY}":"{}"}}"#,
            self.group().id(),
            self.hex()
        )
    }

    /// Decodes an element from the output of [`Element::to_json`].
    ///
    /// The identity is rejected, as with [`Element::decode`].
    ///
    /// # Errors
    ///
    /// - any [`get_group`] or [`get_hex_field`] error
    /// - any [`Element::decode_hex`] error
    ///
    /// All wrapped in an `element FromJSON` context.
    pub fn from_json(json: &str) -> Result<Element, Error> {
        let decode = || -> Result<_, Error> {
            let group = get_group(json, DEFAULT_GROUP_KEY)?;
            let hex = get_hex_field(json, ELEMENT_KEY)?;

            let mut element = group.new_element();
            element.decode_hex(&hex)?;

            Ok(element)
        };

        decode().map_err(|e| e.context("element FromJSON"))
    }
}
