// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Serde implementations built on the hex encodings

use crate::element::Element;
use crate::group::Group;
use crate::scalar::Scalar;

use serde::{self, de::Error, Deserializer, Serializer};

/// Implement serde serialization as `{"group": <id>, "<field>": "<hex>"}`.
macro_rules! implement_serde {
    ($type:ty, $repr:ident, $field:ident, $new:ident) => {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct $repr {
            group: u8,
            $field: String,
        }

        impl serde::Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let repr = $repr {
                    group: self.group().id(),
                    $field: self.hex(),
                };
                serde::Serialize::serialize(&repr, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let repr: $repr = serde::Deserialize::deserialize(deserializer)?;
                let group = Group::try_from(repr.group).map_err(D::Error::custom)?;

                let mut value = group.$new();
                value.decode_hex(&repr.$field).map_err(D::Error::custom)?;

                Ok(value)
            }
        }
    };
}

// Scalar
implement_serde!(Scalar, ScalarRepr, scalar, new_scalar);

// Element
implement_serde!(Element, ElementRepr, element, new_element);
