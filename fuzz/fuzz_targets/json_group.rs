// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Fuzz target for JSON decoding.

#![no_main]

use ecgroup::encoding::json::{get_group, DEFAULT_GROUP_KEY};
use ecgroup::{Element, Scalar};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|json: &str| {
    let _ = get_group(json, DEFAULT_GROUP_KEY);
    let _ = Scalar::from_json(json);
    let _ = Element::from_json(json);
});
