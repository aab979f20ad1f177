// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Fuzz target for element decoding.

#![no_main]

use ecgroup::Group;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, Vec<u8>)| {
    let (id, bytes) = input;
    let Ok(group) = Group::try_from(id) else {
        return;
    };

    let mut element = group.new_element();
    if element.decode(&bytes).is_ok() {
        assert!(!element.is_identity());
        assert_eq!(element.encode(), bytes);
    }
});
