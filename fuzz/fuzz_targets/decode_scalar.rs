// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Fuzz target for scalar decoding.

#![no_main]

use ecgroup::Group;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, Vec<u8>)| {
    let (id, bytes) = input;
    let Ok(group) = Group::try_from(id) else {
        return;
    };

    let mut scalar = group.new_scalar();
    if scalar.decode(&bytes).is_ok() {
        assert_eq!(scalar.encode(), bytes);
    }
});
