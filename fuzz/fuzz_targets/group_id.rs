// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Fuzz target for group identifiers.

#![no_main]

use ecgroup::Group;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|id: u8| {
    match Group::try_from(id) {
        Ok(group) => {
            assert!(Group::available(id));
            assert_eq!(group.id(), id);
            assert!(group.base().encode().len() == group.element_length());
        }
        Err(_) => assert!(!Group::available(id)),
    }
});
