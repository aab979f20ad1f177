// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Process-wide registry of group backends
//!
//! Each backend is built the first time its group is used and lives for the
//! rest of the process. Concurrent first callers block until the one building
//! the backend is done, then all observe the same instance.

use crate::group::{Group, MAX_ID};
use crate::groups::{
    Backend, Edwards25519Group, P256Group, P384Group, P521Group, Ristretto255Group,
    Secp256k1Group,
};
use crate::traits::groups::CurveBackend;

use std::sync::OnceLock;

const SLOTS: usize = MAX_ID as usize;

static REGISTRY: Registry = Registry::new();

/// Lazily built backends, one slot per group identifier.
pub struct Registry {
    slots: [OnceLock<Backend>; SLOTS],
}

impl Registry {
    /// Returns a registry with no backend built.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [const { OnceLock::new() }; SLOTS],
        }
    }

    /// Returns the backend of `group`, building it on first use.
    #[must_use]
    pub fn backend(&self, group: Group) -> &Backend {
        self.slots[usize::from(group.id())].get_or_init(|| {
            let backend = build(group);
            tracing::debug!(
                group = group.id(),
                ciphersuite = backend.ciphersuite(),
                "initialized group backend"
            );
            backend
        })
    }

    /// Returns whether the backend of `group` has been built.
    #[must_use]
    pub fn is_ready(&self, group: Group) -> bool {
        self.slots[usize::from(group.id())].get().is_some()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the process-wide backend of `group`, building it on first use.
#[must_use]
pub fn backend(group: Group) -> &'static Backend {
    REGISTRY.backend(group)
}

/// Returns whether the process-wide backend of `group` has been built.
#[must_use]
pub fn is_ready(group: Group) -> bool {
    REGISTRY.is_ready(group)
}

fn build(group: Group) -> Backend {
    match group {
        Group::Ristretto255Sha512 => Ristretto255Group::new().into(),
        Group::P256Sha256 => P256Group::new().into(),
        Group::P384Sha384 => P384Group::new().into(),
        Group::P521Sha512 => P521Group::new().into(),
        Group::Edwards25519Sha512 => Edwards25519Group::new().into(),
        Group::Secp256k1Sha256 => Secp256k1Group::new().into(),
    }
}
