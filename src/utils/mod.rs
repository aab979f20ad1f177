// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Utilities: error handling and rng

/// Error handling.
pub mod error;

/// Random number generation.
pub mod rng;

pub use error::Error;
