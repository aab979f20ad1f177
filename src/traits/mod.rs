// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Abstractions for curve backends, their scalars and their elements.

pub mod groups;
