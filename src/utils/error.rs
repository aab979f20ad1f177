// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Error type for this library
//!
//! Two classes of faults exist. Data faults (malformed encodings, off-curve
//! points, bad JSON) are recoverable and returned as [`Error`]. Programming
//! faults (an unavailable group, a zero-length DST, mixing values of two
//! different groups) abort the current call with a panic carrying one of the
//! messages below; they are never downgraded to an [`Error`].

use thiserror::Error;

/// Panic message for a group identifier that is not available.
pub const ERR_INVALID_GROUP: &str = "invalid group identifier";

/// Panic message for an empty domain separation tag.
pub const ERR_ZERO_LENGTH_DST: &str = "zero-length DST";

/// Panic message for an element operand from another group.
pub const ERR_CAST_ELEMENT: &str = "could not cast to same group element : wrong group ?";

/// Panic message for a scalar operand from another group.
pub const ERR_CAST_SCALAR: &str = "could not cast to same group scalar : wrong group ?";

/**
 * Error type for the ecgroup library.
 *
 * This error type represents all the recoverable faults that can occur when
 * ingesting encoded scalars, elements or group identifiers.
 */
#[derive(Error, Debug)]
pub enum Error {
    /// The group identifier is out of range or designates an unimplemented group
    #[error("invalid group identifier")]
    InvalidGroup,

    /// A textual group identifier could not be parsed as an integer
    #[error("failed to read Group: {0}")]
    GroupParse(#[from] std::num::ParseIntError),

    /// A JSON blob did not contain exactly one of the expected key/value pairs
    #[error("invalid JSON encoding")]
    InvalidJsonEncoding,

    /// Hexadecimal decoding failed
    #[error("invalid hex encoding: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Decoding was attempted on a zero-length input
    #[error("nil or empty encoding")]
    EmptyEncoding,

    /// The input does not have the fixed encoding length of the group
    #[error("invalid encoding length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// The encoding length of the group
        expected: usize,
        /// The length of the input
        actual: usize,
    },

    /// The scalar encoding is not canonical, i.e. not reduced modulo the group order
    #[error("invalid scalar encoding")]
    InvalidScalarEncoding,

    /// The bytes do not decode to a point on the curve
    #[error("invalid {0} point encoding")]
    InvalidPointEncoding(&'static str),

    /// The bytes decode to the identity element, which is never accepted on decode
    #[error("invalid {0} encoding: infinity/identity point")]
    IdentityElement(&'static str),

    /// The point is on the curve but outside its prime-order subgroup
    #[error("invalid {0} encoding: point not in the prime-order subgroup")]
    NotInSubgroup(&'static str),

    /// The input is not a canonical field element encoding
    #[error("invalid field element encoding")]
    InvalidFieldElement,

    /// `expand_message_xmd` rejected its parameters
    #[error("message expansion failed: {0}")]
    ExpandMessage(String),

    /// A data fault annotated with the operation that produced it
    #[error("{context}: {source}")]
    Context {
        /// The facade operation, e.g. `element Decode`
        context: &'static str,
        /// The underlying fault
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wraps this error with the name of the operation that raised it.
    #[must_use]
    pub fn context(self, context: &'static str) -> Self {
        Error::Context {
            context,
            source: Box::new(self),
        }
    }

    /// Returns the innermost fault, skipping any operation context.
    #[must_use]
    pub fn root(&self) -> &Error {
        match self {
            Error::Context { source, .. } => source.root(),
            other => other,
        }
    }
}
