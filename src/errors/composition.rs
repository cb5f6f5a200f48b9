// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while composing stages into a pipeline.

use thiserror::Error;

use crate::ports::Port;

/// Error raised by the composition operator when two stages are joined.
///
/// Composition is the earliest point a mismatch can be detected: if both
/// stages declare concrete ports the check happens here, before any data
/// flows. When either side declares `Port::Any`, detection is deferred to
/// the first invocation and surfaces as
/// [`BrickError::TypeMismatch`](crate::errors::BrickError) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// The producer's declared output kind cannot feed the consumer's
    /// declared input kind.
    #[error(
        "Cannot compose '{producer}' into '{consumer}': \
         '{producer}' produces {produced}, '{consumer}' expects {expected}"
    )]
    TypeMismatch {
        producer: String,
        produced: Port,
        consumer: String,
        expected: Port,
    },
}
