// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Runtime error type for nanobrick invocation.
//!
//! All stage failures are expressed as `BrickError` values. The unit contract
//! never wraps or translates them: an error raised by a stage crosses every
//! enclosing decorator and the pipeline unchanged until it reaches the
//! original caller.

use std::time::Duration;
use thiserror::Error;

use crate::ports::{Port, ValueKind};

/// Error raised by a nanobrick invocation or by the pipeline around it.
#[derive(Error, Debug)]
pub enum BrickError {
    /// A stage declined to process the input it was given.
    #[error("Validation failed in '{brick}': {reason}")]
    Validation { brick: String, reason: String },

    /// The runtime value reaching a stage did not match its declared input
    /// port. Raised by the pipeline before the stage runs, or by a stage that
    /// inspects its input itself.
    #[error("Type mismatch at '{brick}': expected {expected}, got {actual}")]
    TypeMismatch {
        brick: String,
        expected: Port,
        actual: ValueKind,
    },

    /// A stage's documented required dependency key was absent from the
    /// bundle (or the bundle itself was absent).
    #[error("Stage '{brick}' requires dependency key '{key}', which was not provided")]
    MissingDependency { brick: String, key: String },

    /// A timeout decorator expired before the inner unit completed.
    #[error("Stage '{brick}' timed out after {limit:?}")]
    Timeout { brick: String, limit: Duration },

    /// Cooperative cancellation was observed between stages. Distinct from
    /// stage failure: no stage produced an error, and no partial result
    /// exists.
    #[error("Pipeline '{pipeline}' cancelled after {stages_completed} completed stage(s)")]
    Cancelled {
        pipeline: String,
        stages_completed: usize,
    },

    /// I/O error, e.g. while building the dedicated runtime for the blocking
    /// invocation path.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for stage-internal failures with no dedicated variant.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for nanobrick invocation.
pub type BrickResult<T> = Result<T, BrickError>;
