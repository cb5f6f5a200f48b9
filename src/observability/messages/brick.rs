// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for individual stage execution events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// A stage invocation began.
pub struct StageExecutionStarted<'a> {
    pub brick: &'a str,
}

impl Display for StageExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Invoking stage '{}'", self.brick)
    }
}

impl StructuredLog for StageExecutionStarted<'_> {
    fn log(&self) {
        tracing::trace!(brick = self.brick, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!("stage_execution", span_name = name, brick = self.brick)
    }
}

/// A stage invocation returned successfully.
pub struct StageExecutionCompleted<'a> {
    pub brick: &'a str,
    pub duration: Duration,
}

impl Display for StageExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Stage '{}' completed in {:?}", self.brick, self.duration)
    }
}

impl StructuredLog for StageExecutionCompleted<'_> {
    fn log(&self) {
        tracing::trace!(
            brick = self.brick,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!("stage_execution", span_name = name, brick = self.brick)
    }
}

/// A stage invocation failed.
pub struct StageExecutionFailed<'a> {
    pub brick: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for StageExecutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Stage '{}' failed: {}", self.brick, self.error)
    }
}

impl StructuredLog for StageExecutionFailed<'_> {
    fn log(&self) {
        tracing::error!(brick = self.brick, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("stage_execution", span_name = name, brick = self.brick)
    }
}

/// A fallback decorator swallowed an inner failure and substituted its
/// configured value.
pub struct FallbackSubstituted<'a> {
    pub brick: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for FallbackSubstituted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stage '{}' failed ({}); substituting configured fallback value",
            self.brick, self.error
        )
    }
}

impl StructuredLog for FallbackSubstituted<'_> {
    fn log(&self) {
        tracing::warn!(brick = self.brick, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("fallback_substitution", span_name = name, brick = self.brick)
    }
}
