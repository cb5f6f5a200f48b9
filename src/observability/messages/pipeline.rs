// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline invocation lifecycle events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// A pipeline invocation began.
pub struct PipelineInvocationStarted<'a> {
    pub pipeline: &'a str,
    pub stage_count: usize,
}

impl Display for PipelineInvocationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting pipeline '{}' with {} stage(s)",
            self.pipeline, self.stage_count
        )
    }
}

impl StructuredLog for PipelineInvocationStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            pipeline = self.pipeline,
            stage_count = self.stage_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "pipeline_invocation",
            span_name = name,
            pipeline = self.pipeline,
            stage_count = self.stage_count,
        )
    }
}

/// A pipeline invocation ran every stage to completion.
pub struct PipelineInvocationCompleted<'a> {
    pub pipeline: &'a str,
    pub stage_count: usize,
    pub duration: Duration,
}

impl Display for PipelineInvocationCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline '{}' completed {} stage(s) in {:?}",
            self.pipeline, self.stage_count, self.duration
        )
    }
}

impl StructuredLog for PipelineInvocationCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            pipeline = self.pipeline,
            stage_count = self.stage_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "pipeline_invocation",
            span_name = name,
            pipeline = self.pipeline,
            stage_count = self.stage_count,
        )
    }
}

/// A stage failed and the pipeline stopped short.
pub struct PipelineInvocationFailed<'a> {
    pub pipeline: &'a str,
    pub failed_stage: &'a str,
    pub stage_index: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for PipelineInvocationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline '{}' failed at stage {} ('{}'): {}",
            self.pipeline, self.stage_index, self.failed_stage, self.error
        )
    }
}

impl StructuredLog for PipelineInvocationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            pipeline = self.pipeline,
            failed_stage = self.failed_stage,
            stage_index = self.stage_index,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "pipeline_invocation",
            span_name = name,
            pipeline = self.pipeline,
            failed_stage = self.failed_stage,
        )
    }
}

/// Cooperative cancellation was observed between stages.
pub struct PipelineInvocationCancelled<'a> {
    pub pipeline: &'a str,
    pub stages_completed: usize,
}

impl Display for PipelineInvocationCancelled<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline '{}' cancelled after {} completed stage(s)",
            self.pipeline, self.stages_completed
        )
    }
}

impl StructuredLog for PipelineInvocationCancelled<'_> {
    fn log(&self) {
        tracing::warn!(
            pipeline = self.pipeline,
            stages_completed = self.stages_completed,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "pipeline_invocation",
            span_name = name,
            pipeline = self.pipeline,
            stages_completed = self.stages_completed,
        )
    }
}
