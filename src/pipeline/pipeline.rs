// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ordered, immutable sequence of stages with sequential fail-fast execution.
//!
//! A pipeline is constructed once by the composition operator and invoked any
//! number of times. Each invocation threads one data value stage to stage and
//! passes the caller's dependency bundle, unmodified, to every stage.
//! Independent invocations of the same pipeline share no execution state, so
//! they may interleave or run fully in parallel.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::deps::DepsBundle;
use crate::errors::{BrickError, BrickResult, CompositionError};
use crate::observability::messages::brick::{StageExecutionCompleted, StageExecutionStarted};
use crate::observability::messages::pipeline::{
    PipelineInvocationCancelled, PipelineInvocationCompleted, PipelineInvocationFailed,
    PipelineInvocationStarted,
};
use crate::observability::messages::StructuredLog;
use crate::pipeline::stage::Stage;
use crate::ports::{Port, ValueKind};
use crate::traits::Nanobrick;

const DEFAULT_PIPELINE_NAME: &str = "pipeline";

/// An ordered sequence of stages satisfying the nanobrick contract itself,
/// so pipelines nest as stages of larger pipelines.
///
/// The stage list is fixed at construction. [`Pipeline::then`] and
/// [`Pipeline::join`] are pure: they leave their operands untouched and
/// return a new, flattened pipeline. Flattening is deliberate — joining two
/// pipelines concatenates their stage lists rather than nesting one pipeline
/// inside the other, keeping invocation overhead proportional to the stage
/// count alone.
#[derive(Debug, Clone)]
pub struct Pipeline {
    name: String,
    version: String,
    stages: Vec<Stage>,
}

impl Pipeline {
    /// A pipeline with no stages. Invoking it returns the input unchanged.
    pub fn empty() -> Self {
        Self {
            name: DEFAULT_PIPELINE_NAME.to_string(),
            version: "1.0.0".to_string(),
            stages: Vec::new(),
        }
    }

    /// A one-stage pipeline. Behaves identically to invoking the stage
    /// directly.
    pub fn single(stage: Stage) -> Self {
        Self {
            stages: vec![stage],
            ..Self::empty()
        }
    }

    /// Return an otherwise-identical pipeline carrying the given name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append one stage, checking the declared ports at the seam.
    ///
    /// Pure: `self` is not mutated; the returned pipeline shares the existing
    /// stage handles. When the last stage's declared output kind cannot feed
    /// the new stage's declared input kind the composition is rejected here;
    /// if either side declares `Port::Any` the check is deferred to the first
    /// invocation.
    pub fn then(&self, stage: Stage) -> Result<Pipeline, CompositionError> {
        if let Some(last) = self.stages.last() {
            check_seam(last, &stage)?;
        }
        let mut stages = self.stages.clone();
        stages.push(stage);
        Ok(Pipeline {
            name: self.name.clone(),
            version: self.version.clone(),
            stages,
        })
    }

    /// Concatenate another pipeline's stages onto this one, checking the
    /// seam between the two. The result is flat: no pipeline-of-pipeline
    /// wrapper is created.
    pub fn join(&self, other: &Pipeline) -> Result<Pipeline, CompositionError> {
        if let (Some(last), Some(first)) = (self.stages.last(), other.stages.first()) {
            check_seam(last, first)?;
        }
        let mut stages = self.stages.clone();
        stages.extend(other.stages.iter().cloned());
        Ok(Pipeline {
            name: self.name.clone(),
            version: self.version.clone(),
            stages,
        })
    }

    /// The stages, in execution order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether this is the zero-stage (identity) pipeline.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage names in execution order. Useful for diagnostics and for
    /// asserting flattened composition order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Invoke the pipeline, observing the given cancellation token between
    /// stages.
    ///
    /// Cancellation is cooperative and never interrupts a stage mid-flight:
    /// the token is checked before each stage, and once cancellation is
    /// observed no further stage runs. The invocation surfaces
    /// [`BrickError::Cancelled`] — a distinct condition, not a stage failure,
    /// and never a partial result.
    pub async fn invoke_with_cancellation(
        &self,
        input: Value,
        deps: Option<&DepsBundle>,
        cancel: &CancellationToken,
    ) -> BrickResult<Value> {
        let span = PipelineInvocationStarted {
            pipeline: &self.name,
            stage_count: self.stages.len(),
        }
        .span("invoke_with_cancellation");
        self.execute(input, deps, Some(cancel)).instrument(span).await
    }

    /// Sequential single-pass execution: stage i's output becomes stage
    /// i+1's input, the deps bundle is passed unmodified to every stage, and
    /// the first stage error stops everything.
    async fn execute(
        &self,
        input: Value,
        deps: Option<&DepsBundle>,
        cancel: Option<&CancellationToken>,
    ) -> BrickResult<Value> {
        let start_msg = PipelineInvocationStarted {
            pipeline: &self.name,
            stage_count: self.stages.len(),
        };
        start_msg.log();
        let started = Instant::now();

        let mut value = input;
        for (index, stage) in self.stages.iter().enumerate() {
            if let Some(token) = cancel {
                if token.is_cancelled() {
                    PipelineInvocationCancelled {
                        pipeline: &self.name,
                        stages_completed: index,
                    }
                    .log();
                    return Err(BrickError::Cancelled {
                        pipeline: self.name.clone(),
                        stages_completed: index,
                    });
                }
            }

            // Deferred type check for seams the composition operator could
            // not verify (a declared Port::Any on either side).
            let expected = stage.input_port();
            if !expected.admits(&value) {
                let error = BrickError::TypeMismatch {
                    brick: stage.name().to_string(),
                    expected,
                    actual: ValueKind::of(&value),
                };
                PipelineInvocationFailed {
                    pipeline: &self.name,
                    failed_stage: stage.name(),
                    stage_index: index,
                    error: &error,
                }
                .log();
                return Err(error);
            }

            StageExecutionStarted { brick: stage.name() }.log();
            let stage_started = Instant::now();

            match stage.invoke(value, deps).await {
                Ok(output) => {
                    StageExecutionCompleted {
                        brick: stage.name(),
                        duration: stage_started.elapsed(),
                    }
                    .log();
                    value = output;
                }
                Err(error) => {
                    PipelineInvocationFailed {
                        pipeline: &self.name,
                        failed_stage: stage.name(),
                        stage_index: index,
                        error: &error,
                    }
                    .log();
                    return Err(error);
                }
            }
        }

        PipelineInvocationCompleted {
            pipeline: &self.name,
            stage_count: self.stages.len(),
            duration: started.elapsed(),
        }
        .log();
        Ok(value)
    }
}

/// Composition-time port check between two adjacent stages.
fn check_seam(producer: &Stage, consumer: &Stage) -> Result<(), CompositionError> {
    let produced = producer.output_port();
    let expected = consumer.input_port();
    if !produced.accepts_port(&expected) {
        return Err(CompositionError::TypeMismatch {
            producer: producer.name().to_string(),
            produced,
            consumer: consumer.name().to_string(),
            expected,
        });
    }
    Ok(())
}

#[async_trait]
impl Nanobrick for Pipeline {
    async fn invoke(&self, input: Value, deps: Option<&DepsBundle>) -> BrickResult<Value> {
        let span = PipelineInvocationStarted {
            pipeline: &self.name,
            stage_count: self.stages.len(),
        }
        .span("invoke");
        self.execute(input, deps, None).instrument(span).await
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn input_port(&self) -> Port {
        self.stages.first().map_or(Port::Any, |s| s.input_port())
    }

    fn output_port(&self) -> Port {
        self.stages.last().map_or(Port::Any, |s| s.output_port())
    }
}
