// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Fallback decorator.
//!
//! The one place in the framework where an error may be absorbed instead of
//! propagated — and only because the substitute value is explicit
//! configuration. Everything else in the core forwards errors unchanged.

use async_trait::async_trait;
use serde_json::Value;

use crate::deps::DepsBundle;
use crate::errors::{BrickError, BrickResult};
use crate::observability::messages::brick::FallbackSubstituted;
use crate::observability::messages::StructuredLog;
use crate::pipeline::Stage;
use crate::ports::Port;
use crate::traits::Nanobrick;

/// Decorator that substitutes a configured value when the wrapped unit
/// fails. Cancellation is not absorbed: it is not a stage failure.
pub struct FallbackSkill {
    inner: Stage,
    fallback: Value,
}

impl FallbackSkill {
    pub fn new(inner: Stage, fallback: Value) -> Self {
        Self { inner, fallback }
    }
}

#[async_trait]
impl Nanobrick for FallbackSkill {
    async fn invoke(&self, input: Value, deps: Option<&DepsBundle>) -> BrickResult<Value> {
        match self.inner.invoke(input, deps).await {
            Ok(output) => Ok(output),
            // Cancellation is a signal, not a stage failure; it must reach
            // the caller with no substitute value standing in for a result.
            Err(error @ BrickError::Cancelled { .. }) => Err(error),
            Err(error) => {
                FallbackSubstituted {
                    brick: self.inner.name(),
                    error: &error,
                }
                .log();
                Ok(self.fallback.clone())
            }
        }
    }

    fn name(&self) -> &str {
        "fallback"
    }

    fn input_port(&self) -> Port {
        self.inner.input_port()
    }

    // The substitute value's kind is not checked against the inner unit's
    // declared output, so downstream consumers see Any here.
    fn output_port(&self) -> Port {
        Port::Any
    }
}
