// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Logging decorator.
//!
//! Wraps an inner unit and emits structured log messages around its
//! invocation. Transparent to the data flow: input, output, and the
//! dependency bundle pass through unmodified, and inner errors propagate
//! unchanged after being logged.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

use crate::deps::DepsBundle;
use crate::errors::BrickResult;
use crate::observability::messages::brick::{
    StageExecutionCompleted, StageExecutionFailed, StageExecutionStarted,
};
use crate::observability::messages::StructuredLog;
use crate::pipeline::Stage;
use crate::ports::Port;
use crate::traits::Nanobrick;

/// Configuration for the logging decorator.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also log the input and output payloads (at debug level). Off by
    /// default; payloads may be large or sensitive.
    pub log_payloads: bool,
}

/// Decorator that logs invocation start, completion, and failure of the
/// wrapped unit.
pub struct LoggingSkill {
    inner: Stage,
    config: LoggingConfig,
}

impl LoggingSkill {
    pub fn new(inner: Stage, config: LoggingConfig) -> Self {
        Self { inner, config }
    }

    /// Logging skill with default configuration (no payload logging).
    pub fn wrap(inner: Stage) -> Self {
        Self::new(inner, LoggingConfig::default())
    }
}

#[async_trait]
impl Nanobrick for LoggingSkill {
    async fn invoke(&self, input: Value, deps: Option<&DepsBundle>) -> BrickResult<Value> {
        StageExecutionStarted {
            brick: self.inner.name(),
        }
        .log();
        if self.config.log_payloads {
            tracing::debug!(brick = self.inner.name(), input = %input, "input payload");
        }

        let started = Instant::now();
        match self.inner.invoke(input, deps).await {
            Ok(output) => {
                StageExecutionCompleted {
                    brick: self.inner.name(),
                    duration: started.elapsed(),
                }
                .log();
                if self.config.log_payloads {
                    tracing::debug!(brick = self.inner.name(), output = %output, "output payload");
                }
                Ok(output)
            }
            Err(error) => {
                StageExecutionFailed {
                    brick: self.inner.name(),
                    error: &error,
                }
                .log();
                Err(error)
            }
        }
    }

    fn name(&self) -> &str {
        "logging"
    }

    fn input_port(&self) -> Port {
        self.inner.input_port()
    }

    fn output_port(&self) -> Port {
        self.inner.output_port()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BrickError;
    use serde_json::json;

    struct ShoutBrick;

    #[async_trait]
    impl Nanobrick for ShoutBrick {
        async fn invoke(&self, input: Value, _deps: Option<&DepsBundle>) -> BrickResult<Value> {
            match input {
                Value::String(text) => Ok(Value::String(text.to_uppercase())),
                _ => Err(BrickError::Validation {
                    brick: "shout".to_string(),
                    reason: "expected a string".to_string(),
                }),
            }
        }

        fn name(&self) -> &str {
            "shout"
        }
    }

    #[tokio::test]
    async fn passes_output_through_unchanged() {
        let logged = LoggingSkill::wrap(Stage::new(ShoutBrick));
        let result = logged.invoke(json!("quiet"), None).await.unwrap();
        assert_eq!(result, json!("QUIET"));
    }

    #[tokio::test]
    async fn propagates_inner_error_unchanged() {
        let logged = LoggingSkill::wrap(Stage::new(ShoutBrick));
        let err = logged.invoke(json!(1), None).await.unwrap_err();
        match err {
            BrickError::Validation { brick, .. } => assert_eq!(brick, "shout"),
            other => panic!("expected Validation, got {:?}", other),
        }
    }
}
