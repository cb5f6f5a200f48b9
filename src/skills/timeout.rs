// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Timeout decorator.
//!
//! Bounds the wrapped unit's invocation with a wall-clock limit. On expiry
//! the inner future is dropped and the invocation surfaces
//! [`BrickError::Timeout`](crate::errors::BrickError).

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::deps::DepsBundle;
use crate::errors::{BrickError, BrickResult};
use crate::pipeline::Stage;
use crate::ports::Port;
use crate::traits::Nanobrick;

/// Decorator that fails the wrapped unit's invocation once `limit` elapses.
pub struct TimeoutSkill {
    inner: Stage,
    limit: Duration,
}

impl TimeoutSkill {
    pub fn new(inner: Stage, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl Nanobrick for TimeoutSkill {
    async fn invoke(&self, input: Value, deps: Option<&DepsBundle>) -> BrickResult<Value> {
        match tokio::time::timeout(self.limit, self.inner.invoke(input, deps)).await {
            Ok(result) => result,
            Err(_elapsed) => Err(BrickError::Timeout {
                brick: self.inner.name().to_string(),
                limit: self.limit,
            }),
        }
    }

    fn name(&self) -> &str {
        "timeout"
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
    use serde_json::json;

    struct SlowBrick {
        delay: Duration,
    }

    #[async_trait]
    impl Nanobrick for SlowBrick {
        async fn invoke(&self, input: Value, _deps: Option<&DepsBundle>) -> BrickResult<Value> {
            tokio::time::sleep(self.delay).await;
            Ok(input)
        }

        fn name(&self) -> &str {
            "slow"
        }
    }

    #[tokio::test]
    async fn completes_within_the_limit() {
        let skill = TimeoutSkill::new(
            Stage::new(SlowBrick {
                delay: Duration::from_millis(5),
            }),
            Duration::from_secs(5),
        );
        let result = skill.invoke(json!("payload"), None).await.unwrap();
        assert_eq!(result, json!("payload"));
    }

    #[tokio::test]
    async fn surfaces_timeout_when_the_limit_expires() {
        let limit = Duration::from_millis(10);
        let skill = TimeoutSkill::new(
            Stage::new(SlowBrick {
                delay: Duration::from_secs(60),
            }),
            limit,
        );

        let err = skill.invoke(json!("payload"), None).await.unwrap_err();
        match err {
            BrickError::Timeout { brick, limit: l } => {
                assert_eq!(brick, "slow");
                assert_eq!(l, limit);
            }
            other => panic!("expected Timeout, got {:?}", other),
        }
    }
}
