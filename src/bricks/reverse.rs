// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::Value;

use crate::bricks::expect_string;
use crate::deps::DepsBundle;
use crate::errors::BrickResult;
use crate::ports::{Port, ValueKind};
use crate::traits::Nanobrick;

/// Reverse brick - reverses the string payload.
pub struct ReverseBrick;

impl ReverseBrick {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReverseBrick {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Nanobrick for ReverseBrick {
    async fn invoke(&self, input: Value, _deps: Option<&DepsBundle>) -> BrickResult<Value> {
        let text = expect_string(self.name(), input)?;
        let reversed: String = text.chars().rev().collect();
        Ok(Value::String(reversed))
    }

    fn name(&self) -> &str {
        "reverse"
    }

    fn input_port(&self) -> Port {
        Port::Kind(ValueKind::String)
    }

    fn output_port(&self) -> Port {
        Port::Kind(ValueKind::String)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn reverses_the_payload() {
        let result = ReverseBrick::new().invoke(json!("hello"), None).await.unwrap();
        assert_eq!(result, json!("olleh"));
    }
}
