// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::Value;

use crate::bricks::expect_string;
use crate::deps::DepsBundle;
use crate::errors::BrickResult;
use crate::ports::{Port, ValueKind};
use crate::traits::Nanobrick;

/// Greeting brick - wraps the input in a salutation: `"world"` becomes
/// `"Hello, world!"`.
pub struct GreetingBrick;

impl GreetingBrick {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GreetingBrick {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Nanobrick for GreetingBrick {
    async fn invoke(&self, input: Value, _deps: Option<&DepsBundle>) -> BrickResult<Value> {
        let name = expect_string(self.name(), input)?;
        Ok(Value::String(format!("Hello, {}!", name)))
    }

    fn name(&self) -> &str {
        "greeting"
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
    async fn greets_the_input() {
        let result = GreetingBrick::new().invoke(json!("world"), None).await.unwrap();
        assert_eq!(result, json!("Hello, world!"));
    }

    #[tokio::test]
    async fn rejects_non_string_input() {
        let err = GreetingBrick::new().invoke(json!(42), None).await.unwrap_err();
        assert!(matches!(
            err,
            crate::errors::BrickError::TypeMismatch { .. }
        ));
    }
}
