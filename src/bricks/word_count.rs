// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::Value;

use crate::bricks::expect_string;
use crate::deps::DepsBundle;
use crate::errors::BrickResult;
use crate::ports::{Port, ValueKind};
use crate::traits::Nanobrick;

/// Word Count brick - counts whitespace-separated words in the string
/// payload. The only stock brick whose output kind differs from its input
/// kind, which makes it useful for exercising composition-time port checks.
pub struct WordCountBrick;

impl WordCountBrick {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WordCountBrick {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Nanobrick for WordCountBrick {
    async fn invoke(&self, input: Value, _deps: Option<&DepsBundle>) -> BrickResult<Value> {
        let text = expect_string(self.name(), input)?;
        let count = text.split_whitespace().count();
        Ok(Value::Number(count.into()))
    }

    fn name(&self) -> &str {
        "word_count"
    }

    fn input_port(&self) -> Port {
        Port::Kind(ValueKind::String)
    }

    fn output_port(&self) -> Port {
        Port::Kind(ValueKind::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn counts_whitespace_separated_words() {
        let result = WordCountBrick::new()
            .invoke(json!("the quick brown fox"), None)
            .await
            .unwrap();
        assert_eq!(result, json!(4));
    }

    #[tokio::test]
    async fn empty_string_counts_zero_words() {
        let result = WordCountBrick::new().invoke(json!(""), None).await.unwrap();
        assert_eq!(result, json!(0));
    }
}
