// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bricks::expect_string;
use crate::deps::DepsBundle;
use crate::errors::BrickResult;
use crate::ports::{Port, ValueKind};
use crate::traits::Nanobrick;

/// Case conversion applied by [`ChangeCaseBrick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    Upper,
    Lower,
    /// First letter of each word capitalized, the rest lowered.
    Proper,
}

/// Change Case brick - converts the string payload to a different case.
pub struct ChangeCaseBrick {
    mode: CaseMode,
}

impl ChangeCaseBrick {
    pub fn new(mode: CaseMode) -> Self {
        Self { mode }
    }

    pub fn upper() -> Self {
        Self::new(CaseMode::Upper)
    }

    pub fn lower() -> Self {
        Self::new(CaseMode::Lower)
    }

    pub fn proper() -> Self {
        Self::new(CaseMode::Proper)
    }
}

#[async_trait]
impl Nanobrick for ChangeCaseBrick {
    async fn invoke(&self, input: Value, _deps: Option<&DepsBundle>) -> BrickResult<Value> {
        let text = expect_string(self.name(), input)?;

        let converted = match self.mode {
            CaseMode::Upper => text.to_uppercase(),
            CaseMode::Lower => text.to_lowercase(),
            CaseMode::Proper => text
                .split_whitespace()
                .map(|word| {
                    let mut chars = word.chars();
                    match chars.next() {
                        None => String::new(),
                        Some(first) => {
                            first.to_uppercase().collect::<String>()
                                + &chars.as_str().to_lowercase()
                        }
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        };

        Ok(Value::String(converted))
    }

    fn name(&self) -> &str {
        match self.mode {
            CaseMode::Upper => "change_case_upper",
            CaseMode::Lower => "change_case_lower",
            CaseMode::Proper => "change_case_proper",
        }
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
    async fn converts_to_uppercase() {
        let result = ChangeCaseBrick::upper()
            .invoke(json!("Hello, world!"), None)
            .await
            .unwrap();
        assert_eq!(result, json!("HELLO, WORLD!"));
    }

    #[tokio::test]
    async fn converts_to_lowercase() {
        let result = ChangeCaseBrick::lower()
            .invoke(json!("LOUD NOISES"), None)
            .await
            .unwrap();
        assert_eq!(result, json!("loud noises"));
    }

    #[tokio::test]
    async fn proper_case_capitalizes_each_word() {
        let result = ChangeCaseBrick::proper()
            .invoke(json!("hello brave NEW world"), None)
            .await
            .unwrap();
        assert_eq!(result, json!("Hello Brave New World"));
    }
}
