// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ready-made nanobricks for text processing demos and tests.

mod change_case;
mod greeting;
mod reverse;
mod word_count;

pub use change_case::{CaseMode, ChangeCaseBrick};
pub use greeting::GreetingBrick;
pub use reverse::ReverseBrick;
pub use word_count::WordCountBrick;

use serde_json::Value;

use crate::errors::{BrickError, BrickResult};
use crate::ports::{Port, ValueKind};

/// Unwrap a string payload, producing the typed mismatch error a caller of
/// `invoke` outside a pipeline would otherwise miss (the pipeline performs
/// this check itself before each stage).
pub(crate) fn expect_string(brick: &str, input: Value) -> BrickResult<String> {
    match input {
        Value::String(text) => Ok(text),
        other => Err(BrickError::TypeMismatch {
            brick: brick.to_string(),
            expected: Port::Kind(ValueKind::String),
            actual: ValueKind::of(&other),
        }),
    }
}
