// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Value-kind ports used for stage compatibility checking.
//!
//! Every nanobrick declares an input port and an output port describing the
//! JSON value kind it consumes and produces. The composition operator compares
//! declared ports when two stages are joined; the pipeline re-checks the
//! actual value against each stage's input port at invocation time, so a stage
//! declaring `Port::Any` still surfaces a typed error on the first mismatched
//! invocation rather than corrupting data silently.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Runtime classification of a JSON payload value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classify a payload value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        write!(f, "{}", s)
    }
}

/// Declared port of a nanobrick: either a specific value kind or anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Port {
    /// The stage accepts or produces any value kind. Compatibility checks
    /// involving `Any` are deferred to invocation time.
    Any,
    /// The stage accepts or produces exactly this value kind.
    Kind(ValueKind),
}

impl Port {
    /// Whether a value produced through `self` is acceptable to a stage
    /// whose input port is `consumer`. Used at composition time.
    pub fn accepts_port(&self, consumer: &Port) -> bool {
        match (self, consumer) {
            (Port::Any, _) | (_, Port::Any) => true,
            (Port::Kind(produced), Port::Kind(expected)) => produced == expected,
        }
    }

    /// Whether an actual runtime value is admissible through this port.
    /// Used by the pipeline before each stage invocation.
    pub fn admits(&self, value: &Value) -> bool {
        match self {
            Port::Any => true,
            Port::Kind(kind) => ValueKind::of(value) == *kind,
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Port::Any => write!(f, "any"),
            Port::Kind(kind) => write!(f, "{}", kind),
        }
    }
}
