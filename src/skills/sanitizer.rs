// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Input sanitization decorator.
//!
//! Wraps an inner unit and rewrites string leaves of the input value before
//! delegating. Composite inputs (objects, arrays) are walked recursively;
//! non-string leaves pass through untouched. The dependency bundle is
//! forwarded unmodified.
//!
//! Transforms apply in a fixed order: HTML escaping, then truncation to
//! `max_length` characters, then the custom sanitizer. Escaping is a single
//! pass and deliberately not idempotent — running escaped output through the
//! sanitizer again re-escapes the `&` it produced.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::deps::DepsBundle;
use crate::errors::BrickResult;
use crate::pipeline::Stage;
use crate::ports::Port;
use crate::traits::Nanobrick;

/// Arbitrary caller-supplied transform applied to string leaves last.
pub type CustomSanitizer = Arc<dyn Fn(String) -> String + Send + Sync>;

/// Configuration for the input sanitizer decorator.
#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Escape markup-significant characters in string leaves.
    pub html_escape: bool,
    /// Truncate string leaves to this many characters before forwarding.
    pub max_length: Option<usize>,
    /// Custom transform applied to string leaves after the built-in steps.
    /// Not representable in serialized config; set programmatically.
    #[serde(skip)]
    pub custom_sanitizer: Option<CustomSanitizer>,
}

impl fmt::Debug for SanitizerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SanitizerConfig")
            .field("html_escape", &self.html_escape)
            .field("max_length", &self.max_length)
            .field("custom_sanitizer", &self.custom_sanitizer.is_some())
            .finish()
    }
}

/// Decorator that sanitizes string content of the input before delegating
/// to the wrapped unit.
pub struct InputSanitizer {
    inner: Stage,
    config: SanitizerConfig,
}

impl InputSanitizer {
    pub fn new(inner: Stage, config: SanitizerConfig) -> Self {
        Self { inner, config }
    }

    /// Sanitizer that only escapes HTML-significant characters.
    pub fn html_escaping(inner: Stage) -> Self {
        Self::new(
            inner,
            SanitizerConfig {
                html_escape: true,
                ..SanitizerConfig::default()
            },
        )
    }

    /// Sanitizer that only truncates string leaves to `max_length` characters.
    pub fn truncating(inner: Stage, max_length: usize) -> Self {
        Self::new(
            inner,
            SanitizerConfig {
                max_length: Some(max_length),
                ..SanitizerConfig::default()
            },
        )
    }

    /// Walk a value, rewriting string leaves and recursing into composites.
    fn sanitize_value(&self, value: Value) -> Value {
        match value {
            Value::String(text) => Value::String(self.sanitize_text(text)),
            Value::Array(items) => {
                Value::Array(items.into_iter().map(|v| self.sanitize_value(v)).collect())
            }
            Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, self.sanitize_value(v)))
                    .collect(),
            ),
            other => other,
        }
    }

    fn sanitize_text(&self, text: String) -> String {
        let mut text = text;
        if self.config.html_escape {
            text = escape_html(&text);
        }
        if let Some(max_length) = self.config.max_length {
            text = text.chars().take(max_length).collect();
        }
        if let Some(custom) = &self.config.custom_sanitizer {
            text = custom(text);
        }
        text
    }
}

/// Escape markup-significant characters. `&` is rewritten first so already
/// escaped entities are re-escaped rather than preserved.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[async_trait]
impl Nanobrick for InputSanitizer {
    async fn invoke(&self, input: Value, deps: Option<&DepsBundle>) -> BrickResult<Value> {
        let sanitized = self.sanitize_value(input);
        self.inner.invoke(sanitized, deps).await
    }

    fn name(&self) -> &str {
        "input_sanitizer"
    }

    fn input_port(&self) -> Port {
        self.inner.input_port()
    }

    fn output_port(&self) -> Port {
        self.inner.output_port()
    }
}
