// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Caller-supplied dependency bundle threaded through pipeline invocations.
//!
//! The bundle is an opaque side-channel: the pipeline passes it by reference
//! to every stage, no stage owns it, and no stage may assume it is present.
//! A stage with a documented required key uses [`DepsBundle::require`], which
//! produces a clear [`BrickError::MissingDependency`](crate::errors::BrickError)
//! instead of a silent default when the key is absent.

use serde_json::Value;
use std::collections::HashMap;

use crate::errors::BrickError;

/// Key/value context shared by reference across all stages of one invocation.
#[derive(Debug, Clone, Default)]
pub struct DepsBundle {
    entries: HashMap<String, Value>,
}

impl DepsBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. Returns `self` for call chaining when
    /// assembling a bundle at a call site.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    /// Insert or replace an entry in place.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Look up an entry, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Whether an entry exists for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries in the bundle.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bundle has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry a stage cannot run without.
    ///
    /// `brick` names the requiring stage so the error identifies who needed
    /// the key, not just which key was missing.
    pub fn require(&self, brick: &str, key: &str) -> Result<&Value, BrickError> {
        self.entries.get(key).ok_or_else(|| BrickError::MissingDependency {
            brick: brick.to_string(),
            key: key.to_string(),
        })
    }
}

impl From<HashMap<String, Value>> for DepsBundle {
    fn from(entries: HashMap<String, Value>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn require_reports_the_requiring_brick_and_key() {
        let deps = DepsBundle::new().with("cache", json!({"ttl": 30}));

        assert!(deps.require("lookup", "cache").is_ok());

        let err = deps.require("lookup", "database").unwrap_err();
        match err {
            BrickError::MissingDependency { brick, key } => {
                assert_eq!(brick, "lookup");
                assert_eq!(key, "database");
            }
            other => panic!("expected MissingDependency, got {:?}", other),
        }
    }

    #[test]
    fn builder_style_assembly() {
        let deps = DepsBundle::new()
            .with("config", json!({"verbose": true}))
            .with("request_id", json!("req_123"));

        assert_eq!(deps.len(), 2);
        assert_eq!(deps.get("request_id"), Some(&json!("req_123")));
        assert!(!deps.contains_key("cache"));
    }
}
