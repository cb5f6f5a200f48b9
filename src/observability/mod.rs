// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging in the framework. Message types follow a struct-based
//! pattern with a `Display` implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Enable future internationalization without code changes
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::pipeline` - pipeline invocation lifecycle events
//! * `messages::brick` - individual stage execution events
//!
//! # Usage
//!
//! ```rust
//! use nanobricks::observability::messages::{StructuredLog, brick::StageExecutionStarted};
//!
//! let msg = StageExecutionStarted { brick: "greeting" };
//! msg.log();
//! ```

pub mod messages;
