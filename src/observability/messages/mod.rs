// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] for emission through `tracing` with structured fields
//! attached. Components log through these types, never ad-hoc strings.

use tracing::Span;

pub mod brick;
pub mod pipeline;

/// Emission contract for structured log messages.
///
/// Implementations pick the log level appropriate to the event and attach
/// their fields as structured `tracing` fields in addition to the rendered
/// `Display` text.
pub trait StructuredLog {
    /// Emit this message at its appropriate level.
    fn log(&self);

    /// Create a tracing span carrying this message's fields.
    fn span(&self, name: &str) -> Span;
}
