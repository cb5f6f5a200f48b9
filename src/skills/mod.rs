// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Cross-cutting decorators ("skills") over the nanobrick contract.
//!
//! Each skill exclusively owns one inner [`Stage`](crate::pipeline::Stage),
//! implements [`Nanobrick`](crate::traits::Nanobrick) itself, and forwards
//! the dependency bundle untouched, so the composition operator and the
//! pipeline treat a stack of wrappers exactly like a single unit.

mod fallback;
mod logging;
mod sanitizer;
mod timeout;

pub use fallback::FallbackSkill;
pub use logging::{LoggingConfig, LoggingSkill};
pub use sanitizer::{CustomSanitizer, InputSanitizer, SanitizerConfig};
pub use timeout::TimeoutSkill;
