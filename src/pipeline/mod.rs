// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod compose;
pub mod pipeline;
pub mod stage;

#[cfg(test)]
mod integration_tests;

pub use pipeline::Pipeline;
pub use stage::{stage, Stage};
