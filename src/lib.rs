// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod bricks;     // ready-made processing units
pub mod deps;       // dependency bundle side-channel
pub mod errors;     // error handling
pub mod observability;
pub mod pipeline;   // composition + execution
pub mod ports;      // value-kind compatibility checking
pub mod skills;     // cross-cutting decorators
pub mod traits;     // unified abstractions
