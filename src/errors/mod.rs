// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod brick;
mod composition;

pub use brick::{BrickError, BrickResult};
pub use composition::CompositionError;
