// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Shared handle to a nanobrick used as a pipeline stage.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::traits::Nanobrick;

/// Cheap, cloneable handle wrapping a nanobrick for use in pipelines.
///
/// A `Stage` is just an `Arc<dyn Nanobrick>`: cloning it shares the unit,
/// and composing it into several pipelines never copies or mutates the unit
/// itself. Dereferences to the underlying nanobrick, so `stage.invoke(...)`
/// and `stage.name()` work directly.
#[derive(Clone)]
pub struct Stage(Arc<dyn Nanobrick>);

impl Stage {
    /// Wrap an owned nanobrick.
    pub fn new<B: Nanobrick + 'static>(brick: B) -> Self {
        Self(Arc::new(brick))
    }

    /// Wrap an already-shared nanobrick, so one instance can serve as a
    /// stage in several pipelines.
    pub fn from_arc(brick: Arc<dyn Nanobrick>) -> Self {
        Self(brick)
    }
}

impl Deref for Stage {
    type Target = dyn Nanobrick;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl fmt::Debug for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage")
            .field("name", &self.0.name())
            .field("version", &self.0.version())
            .finish()
    }
}

/// Convenience constructor: `stage(GreetingBrick)` reads better in
/// composition chains than `Stage::new(GreetingBrick)`.
pub fn stage<B: Nanobrick + 'static>(brick: B) -> Stage {
    Stage::new(brick)
}
