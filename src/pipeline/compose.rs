// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The `>>` composition operator over stages and pipelines.
//!
//! `stage(a) >> stage(b) >> stage(c)` builds a flat three-stage pipeline,
//! checking declared ports at every seam. Each `>>` yields a
//! `Result<Pipeline, CompositionError>`, and the operator is also
//! implemented for that `Result` so chains short-circuit: once a seam is
//! rejected, the error flows through the remaining `>>`s unchanged.
//!
//! The operator is pure sugar over [`Pipeline::then`] and
//! [`Pipeline::join`]: operands are never mutated, and composing the same
//! operands twice yields two independent, behaviorally identical pipelines.

use std::ops::Shr;

use crate::errors::CompositionError;
use crate::pipeline::pipeline::Pipeline;
use crate::pipeline::stage::Stage;

type Composed = Result<Pipeline, CompositionError>;

impl Shr<Stage> for Stage {
    type Output = Composed;

    fn shr(self, rhs: Stage) -> Composed {
        Pipeline::single(self).then(rhs)
    }
}

impl Shr<Pipeline> for Stage {
    type Output = Composed;

    fn shr(self, rhs: Pipeline) -> Composed {
        Pipeline::single(self).join(&rhs)
    }
}

impl Shr<Stage> for Pipeline {
    type Output = Composed;

    fn shr(self, rhs: Stage) -> Composed {
        self.then(rhs)
    }
}

impl Shr<Pipeline> for Pipeline {
    type Output = Composed;

    fn shr(self, rhs: Pipeline) -> Composed {
        self.join(&rhs)
    }
}

impl Shr<Stage> for Composed {
    type Output = Composed;

    fn shr(self, rhs: Stage) -> Composed {
        self.and_then(|pipeline| pipeline.then(rhs))
    }
}

impl Shr<Pipeline> for Composed {
    type Output = Composed;

    fn shr(self, rhs: Pipeline) -> Composed {
        self.and_then(|pipeline| pipeline.join(&rhs))
    }
}

impl Shr<Composed> for Stage {
    type Output = Composed;

    fn shr(self, rhs: Composed) -> Composed {
        rhs.and_then(|pipeline| Pipeline::single(self).join(&pipeline))
    }
}
