// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The unit contract every processing stage implements.
//!
//! A nanobrick is a named, versioned, async processing unit. The only
//! required operation is [`Nanobrick::invoke`]; everything else — identity,
//! declared ports, the blocking convenience — has defaults. Implementations
//! must be safe to invoke concurrently from independent call sites: `invoke`
//! takes `&self` and any mutable state is the implementer's to synchronize.

use async_trait::async_trait;
use serde_json::Value;

use crate::deps::DepsBundle;
use crate::errors::BrickResult;
use crate::ports::Port;

/// A single processing stage: consumes a payload value, produces a payload
/// value, optionally reading from the caller-supplied dependency bundle.
///
/// A unit that delegates to an inner unit (a pipeline, a decorator) must
/// forward `deps` unchanged; the bundle is a pass-through side-channel, never
/// part of the data flow.
#[async_trait]
pub trait Nanobrick: Send + Sync {
    /// Process one input value. This is the suspension point of the
    /// framework: the only place an invocation may yield.
    ///
    /// Failure is signalled through the returned `BrickError` and propagates
    /// to the caller unchanged; no component in the core catches it.
    async fn invoke(&self, input: Value, deps: Option<&DepsBundle>) -> BrickResult<Value>;

    /// String identity of this unit.
    fn name(&self) -> &str;

    /// Semver version of this unit.
    fn version(&self) -> &str {
        "1.0.0"
    }

    /// Declared kind of value this unit consumes.
    fn input_port(&self) -> Port {
        Port::Any
    }

    /// Declared kind of value this unit produces.
    fn output_port(&self) -> Port {
        Port::Any
    }
}

/// Blocking convenience over the async contract.
///
/// Blanket-implemented for every nanobrick (including trait objects), so any
/// unit can be driven from synchronous code without the caller standing up a
/// runtime of their own.
pub trait NanobrickExt: Nanobrick {
    /// Run [`Nanobrick::invoke`] to completion on a dedicated current-thread
    /// runtime and return its result. Produces the identical result to the
    /// async path for the same input and deps.
    ///
    /// Must only be called from synchronous code. Calling it from inside an
    /// async context panics (tokio refuses nested `block_on`); this misuse is
    /// fatal and not auto-detected here.
    fn invoke_blocking(&self, input: Value, deps: Option<&DepsBundle>) -> BrickResult<Value> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.invoke(input, deps))
    }
}

impl<B: Nanobrick + ?Sized> NanobrickExt for B {}
