// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Integration tests exercising composition, execution, dependency
//! propagation, and cancellation across real bricks and skills.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::bricks::{ChangeCaseBrick, GreetingBrick, ReverseBrick, WordCountBrick};
use crate::deps::DepsBundle;
use crate::errors::{BrickError, BrickResult, CompositionError};
use crate::pipeline::{stage, Pipeline, Stage};
use crate::skills::{InputSanitizer, LoggingSkill, TimeoutSkill};
use crate::traits::{Nanobrick, NanobrickExt};

/// Counts its invocations, then forwards the input unchanged.
struct CountingBrick {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl Nanobrick for CountingBrick {
    async fn invoke(&self, input: Value, _deps: Option<&DepsBundle>) -> BrickResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(input)
    }

    fn name(&self) -> &str {
        "counting"
    }
}

/// Fails every invocation with a validation error.
struct FailingBrick;

#[async_trait]
impl Nanobrick for FailingBrick {
    async fn invoke(&self, _input: Value, _deps: Option<&DepsBundle>) -> BrickResult<Value> {
        Err(BrickError::Validation {
            brick: "failing".to_string(),
            reason: "poisoned input".to_string(),
        })
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Reads a documented required key from the deps bundle and appends it to
/// the string payload.
struct SuffixFromDepsBrick;

#[async_trait]
impl Nanobrick for SuffixFromDepsBrick {
    async fn invoke(&self, input: Value, deps: Option<&DepsBundle>) -> BrickResult<Value> {
        let bundle = deps.ok_or_else(|| BrickError::MissingDependency {
            brick: self.name().to_string(),
            key: "suffix".to_string(),
        })?;
        let suffix = bundle.require(self.name(), "suffix")?;
        let text = match input {
            Value::String(text) => text,
            other => return Ok(other),
        };
        Ok(Value::String(format!(
            "{}{}",
            text,
            suffix.as_str().unwrap_or_default()
        )))
    }

    fn name(&self) -> &str {
        "suffix_from_deps"
    }
}

/// Cancels a shared token when invoked, then forwards the input.
struct CancellingBrick {
    token: CancellationToken,
}

#[async_trait]
impl Nanobrick for CancellingBrick {
    async fn invoke(&self, input: Value, _deps: Option<&DepsBundle>) -> BrickResult<Value> {
        self.token.cancel();
        Ok(input)
    }

    fn name(&self) -> &str {
        "cancelling"
    }
}

#[tokio::test]
async fn greeting_then_uppercase_scenario() {
    let pipeline = (stage(GreetingBrick::new()) >> stage(ChangeCaseBrick::upper())).unwrap();

    let result = pipeline.invoke(json!("world"), None).await.unwrap();
    assert_eq!(result, json!("HELLO, WORLD!"));
}

#[tokio::test]
async fn composition_is_associative_in_order_and_result() {
    let a = || stage(GreetingBrick::new());
    let b = || stage(ChangeCaseBrick::upper());
    let c = || stage(ReverseBrick::new());

    let left = ((a() >> b()).unwrap() >> c()).unwrap();
    let right = (a() >> (b() >> c()).unwrap()).unwrap();

    assert_eq!(left.stage_names(), right.stage_names());
    assert_eq!(left.len(), 3);

    let input = json!("world");
    let from_left = left.invoke(input.clone(), None).await.unwrap();
    let from_right = right.invoke(input, None).await.unwrap();
    assert_eq!(from_left, from_right);
}

#[tokio::test]
async fn joining_pipelines_flattens_their_stages() {
    let front = (stage(GreetingBrick::new()) >> stage(ChangeCaseBrick::lower())).unwrap();
    let back = (stage(ReverseBrick::new()) >> stage(WordCountBrick::new())).unwrap();

    let joined = front.join(&back).unwrap();
    assert_eq!(
        joined.stage_names(),
        vec!["greeting", "change_case_lower", "reverse", "word_count"]
    );
}

#[tokio::test]
async fn one_stage_pipeline_matches_direct_invocation() {
    let direct = GreetingBrick::new().invoke(json!("world"), None).await.unwrap();
    let piped = Pipeline::single(stage(GreetingBrick::new()))
        .invoke(json!("world"), None)
        .await
        .unwrap();
    assert_eq!(direct, piped);
}

#[tokio::test]
async fn empty_pipeline_is_identity() {
    let input = json!({"untouched": [1, 2, 3]});
    let result = Pipeline::empty().invoke(input.clone(), None).await.unwrap();
    assert_eq!(result, input);
}

#[tokio::test]
async fn fail_fast_skips_later_stages_and_surfaces_the_error_unchanged() {
    let calls = Arc::new(AtomicUsize::new(0));
    let pipeline = (stage(GreetingBrick::new())
        >> stage(FailingBrick)
        >> stage(CountingBrick { calls: calls.clone() }))
    .unwrap();

    let err = pipeline.invoke(json!("world"), None).await.unwrap_err();
    match err {
        BrickError::Validation { brick, reason } => {
            assert_eq!(brick, "failing");
            assert_eq!(reason, "poisoned input");
        }
        other => panic!("expected Validation, got {:?}", other),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0, "stage after the failure ran");
}

#[tokio::test]
async fn deps_are_transparent_to_stages_that_ignore_them() {
    let pipeline = (stage(GreetingBrick::new()) >> stage(ChangeCaseBrick::upper())).unwrap();

    let without = pipeline.invoke(json!("world"), None).await.unwrap();

    let deps = DepsBundle::new()
        .with("cache", json!({"ttl": 60}))
        .with("request_id", json!("req_42"));
    let with = pipeline.invoke(json!("world"), Some(&deps)).await.unwrap();

    assert_eq!(without, with);
}

#[tokio::test]
async fn deps_reach_every_stage_unmodified() {
    let pipeline = (stage(GreetingBrick::new()) >> stage(SuffixFromDepsBrick)).unwrap();

    let deps = DepsBundle::new().with("suffix", json!(" [checked]"));
    let result = pipeline.invoke(json!("world"), Some(&deps)).await.unwrap();
    assert_eq!(result, json!("Hello, world! [checked]"));
}

#[tokio::test]
async fn missing_required_deps_key_is_a_clear_error() {
    let pipeline = Pipeline::single(stage(SuffixFromDepsBrick));

    let deps = DepsBundle::new().with("unrelated", json!(true));
    let err = pipeline.invoke(json!("x"), Some(&deps)).await.unwrap_err();
    match err {
        BrickError::MissingDependency { brick, key } => {
            assert_eq!(brick, "suffix_from_deps");
            assert_eq!(key, "suffix");
        }
        other => panic!("expected MissingDependency, got {:?}", other),
    }
}

#[test]
fn composition_rejects_declared_port_mismatch() {
    // word_count produces a number; reverse expects a string.
    let result = stage(WordCountBrick::new()) >> stage(ReverseBrick::new());
    match result {
        Err(CompositionError::TypeMismatch {
            producer, consumer, ..
        }) => {
            assert_eq!(producer, "word_count");
            assert_eq!(consumer, "reverse");
        }
        Ok(_) => panic!("mismatched ports composed"),
    }
}

#[test]
fn composition_error_short_circuits_the_operator_chain() {
    let result =
        stage(WordCountBrick::new()) >> stage(ReverseBrick::new()) >> stage(GreetingBrick::new());
    assert!(result.is_err());
}

#[tokio::test]
async fn any_port_mismatch_is_deferred_to_first_invocation() {
    // CountingBrick declares Any/Any, so composing it before reverse passes;
    // feeding a number through surfaces the mismatch at reverse's seam.
    let calls = Arc::new(AtomicUsize::new(0));
    let pipeline =
        (stage(CountingBrick { calls }) >> stage(ReverseBrick::new())).unwrap();

    let err = pipeline.invoke(json!(7), None).await.unwrap_err();
    match err {
        BrickError::TypeMismatch { brick, .. } => assert_eq!(brick, "reverse"),
        other => panic!("expected TypeMismatch, got {:?}", other),
    }
}

#[tokio::test]
async fn pipelines_nest_as_stages() {
    let inner = (stage(GreetingBrick::new()) >> stage(ChangeCaseBrick::upper()))
        .unwrap()
        .with_name("greet_loudly");
    let outer = Pipeline::single(stage(inner)).then(stage(ReverseBrick::new())).unwrap();

    let result = outer.invoke(json!("world"), None).await.unwrap();
    assert_eq!(result, json!("!DLROW ,OLLEH"));
}

#[tokio::test]
async fn pre_cancelled_token_runs_no_stage() {
    let calls = Arc::new(AtomicUsize::new(0));
    let pipeline = Pipeline::single(stage(CountingBrick { calls: calls.clone() }));

    let token = CancellationToken::new();
    token.cancel();

    let err = pipeline
        .invoke_with_cancellation(json!("x"), None, &token)
        .await
        .unwrap_err();
    match err {
        BrickError::Cancelled {
            stages_completed, ..
        } => assert_eq!(stages_completed, 0),
        other => panic!("expected Cancelled, got {:?}", other),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn cancellation_is_observed_between_stages() {
    let calls = Arc::new(AtomicUsize::new(0));
    let token = CancellationToken::new();
    let pipeline = (stage(CancellingBrick {
        token: token.clone(),
    }) >> stage(CountingBrick { calls: calls.clone() }))
    .unwrap();

    let err = pipeline
        .invoke_with_cancellation(json!("x"), None, &token)
        .await
        .unwrap_err();
    match err {
        BrickError::Cancelled {
            stages_completed, ..
        } => assert_eq!(stages_completed, 1),
        other => panic!("expected Cancelled, got {:?}", other),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0, "stage ran after cancellation");
}

#[tokio::test]
async fn stacked_wrappers_compose_like_a_single_unit() {
    let sanitized = InputSanitizer::html_escaping(stage(ChangeCaseBrick::upper()));
    let logged = LoggingSkill::wrap(stage(sanitized));
    let bounded = TimeoutSkill::new(stage(logged), Duration::from_secs(5));

    let pipeline = (stage(GreetingBrick::new()) >> stage(bounded)).unwrap();
    let result = pipeline.invoke(json!("world"), None).await.unwrap();
    assert_eq!(result, json!("HELLO, WORLD!"));
}

#[test]
fn blocking_invocation_of_a_pipeline_matches_the_async_path() {
    let pipeline = (stage(GreetingBrick::new()) >> stage(ChangeCaseBrick::upper())).unwrap();
    let result = pipeline.invoke_blocking(json!("world"), None).unwrap();
    assert_eq!(result, json!("HELLO, WORLD!"));
}

#[tokio::test]
async fn composing_twice_yields_independent_equivalent_pipelines() {
    let base = Pipeline::single(stage(GreetingBrick::new()));
    let first = base.then(stage(ChangeCaseBrick::upper())).unwrap();
    let second = base.then(stage(ChangeCaseBrick::upper())).unwrap();

    // The operand is untouched and both results behave identically.
    assert_eq!(base.len(), 1);
    assert_eq!(first.stage_names(), second.stage_names());
    assert_eq!(
        first.invoke(json!("world"), None).await.unwrap(),
        second.invoke(json!("world"), None).await.unwrap()
    );
}

#[tokio::test]
async fn one_shared_brick_can_serve_as_a_stage_in_several_pipelines() {
    let calls = Arc::new(AtomicUsize::new(0));
    let shared: Arc<dyn Nanobrick> = Arc::new(CountingBrick { calls: calls.clone() });

    let first = (stage(GreetingBrick::new()) >> Stage::from_arc(shared.clone())).unwrap();
    let second = (Stage::from_arc(shared) >> stage(ChangeCaseBrick::upper())).unwrap();

    assert_eq!(first.invoke(json!("world"), None).await.unwrap(), json!("Hello, world!"));
    assert_eq!(second.invoke(json!("hi"), None).await.unwrap(), json!("HI"));
    assert_eq!(calls.load(Ordering::SeqCst), 2, "both pipelines hit the shared brick");
}

#[tokio::test]
async fn concurrent_invocations_share_no_execution_state() {
    let pipeline = Arc::new(
        (stage(GreetingBrick::new()) >> stage(ChangeCaseBrick::upper())).unwrap(),
    );

    let mut handles = Vec::new();
    for i in 0..8 {
        let pipeline = Arc::clone(&pipeline);
        handles.push(tokio::spawn(async move {
            let input = format!("caller-{}", i);
            let expected = format!("HELLO, CALLER-{}!", i);
            let result = pipeline.invoke(json!(input), None).await.unwrap();
            assert_eq!(result, json!(expected));
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
}
