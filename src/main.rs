// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use serde_json::json;
use std::env;

use nanobricks::bricks::{ChangeCaseBrick, GreetingBrick, WordCountBrick};
use nanobricks::pipeline::{stage, Pipeline};
use nanobricks::skills::InputSanitizer;
use nanobricks::traits::Nanobrick;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input_text>", args[0]);
        eprintln!("Example: {} \"world\"", args[0]);
        std::process::exit(1);
    }
    let input_text = &args[1];

    println!("nanobricks pipeline demo");
    println!("========================");
    println!("Input: \"{}\"", input_text);
    println!();

    // Plain composition: greet, then shout.
    let greet_loudly = (stage(GreetingBrick::new()) >> stage(ChangeCaseBrick::upper()))
        .context("composing greeting pipeline")?
        .with_name("greet_loudly");
    let greeted = greet_loudly.invoke(json!(input_text), None).await?;
    println!("{:<24} {}", "greet_loudly:", greeted);

    // The same pipeline nested as a stage behind an input sanitizer.
    let sanitized = Pipeline::single(stage(InputSanitizer::html_escaping(stage(greet_loudly))))
        .with_name("sanitized_greeting");
    let escaped = sanitized.invoke(json!(input_text), None).await?;
    println!("{:<24} {}", "sanitized_greeting:", escaped);

    // A cross-kind pipeline: greeting produces a string, word_count a number.
    let counted = (stage(GreetingBrick::new()) >> stage(WordCountBrick::new()))
        .context("composing word count pipeline")?
        .with_name("greeting_word_count")
        .invoke(json!(input_text), None)
        .await?;
    println!("{:<24} {}", "greeting_word_count:", counted);

    Ok(())
}
