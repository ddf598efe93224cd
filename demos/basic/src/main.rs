//! basic — smallest end-to-end example for the rust_gen framework.
//!
//! Builds a generator of shopping baskets out of the standard library,
//! prints a handful of samples, then checks two properties: one that holds
//! and one that a sample eventually falsifies.
//!
//! Usage: `basic [SEED]`.  Set `RUST_LOG=debug` to see sampler events.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use rg_combinator::{Generator, unit};
use rg_core::SamplerConfig;
use rg_sample::{CheckOutcome, Sampler};
use rg_std::{elements, frequency, interval, options, pairs, sequence};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_SEED: u64   = 42;
const SAMPLES:      usize = 1_000;
const SHOWN:        usize = 5;
const MAX_ITEMS:    usize = 6;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse().with_context(|| format!("invalid seed {arg:?}"))?,
        None => DEFAULT_SEED,
    };

    // ── Pipeline ──────────────────────────────────────────────────────────
    let fruit = elements(vec!["apple", "banana", "cherry", "durian"])?;
    let quantity = interval(1, 13)?;
    let discount = frequency(vec![
        (8, unit(0).shared()),
        (2, interval(5, 30)?.shared()),
    ])?;
    let item = pairs(pairs(fruit, quantity), options(discount))
        .map(|((name, qty), discount)| (name, qty, discount.unwrap_or(0)));
    let basket = sequence(item, 0, MAX_ITEMS)?;

    let sampler = Sampler::new(SamplerConfig::new(seed, SAMPLES))?;

    println!("=== basic — rust_gen sampler ===");
    println!("Seed: {seed}  |  Samples per check: {SAMPLES}");
    println!();

    for (i, b) in sampler.samples(&basket).take(SHOWN).enumerate() {
        println!("basket {i}: {b:?}");
    }
    println!();

    let small = sampler.check(&basket, |b| b.len() < MAX_ITEMS);
    report("fewer than MAX_ITEMS lines", &small);

    let cheap = sampler.check(&basket, |b| b.iter().map(|(_, qty, _)| qty).sum::<i32>() < 30);
    report("total quantity under 30", &cheap);

    Ok(())
}

fn report<T: std::fmt::Debug>(name: &str, outcome: &CheckOutcome<T>) {
    match outcome {
        CheckOutcome::Passed { samples } => println!("✓ {name}: passed {samples} samples"),
        CheckOutcome::Falsified { sample, index } => {
            println!("✗ {name}: falsified at sample {index}: {sample:?}")
        }
    }
}
