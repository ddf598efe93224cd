//! Raw entropy providers for generators.
//!
//! # Determinism strategy
//!
//! A [`SeededSource`] owns an independent `SmallRng` seeded from a `u64`.
//! The same seed always yields the same `next_int` sequence on the same
//! platform, which is what makes a failing sample reproducible.
//!
//! A source has one owner at a time; it may move between threads but is never
//! drawn from by two at once.  When sampling in parallel,
//! give each worker its own source via [`SeededSource::for_thread`]:
//!
//!   seed = global_seed XOR (thread_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive thread indices uniformly across the seed space.
//! Determinism is then keyed by `(seed, thread)` rather than by global call
//! order, and no lock is needed anywhere.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{GenError, GenResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// A stateful provider of raw pseudo-random integers.
///
/// This is the only mutable state in the framework: generators borrow a
/// source for the duration of one draw and advance it, but never own one.
///
/// Implementations provide no internal synchronisation.  If several threads
/// must draw from one source, serialise the calls externally.
pub trait RandomSource {
    /// A uniformly distributed integer over the full `i32` range.
    fn next_int(&mut self) -> i32;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    #[inline]
    fn next_int(&mut self) -> i32 {
        (**self).next_int()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    #[inline]
    fn next_int(&mut self) -> i32 {
        (**self).next_int()
    }
}

// ── SeededSource ──────────────────────────────────────────────────────────────

/// Deterministic `SmallRng`-backed source.
///
/// Drawing needs `&mut self`, so a source has one owner at a time.  Give each
/// sampling thread its own (see [`for_thread`][Self::for_thread]) rather than
/// wrapping one in a lock; a shared source has no stable per-thread sequence.
#[derive(Clone, Debug)]
pub struct SeededSource(SmallRng);

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        SeededSource(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Runs are not reproducible.
    pub fn from_entropy() -> Self {
        SeededSource(SmallRng::from_entropy())
    }

    /// Per-thread source derived from a run's global seed and a worker index.
    pub fn for_thread(global_seed: u64, thread_index: usize) -> Self {
        let seed = global_seed ^ (thread_index as u64).wrapping_mul(MIXING_CONSTANT);
        SeededSource(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child source with a different seed offset.  Advances `self`
    /// by one draw, so successive children differ even for equal offsets.
    pub fn child(&mut self, offset: u64) -> SeededSource {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SeededSource(SmallRng::seed_from_u64(child_seed))
    }
}

impl RandomSource for SeededSource {
    #[inline]
    fn next_int(&mut self) -> i32 {
        self.0.r#gen()
    }
}

// ── ReplaySource ──────────────────────────────────────────────────────────────

/// Replays a fixed script of integers, wrapping around at the end.
///
/// Handy for forcing edge-case draws (`i32::MIN`, zero, negatives) and for
/// examples whose output must be exact.
#[derive(Clone, Debug)]
pub struct ReplaySource {
    script: Vec<i32>,
    pos:    usize,
}

impl ReplaySource {
    pub fn new(script: Vec<i32>) -> GenResult<Self> {
        if script.is_empty() {
            return Err(GenError::EmptyScript);
        }
        Ok(Self { script, pos: 0 })
    }

    /// Total number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ReplaySource {
    fn next_int(&mut self) -> i32 {
        let value = self.script[self.pos % self.script.len()];
        self.pos += 1;
        value
    }
}
