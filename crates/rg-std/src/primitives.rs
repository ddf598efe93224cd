//! Scalar generators over the raw integer stream.

use rg_combinator::{Generator, from_fn};
use rg_core::{GenError, GenResult};
use tracing::debug;

/// The base generator: one full-range `i32` per draw, straight from the source.
pub fn integers() -> impl Generator<Output = i32> + Clone {
    from_fn(|src| src.next_int())
}

/// `true` for positive draws, `false` otherwise.  Approximately 50/50.
pub fn booleans() -> impl Generator<Output = bool> + Clone {
    integers().map(|x| x > 0)
}

/// Integers in the half-open range `[lo, hi)`.
///
/// Fails with [`GenError::InvalidRange`] unless `lo < hi`.
///
/// Each draw maps `x` to `lo + |x| % (hi - lo)`.  `i32::MIN` has no positive
/// counterpart, so it is treated as `0`.  The span is computed in `i64`, so
/// the full `[i32::MIN, i32::MAX)` range is accepted; ranges wider than 2^31
/// only ever yield their lowest 2^31 values.
pub fn interval(lo: i32, hi: i32) -> GenResult<impl Generator<Output = i32> + Clone> {
    if lo >= hi {
        debug!(lo, hi, "rejected empty interval");
        return Err(GenError::InvalidRange { lo: lo.into(), hi: hi.into() });
    }
    let base = i64::from(lo);
    let span = i64::from(hi) - base;

    Ok(integers().map(move |x| {
        let magnitude = i64::from(x.checked_abs().unwrap_or(0));
        // base <= result < hi, so the narrowing cast is lossless.
        (base + magnitude % span) as i32
    }))
}
