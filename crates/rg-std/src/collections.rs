//! Variable-length and optional values.

use std::sync::Arc;

use rg_combinator::{Generator, SharedGenerator, from_fn, unit};
use rg_core::{GenError, GenResult};
use tracing::debug;

use crate::{booleans, interval};

/// Vectors whose length is drawn from `[min_len, max_len)`, each element an
/// independent draw from `elem`, in draw order.
///
/// When `min_len == max_len` every vector has exactly `min_len` elements, so
/// `sequence(g, 0, 0)` always yields an empty vector.  Fails with
/// [`GenError::InvalidRange`] when `min_len > max_len`, or when a
/// non-degenerate range has a bound above `i32::MAX`.
pub fn sequence<G>(
    elem:    G,
    min_len: usize,
    max_len: usize,
) -> GenResult<impl Generator<Output = Vec<G::Output>>>
where
    G: Generator,
{
    let invalid = || GenError::InvalidRange {
        lo: i64::try_from(min_len).unwrap_or(i64::MAX),
        hi: i64::try_from(max_len).unwrap_or(i64::MAX),
    };
    if min_len > max_len {
        debug!(min_len, max_len, "rejected inverted length range");
        return Err(invalid());
    }

    let lengths: SharedGenerator<usize> = if min_len == max_len {
        unit(min_len).shared()
    } else {
        let lo = i32::try_from(min_len).map_err(|_| invalid())?;
        let hi = i32::try_from(max_len).map_err(|_| invalid())?;
        // interval(lo, hi) with lo >= 0 never yields a negative length.
        interval(lo, hi)?.map(|n| n as usize).shared()
    };
    Ok(repeat_draws(Arc::new(elem), lengths))
}

/// Vectors whose length is drawn from `lengths`, typically an [`interval`].
///
/// Draws the length first, then that many elements.  A negative drawn length
/// yields an `Err(GenError::NegativeLength)` sample.
///
/// ```rust,ignore
/// let words = sequence_with(letters, interval(1, 8)?);
/// ```
pub fn sequence_with<G, L>(
    elem:    G,
    lengths: L,
) -> impl Generator<Output = GenResult<Vec<G::Output>>>
where
    G: Generator,
    L: Generator<Output = i32>,
{
    let elem = Arc::new(elem);
    lengths.flat_map(move |n| match usize::try_from(n) {
        Ok(len) => Ok(draws(Arc::clone(&elem), len)),
        Err(_) => {
            debug!(length = n, "rejected negative sequence length");
            Err(GenError::NegativeLength(n))
        }
    })
}

/// One length draw, then that many element draws.
fn repeat_draws<G, L>(elem: Arc<G>, lengths: L) -> impl Generator<Output = Vec<G::Output>>
where
    G: Generator,
    L: Generator<Output = usize>,
{
    lengths.flat_map(move |n| draws(Arc::clone(&elem), n))
}

/// Exactly `n` independent draws from `elem`, in draw order.
fn draws<G: Generator>(elem: Arc<G>, n: usize) -> impl Generator<Output = Vec<G::Output>> {
    from_fn(move |src| {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(elem.generate(src));
        }
        out
    })
}

/// `Some` of a draw from `g` roughly half the time, `None` otherwise.
///
/// Always draws from `g`, so entropy use per sample is fixed.
pub fn options<G>(g: G) -> impl Generator<Output = Option<G::Output>>
where
    G: Generator,
{
    booleans().zip(g).map(|(present, value)| present.then_some(value))
}
