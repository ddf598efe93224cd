//! Choosing among alternative generators.
//!
//! The choice is re-made on every draw: one draw selects the alternative,
//! then the selected generator is drawn from once.

use std::sync::Arc;

use rg_combinator::{Generator, SharedGenerator, unit};
use rg_core::{GenError, GenResult};
use tracing::debug;

use crate::interval;

/// Uniform choice among `gens`.
///
/// Fails with [`GenError::EmptyChoice`] when `gens` is empty.
pub fn one_of<T: 'static>(
    gens: Vec<SharedGenerator<T>>,
) -> GenResult<impl Generator<Output = T> + Clone> {
    if gens.is_empty() {
        debug!("rejected one_of with no alternatives");
        return Err(GenError::EmptyChoice);
    }
    let count = index_bound(gens.len())?;
    let gens: Arc<[SharedGenerator<T>]> = gens.into();

    Ok(interval(0, count)?.flat_map(move |i| Arc::clone(&gens[i as usize])))
}

/// Weighted choice: each alternative is picked with probability
/// `weight / sum(weights)`.  Zero-weight alternatives are never picked.
///
/// Fails with [`GenError::EmptyChoice`] on an empty list and with
/// [`GenError::ZeroWeight`] when every weight is zero.
pub fn frequency<T: 'static>(
    weighted: Vec<(u32, SharedGenerator<T>)>,
) -> GenResult<impl Generator<Output = T> + Clone> {
    if weighted.is_empty() {
        debug!("rejected frequency with no alternatives");
        return Err(GenError::EmptyChoice);
    }

    // Cumulative exclusive upper bound per alternative.
    let mut total: u64 = 0;
    let mut table = Vec::with_capacity(weighted.len());
    for (weight, g) in weighted {
        total += u64::from(weight);
        table.push((total, g));
    }
    if total == 0 {
        debug!("rejected frequency whose weights sum to zero");
        return Err(GenError::ZeroWeight);
    }
    let total = i32::try_from(total).map_err(|_| GenError::InvalidRange {
        lo: 0,
        hi: i64::try_from(total).unwrap_or(i64::MAX),
    })?;
    let table: Arc<[(u64, SharedGenerator<T>)]> = table.into();

    Ok(interval(0, total)?.flat_map(move |ticket| {
        let ticket = ticket as u64;
        let idx = table.partition_point(|(upper, _)| *upper <= ticket);
        Arc::clone(&table[idx].1)
    }))
}

/// Uniform choice among plain values.
pub fn elements<T>(values: Vec<T>) -> GenResult<impl Generator<Output = T> + Clone>
where
    T: Clone + Send + Sync + 'static,
{
    one_of(values.into_iter().map(|v| unit(v).shared()).collect())
}

/// Number of alternatives as an exclusive `interval` bound.
fn index_bound(len: usize) -> GenResult<i32> {
    i32::try_from(len).map_err(|_| GenError::InvalidRange {
        lo: 0,
        hi: i64::try_from(len).unwrap_or(i64::MAX),
    })
}
