//! Framework error type.
//!
//! Constructors return these for bad arguments.  `InvalidRange` and
//! `NegativeLength` can also appear as `Err` samples when a bound or length
//! is itself drawn (see `sequence_with`, or a `flat_map` into `interval`).

use thiserror::Error;

/// Construction errors shared by all `rg-*` crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    /// A half-open range `[lo, hi)` with `lo >= hi`, or bounds that do not fit
    /// the integer domain.
    #[error("invalid range [{lo}, {hi}): lower bound must be below upper bound")]
    InvalidRange { lo: i64, hi: i64 },

    #[error("cannot choose from an empty set of generators")]
    EmptyChoice,

    #[error("weights sum to zero; at least one alternative needs a positive weight")]
    ZeroWeight,

    /// A length generator yielded a value below zero.
    #[error("drawn sequence length {0} is negative")]
    NegativeLength(i32),

    #[error("replay source needs at least one scripted value")]
    EmptyScript,
}

/// Shorthand result type for all `rg-*` crates.
pub type GenResult<T> = Result<T, GenError>;
