//! `rg-std` — derived generators built only from `map`, `flat_map` and `unit`.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`primitives`]  | `integers`, `booleans`, `interval`                         |
//! | [`tuples`]      | `pairs`, `triples`                                         |
//! | [`choice`]      | `one_of`, `frequency`, `elements`                          |
//! | [`collections`] | `sequence`, `sequence_with`, `options`                     |
//!
//! # Uniformity
//!
//! Everything here inherits its distribution from [`integers`], which is as
//! uniform as the underlying [`RandomSource`](rg_core::RandomSource).  Two
//! derived generators are only approximately uniform:
//!
//! - [`booleans`] maps `x > 0`, so `false` has one extra value (zero) out of
//!   2^32.
//! - [`interval`] takes `|x| % span`, which favours low offsets slightly when
//!   `span` does not divide 2^31.  The bias is left in place.
//!
//! # Errors
//!
//! Constructors validate their arguments and fail fast with
//! [`GenError`](rg_core::GenError).  Generators built from drawn data (inside
//! a `flat_map`) report the same errors as `Err` samples instead.

pub mod choice;
pub mod collections;
pub mod primitives;
pub mod tuples;

#[cfg(test)]
mod tests;

pub use choice::{elements, frequency, one_of};
pub use collections::{options, sequence, sequence_with};
pub use primitives::{booleans, integers, interval};
pub use tuples::{pairs, triples};
