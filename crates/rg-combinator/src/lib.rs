//! `rg-combinator` — the generator protocol and its composition operators.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`generator`]   | `Generator` trait, `BoxedGenerator`, `SharedGenerator`       |
//! | [`combinators`] | `Map`, `FlatMap`, `Zip` — returned by the trait's methods    |
//! | [`unit`]        | `Unit` / [`unit`] (constant) and `FromFn` / [`from_fn`]      |
//!
//! # Design notes
//!
//! A generator is a recipe, not a container: it holds no precomputed values
//! and no random state.  Each call to [`Generator::generate`] borrows a
//! [`RandomSource`](rg_core::RandomSource) mutably and the recipe immutably,
//! so drawing any number of samples never changes the recipe.
//!
//! Combinators are lazy.  `map` and `flat_map` only store their arguments;
//! the source generator and the closure run on `generate`, once per draw.
//!
//! The monad laws hold by construction and are exercised in `tests.rs`:
//!
//! ```text
//! unit(x).flat_map(f)           ≡ f(x)
//! g.flat_map(unit)              ≡ g
//! g.flat_map(f).flat_map(h)     ≡ g.flat_map(|y| f(y).flat_map(h))
//! g.map(f)                      ≡ g.flat_map(|y| unit(f(y)))
//! ```

pub mod combinators;
pub mod generator;
pub mod unit;


pub use combinators::{FlatMap, Map, Zip};
pub use generator::{BoxedGenerator, Generator, SharedGenerator};
pub use unit::{FromFn, Unit, from_fn, unit};
