//! `rg-core` — foundational types for the `rust_gen` generator framework.
//!
//! This crate is a dependency of every other `rg-*` crate.  It intentionally
//! has no `rg-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`source`]      | `RandomSource` trait, `SeededSource`, `ReplaySource`  |
//! | [`config`]      | `SamplerConfig`                                       |
//! | [`error`]       | `GenError`, `GenResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `SamplerConfig`.         |

pub mod config;
pub mod error;
pub mod source;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SamplerConfig;
pub use error::{GenError, GenResult};
pub use source::{RandomSource, ReplaySource, SeededSource};
