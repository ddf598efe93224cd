//! `rg-sample` — pulls samples out of generators for property checks.
//!
//! # Sampling loop
//!
//! ```text
//! source = SeededSource::new(config.seed)
//! for index in 0..config.samples:
//!   ① Draw   — sample = generator.generate(&mut source)
//!   ② Notify — observer.on_sample(index)
//!   ③ Check  — stop at the first sample the property rejects
//! ```
//!
//! Samples are produced one at a time, on demand; nothing is buffered.  Runs
//! are reproducible: the same seed and generator always yield the same
//! samples in the same order.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | Enables `Sampler::par_collect` on Rayon's thread pool.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rg_core::SamplerConfig;
//! use rg_sample::{CheckOutcome, Sampler};
//! use rg_std::interval;
//!
//! let sampler = Sampler::new(SamplerConfig::new(42, 1_000))?;
//! let outcome = sampler.check(&interval(0, 10)?, |v| *v < 10);
//! assert!(outcome.is_passed());
//! ```

pub mod error;
pub mod observer;
pub mod sampler;
pub mod samples;


pub use error::{SampleError, SampleResult};
pub use observer::{NoopObserver, SampleObserver};
pub use sampler::{CheckOutcome, Sampler};
pub use samples::Samples;
