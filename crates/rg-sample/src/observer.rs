//! Sampling observer trait for progress reporting.

use rg_core::SamplerConfig;

/// Callbacks invoked by [`Sampler::check_with`][crate::Sampler::check_with].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress { every: usize }
///
/// impl SampleObserver for Progress {
///     fn on_sample(&mut self, index: usize) {
///         if index % self.every == 0 {
///             println!("drew sample {index}");
///         }
///     }
/// }
/// ```
pub trait SampleObserver {
    /// Called once before the first draw.
    fn on_run_start(&mut self, _config: &SamplerConfig) {}

    /// Called after each sample is drawn and before it is checked.
    fn on_sample(&mut self, _index: usize) {}

    /// Called once when the run stops.  `drawn` counts every sample taken,
    /// including a falsifying one.
    fn on_run_end(&mut self, _drawn: usize, _passed: bool) {}
}

/// A [`SampleObserver`] that does nothing.
pub struct NoopObserver;

impl SampleObserver for NoopObserver {}
