//! The sampling driver.

use rg_combinator::Generator;
use rg_core::{GenResult, SamplerConfig, SeededSource};
use tracing::{debug, trace};

use crate::{NoopObserver, SampleError, SampleObserver, SampleResult, Samples};

/// Result of [`Sampler::check`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckOutcome<T> {
    /// Every one of `samples` draws satisfied the property.
    Passed { samples: usize },

    /// The draw at `index` (0-based) violated the property.
    Falsified { sample: T, index: usize },
}

impl<T> CheckOutcome<T> {
    pub fn is_passed(&self) -> bool {
        matches!(self, CheckOutcome::Passed { .. })
    }

    /// The falsifying sample, if any.
    pub fn counterexample(&self) -> Option<&T> {
        match self {
            CheckOutcome::Passed { .. } => None,
            CheckOutcome::Falsified { sample, .. } => Some(sample),
        }
    }
}

/// Draws samples from generators according to a [`SamplerConfig`].
///
/// Every method starts from a fresh `SeededSource::new(config.seed)`, so
/// calling the same method twice with the same generator repeats the same
/// samples.
#[derive(Clone, Debug)]
pub struct Sampler {
    config: SamplerConfig,
}

impl Sampler {
    /// Validate `config` and return a ready-to-use sampler.
    pub fn new(config: SamplerConfig) -> SampleResult<Self> {
        config.validate().map_err(SampleError::Config)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    fn source(&self) -> SeededSource {
        SeededSource::new(self.config.seed)
    }

    /// Exactly `config.samples` lazily drawn samples.
    pub fn samples<'g, G: Generator>(&self, g: &'g G) -> Samples<'g, G> {
        Samples::new(g, self.source(), Some(self.config.samples))
    }

    /// An unbounded stream of samples from the configured seed.
    pub fn stream<'g, G: Generator>(&self, g: &'g G) -> Samples<'g, G> {
        Samples::new(g, self.source(), None)
    }

    /// Draw `config.samples` samples into a `Vec`.
    pub fn collect<G: Generator>(&self, g: &G) -> Vec<G::Output> {
        self.samples(g).collect()
    }

    /// Like [`collect`][Self::collect] for generators whose samples may fail,
    /// such as a `flat_map` into `interval` with drawn bounds.  Stops at the
    /// first failed sample.
    pub fn try_collect<T, G>(&self, g: &G) -> SampleResult<Vec<T>>
    where
        G: Generator<Output = GenResult<T>>,
    {
        self.samples(g)
            .enumerate()
            .map(|(index, sample)| sample.map_err(|source| SampleError::Gen { index, source }))
            .collect()
    }

    /// Check `prop` against up to `config.samples` samples, stopping at the
    /// first one it rejects.  No shrinking is attempted.
    pub fn check<G, P>(&self, g: &G, prop: P) -> CheckOutcome<G::Output>
    where
        G: Generator,
        P: Fn(&G::Output) -> bool,
    {
        self.check_with(g, prop, &mut NoopObserver)
    }

    /// [`check`][Self::check] with observer callbacks.
    pub fn check_with<G, P, O>(&self, g: &G, prop: P, observer: &mut O) -> CheckOutcome<G::Output>
    where
        G: Generator,
        P: Fn(&G::Output) -> bool,
        O: SampleObserver,
    {
        debug!(seed = self.config.seed, samples = self.config.samples, "check started");
        observer.on_run_start(&self.config);

        for (index, sample) in self.samples(g).enumerate() {
            observer.on_sample(index);
            if !prop(&sample) {
                trace!(index, "property falsified");
                debug!(seed = self.config.seed, drawn = index + 1, "check falsified");
                observer.on_run_end(index + 1, false);
                return CheckOutcome::Falsified { sample, index };
            }
        }

        debug!(seed = self.config.seed, drawn = self.config.samples, "check passed");
        observer.on_run_end(self.config.samples, true);
        CheckOutcome::Passed { samples: self.config.samples }
    }

    /// Draw `config.samples` samples across `config.threads` Rayon workers.
    ///
    /// Worker `w` owns `SeededSource::for_thread(seed, w)` and draws a
    /// contiguous share of the samples; results are concatenated in worker
    /// order.  Output is reproducible for a fixed `(seed, worker count)` pair
    /// but differs from [`collect`][Self::collect].  With `threads: None` the
    /// worker count is `rayon::current_num_threads()`, so only an explicit
    /// `threads` makes the output identical across hosts.
    #[cfg(feature = "parallel")]
    pub fn par_collect<G>(&self, g: &G) -> Vec<G::Output>
    where
        G: Generator + Sync,
        G::Output: Send,
    {
        use rayon::prelude::*;

        let workers = self.config.threads.unwrap_or_else(rayon::current_num_threads).max(1);
        let total = self.config.samples;
        let seed = self.config.seed;
        debug!(seed, samples = total, workers, "parallel sampling started");

        let chunks: Vec<Vec<G::Output>> = (0..workers)
            .into_par_iter()
            .map(|worker| {
                let share = total / workers + usize::from(worker < total % workers);
                let mut source = SeededSource::for_thread(seed, worker);
                (0..share).map(|_| g.generate(&mut source)).collect()
            })
            .collect();

        chunks.into_iter().flatten().collect()
    }
}
