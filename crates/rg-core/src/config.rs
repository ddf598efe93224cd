//! Sampling run configuration.

// ── SamplerConfig ─────────────────────────────────────────────────────────────

/// Top-level configuration for a sampling run.
///
/// Typically loaded from a TOML/JSON file (with the `serde` feature) or built
/// in code by the application crate and passed to the sampler.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplerConfig {
    /// Master seed.  The same seed always produces identical samples.
    pub seed: u64,

    /// Number of samples drawn per run.  Must be at least 1.
    pub samples: usize,

    /// Worker count for parallel sampling.  `None` uses Rayon's pool size,
    /// which tracks the host's core count, so parallel output then varies
    /// between machines.  Set it for runs that must reproduce anywhere.
    pub threads: Option<usize>,
}

impl SamplerConfig {
    pub fn new(seed: u64, samples: usize) -> Self {
        Self { seed, samples, threads: None }
    }

    /// Builder-style override of the worker count.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Human-readable description of the first invalid field, if any.
    pub fn validate(&self) -> Result<(), String> {
        if self.samples == 0 {
            return Err("samples must be at least 1".into());
        }
        if self.threads == Some(0) {
            return Err("threads must be at least 1 when set".into());
        }
        Ok(())
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::new(0, 100)
    }
}
