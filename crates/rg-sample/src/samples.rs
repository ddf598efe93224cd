//! Lazy sample stream over one generator.

use rg_combinator::Generator;
use rg_core::SeededSource;

/// Iterator returned by [`Sampler::samples`][crate::Sampler::samples] and
/// [`Sampler::stream`][crate::Sampler::stream].
///
/// Owns its random source and borrows the generator; each `next()` draws
/// exactly one sample.
pub struct Samples<'g, G> {
    generator: &'g G,
    source:    SeededSource,
    /// `None` for an unbounded stream.
    remaining: Option<usize>,
}

impl<'g, G: Generator> Samples<'g, G> {
    pub(crate) fn new(generator: &'g G, source: SeededSource, remaining: Option<usize>) -> Self {
        Self { generator, source, remaining }
    }
}

impl<G: Generator> Iterator for Samples<'_, G> {
    type Item = G::Output;

    fn next(&mut self) -> Option<G::Output> {
        if let Some(left) = self.remaining.as_mut() {
            if *left == 0 {
                return None;
            }
            *left -= 1;
        }
        Some(self.generator.generate(&mut self.source))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}
