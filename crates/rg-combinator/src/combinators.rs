//! Concrete combinator types returned by [`Generator`]'s provided methods.
//!
//! Each one captures its source generator(s) by value.  To reuse a source in
//! several pipelines, pass a reference (`&g`) or an `Arc`; both are
//! generators themselves.

use rg_core::RandomSource;

use crate::Generator;

// ── Map ───────────────────────────────────────────────────────────────────────

/// Generator returned by [`Generator::map`].
#[derive(Clone)]
pub struct Map<G, F> {
    source: G,
    f:      F,
}

impl<G, F> Map<G, F> {
    pub(crate) fn new(source: G, f: F) -> Self {
        Self { source, f }
    }
}

impl<G, F, S> Generator for Map<G, F>
where
    G: Generator,
    F: Fn(G::Output) -> S,
{
    type Output = S;

    #[inline]
    fn generate(&self, src: &mut dyn RandomSource) -> S {
        (self.f)(self.source.generate(src))
    }
}

// ── FlatMap ───────────────────────────────────────────────────────────────────

/// Generator returned by [`Generator::flat_map`].
#[derive(Clone)]
pub struct FlatMap<G, F> {
    source: G,
    f:      F,
}

impl<G, F> FlatMap<G, F> {
    pub(crate) fn new(source: G, f: F) -> Self {
        Self { source, f }
    }
}

impl<G, F, H> Generator for FlatMap<G, F>
where
    G: Generator,
    F: Fn(G::Output) -> H,
    H: Generator,
{
    type Output = H::Output;

    #[inline]
    fn generate(&self, src: &mut dyn RandomSource) -> H::Output {
        let inner = (self.f)(self.source.generate(src));
        inner.generate(src)
    }
}

// ── Zip ───────────────────────────────────────────────────────────────────────

/// Generator returned by [`Generator::zip`].
#[derive(Clone)]
pub struct Zip<A, B> {
    first:  A,
    second: B,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Generator for Zip<A, B>
where
    A: Generator,
    B: Generator,
{
    type Output = (A::Output, B::Output);

    #[inline]
    fn generate(&self, src: &mut dyn RandomSource) -> Self::Output {
        // Order matters for reproducibility: first, then second.
        let a = self.first.generate(src);
        let b = self.second.generate(src);
        (a, b)
    }
}
