//! The `Generator` trait — the single extension point of the framework.

use std::sync::Arc;

use rg_core::{GenError, GenResult, RandomSource};

use crate::{FlatMap, Map, Zip};

/// Type-erased, owned generator.  Use when a pipeline's concrete type is
/// unnameable or when generators of different shapes share a container.
pub type BoxedGenerator<T> = Box<dyn Generator<Output = T> + Send + Sync>;

/// Type-erased generator that several consumers can hold at once.
pub type SharedGenerator<T> = Arc<dyn Generator<Output = T> + Send + Sync>;

/// A recipe for producing values of type [`Output`][Self::Output].
///
/// Implement [`generate`][Self::generate]; every other method is a provided
/// combinator.  Derived generators are built only through these combinators
/// and never inspect the concrete type of the generators they wrap.
///
/// # Randomness
///
/// The random source is injected on each call instead of being owned by the
/// generator.  This keeps generators `Send + Sync` whenever their closures
/// are, and lets each sampling thread bring its own source.
///
/// # Example
///
/// ```rust,ignore
/// let dice = from_fn(|src| src.next_int())
///     .map(|x| 1 + x.rem_euclid(6));
/// let two_dice = (&dice).zip(&dice).map(|(a, b)| a + b);
/// let total = two_dice.generate(&mut SeededSource::new(42));
/// ```
pub trait Generator {
    type Output;

    /// Draw one sample, consuming entropy from `src` as needed.
    fn generate(&self, src: &mut dyn RandomSource) -> Self::Output;

    /// Transform every sample with `f`.
    ///
    /// Draws from `self` exactly once per sample.  `f` is not called until a
    /// sample is drawn.
    fn map<S, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> S,
    {
        Map::new(self, f)
    }

    /// Feed every sample into `f` and draw once from the generator it returns.
    ///
    /// `f` runs on every draw, so the inner generator may differ from one
    /// sample to the next.
    fn flat_map<G, F>(self, f: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        G: Generator,
        F: Fn(Self::Output) -> G,
    {
        FlatMap::new(self, f)
    }

    /// Pair each sample of `self` with an independent sample of `other`.
    ///
    /// Behaves like `self.flat_map(|a| other.map(|b| (a, b)))`: one draw from
    /// `self`, then one from `other`.
    fn zip<G>(self, other: G) -> Zip<Self, G>
    where
        Self: Sized,
        G: Generator,
    {
        Zip::new(self, other)
    }

    /// Erase the concrete type behind a `Box`.
    fn boxed(self) -> BoxedGenerator<Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }

    /// Erase the concrete type behind an `Arc` for shared use.
    fn shared(self) -> SharedGenerator<Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

// ── Forwarding impls ──────────────────────────────────────────────────────────

impl<G: Generator + ?Sized> Generator for &G {
    type Output = G::Output;

    #[inline]
    fn generate(&self, src: &mut dyn RandomSource) -> G::Output {
        (**self).generate(src)
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    type Output = G::Output;

    #[inline]
    fn generate(&self, src: &mut dyn RandomSource) -> G::Output {
        (**self).generate(src)
    }
}

impl<G: Generator + ?Sized> Generator for Arc<G> {
    type Output = G::Output;

    #[inline]
    fn generate(&self, src: &mut dyn RandomSource) -> G::Output {
        (**self).generate(src)
    }
}

/// A constructor result is itself a generator.
///
/// This is what lets `flat_map` build inner generators from drawn data, e.g.
/// `lengths.flat_map(|n| interval(0, n))`: a bad bound then surfaces as an
/// `Err` sample at draw time instead of at construction.
impl<G: Generator> Generator for Result<G, GenError> {
    type Output = GenResult<G::Output>;

    fn generate(&self, src: &mut dyn RandomSource) -> Self::Output {
        match self {
            Ok(g) => Ok(g.generate(src)),
            Err(e) => Err(e.clone()),
        }
    }
}
