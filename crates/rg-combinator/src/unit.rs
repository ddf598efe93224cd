//! Leaf generators: constants and closures over the raw source.

use rg_core::RandomSource;

use crate::Generator;

/// A generator that always yields a clone of the same value and consumes no
/// entropy.  Terminates pipelines with a deterministic value.
#[derive(Clone, Debug)]
pub struct Unit<T>(T);

/// Lift a plain value into a constant generator.
pub fn unit<T: Clone>(value: T) -> Unit<T> {
    Unit(value)
}

impl<T: Clone> Generator for Unit<T> {
    type Output = T;

    #[inline]
    fn generate(&self, _src: &mut dyn RandomSource) -> T {
        self.0.clone()
    }
}

/// A generator backed by a closure that reads the source directly.
///
/// This is how base generators are written; derived ones should prefer the
/// combinators.
#[derive(Clone)]
pub struct FromFn<F>(F);

pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: Fn(&mut dyn RandomSource) -> T,
{
    FromFn(f)
}

impl<T, F> Generator for FromFn<F>
where
    F: Fn(&mut dyn RandomSource) -> T,
{
    type Output = T;

    #[inline]
    fn generate(&self, src: &mut dyn RandomSource) -> T {
        (self.0)(src)
    }
}
