//! Product generators.  Components are drawn independently, left to right.

use rg_combinator::{Generator, Zip};

/// One draw from `first`, then one from `second`.
pub fn pairs<A, B>(first: A, second: B) -> Zip<A, B>
where
    A: Generator,
    B: Generator,
{
    first.zip(second)
}

pub fn triples<A, B, C>(
    first:  A,
    second: B,
    third:  C,
) -> impl Generator<Output = (A::Output, B::Output, C::Output)>
where
    A: Generator,
    B: Generator,
    C: Generator,
{
    first.zip(second).zip(third).map(|((a, b), c)| (a, b, c))
}
