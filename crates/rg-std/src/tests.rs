//! Unit tests for rg-std.

use std::collections::HashMap;
use std::sync::Arc;

use rg_combinator::{Generator, from_fn, unit};
use rg_core::{GenError, ReplaySource, SeededSource};

use crate::{
    booleans, elements, frequency, integers, interval, one_of, options, pairs, sequence,
    sequence_with, triples,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn replay(script: &[i32]) -> ReplaySource {
    ReplaySource::new(script.to_vec()).unwrap()
}

fn draw_n<G: Generator>(g: &G, seed: u64, n: usize) -> Vec<G::Output> {
    let mut src = SeededSource::new(seed);
    (0..n).map(|_| g.generate(&mut src)).collect()
}

fn fraction<T: PartialEq>(samples: &[T], value: &T) -> f64 {
    samples.iter().filter(|s| *s == value).count() as f64 / samples.len() as f64
}

// ── primitives ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod primitives {
    use super::*;

    #[test]
    fn integers_pass_through() {
        let g = integers();
        let mut src = replay(&[i32::MIN, 0, i32::MAX]);
        assert_eq!(g.generate(&mut src), i32::MIN);
        assert_eq!(g.generate(&mut src), 0);
        assert_eq!(g.generate(&mut src), i32::MAX);
    }

    #[test]
    fn booleans_follow_sign() {
        let g = booleans();
        let mut src = replay(&[1, 0, -1]);
        assert!(g.generate(&mut src));
        assert!(!g.generate(&mut src));
        assert!(!g.generate(&mut src));
    }

    #[test]
    fn booleans_roughly_balanced() {
        let samples = draw_n(&booleans(), 8, 10_000);
        let p = fraction(&samples, &true);
        assert!((0.46..0.54).contains(&p), "got {p}");
    }

    #[test]
    fn interval_stays_in_bounds() {
        for &(lo, hi) in &[(0, 1), (0, 10), (-10, -5), (-3, 3), (1_000, 1_001), (-50, 7_919)] {
            let g = interval(lo, hi).unwrap();
            for v in draw_n(&g, (hi - lo) as u64, 10_000) {
                assert!(lo <= v && v < hi, "{v} outside [{lo}, {hi})");
            }
        }
    }

    #[test]
    fn interval_covers_small_range() {
        let samples = draw_n(&interval(0, 4).unwrap(), 21, 1_000);
        for v in 0..4 {
            assert!(samples.contains(&v), "{v} never drawn");
        }
    }

    #[test]
    fn interval_negative_draws() {
        let g = interval(-10, -5).unwrap();
        let mut src = replay(&[-7, 7, -5]);
        assert_eq!(g.generate(&mut src), -8);
        assert_eq!(g.generate(&mut src), -8);
        assert_eq!(g.generate(&mut src), -10);
    }

    #[test]
    fn interval_remaps_min_value() {
        let g = interval(5, 8).unwrap();
        let mut src = replay(&[i32::MIN]);
        assert_eq!(g.generate(&mut src), 5);
    }

    #[test]
    fn interval_full_width_does_not_overflow() {
        let g = interval(i32::MIN, i32::MAX).unwrap();
        let mut src = replay(&[i32::MAX, i32::MIN, -1]);
        assert_eq!(g.generate(&mut src), -1);
        assert_eq!(g.generate(&mut src), i32::MIN);
        assert_eq!(g.generate(&mut src), i32::MIN + 1);
    }

    #[test]
    fn interval_rejects_empty_and_inverted() {
        assert_eq!(
            interval(3, 3).err(),
            Some(GenError::InvalidRange { lo: 3, hi: 3 })
        );
        assert_eq!(
            interval(4, -4).err(),
            Some(GenError::InvalidRange { lo: 4, hi: -4 })
        );
    }

    #[test]
    fn data_dependent_bounds_fail_at_generate() {
        let g = integers().flat_map(|n| interval(0, n));
        let mut src = replay(&[-3, 12, 5]);
        assert_eq!(g.generate(&mut src), Err(GenError::InvalidRange { lo: 0, hi: -3 }));
        // Next draw: bound 12, value 5.
        assert_eq!(g.generate(&mut src), Ok(5));
    }
}

// ── tuples ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tuples {
    use super::*;

    #[test]
    fn degenerate_pairs_are_deterministic() {
        let g = pairs(interval(0, 1).unwrap(), interval(100, 101).unwrap());
        for (a, b) in draw_n(&g, 5, 1_000) {
            assert_eq!((a, b), (0, 100));
        }
    }

    #[test]
    fn pairs_draw_left_then_right() {
        let g = pairs(integers(), booleans());
        let mut src = replay(&[10, -1]);
        assert_eq!(g.generate(&mut src), (10, false));
    }

    #[test]
    fn triples_draw_in_argument_order() {
        let g = triples(integers(), integers(), integers());
        let mut src = replay(&[1, 2, 3]);
        assert_eq!(g.generate(&mut src), (1, 2, 3));
        assert_eq!(src.draws(), 3);
    }

    #[test]
    fn pairs_reuse_one_generator() {
        let digits = interval(0, 10).unwrap();
        let g = pairs(&digits, &digits);
        let samples = draw_n(&g, 6, 2_000);
        assert!(samples.iter().any(|(a, b)| a != b), "components should vary independently");
    }
}

// ── choice ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod choice {
    use super::*;

    #[test]
    fn one_of_empty_fails() {
        let gens: Vec<rg_combinator::SharedGenerator<i32>> = vec![];
        assert_eq!(one_of(gens).err(), Some(GenError::EmptyChoice));
    }

    #[test]
    fn one_of_single_alternative() {
        let g = one_of(vec![unit(42).shared()]).unwrap();
        assert!(draw_n(&g, 1, 100).iter().all(|&v| v == 42));
    }

    #[test]
    fn one_of_two_constants_is_balanced() {
        let g = one_of(vec![unit("A").shared(), unit("B").shared()]).unwrap();
        let samples = draw_n(&g, 2024, 10_000);
        let a = fraction(&samples, &"A");
        let b = fraction(&samples, &"B");
        assert!((0.47..0.53).contains(&a), "A: {a}");
        assert!((0.47..0.53).contains(&b), "B: {b}");
    }

    #[test]
    fn one_of_redecides_each_draw() {
        let g = one_of(vec![unit(0).shared(), integers().map(|x| x | 1).shared()]).unwrap();
        // Draw 1 picks index 0, draw 2 picks index 1 and its inner draw yields 6 | 1.
        let mut src = replay(&[2, 3, 6]);
        assert_eq!(g.generate(&mut src), 0);
        assert_eq!(g.generate(&mut src), 7);
    }

    #[test]
    fn frequency_ratio_and_zero_weight() {
        let g = frequency(vec![
            (3, unit('x').shared()),
            (0, unit('z').shared()),
            (1, unit('y').shared()),
        ])
        .unwrap();
        let samples = draw_n(&g, 31, 20_000);
        assert_eq!(fraction(&samples, &'z'), 0.0);
        let x = fraction(&samples, &'x');
        assert!((0.72..0.78).contains(&x), "x: {x}");
    }

    #[test]
    fn frequency_rejects_bad_weights() {
        let empty: Vec<(u32, rg_combinator::SharedGenerator<u8>)> = vec![];
        assert_eq!(frequency(empty).err(), Some(GenError::EmptyChoice));
        let zero = vec![(0, unit(1u8).shared()), (0, unit(2u8).shared())];
        assert_eq!(frequency(zero).err(), Some(GenError::ZeroWeight));
    }

    #[test]
    fn frequency_total_above_i32_max_fails() {
        let heavy = vec![(u32::MAX, unit(1u8).shared()), (u32::MAX, unit(2u8).shared())];
        assert_eq!(
            frequency(heavy).err(),
            Some(GenError::InvalidRange { lo: 0, hi: 2 * i64::from(u32::MAX) })
        );

        // One past the largest usable total.
        let just_over = vec![(i32::MAX as u32, unit(1u8).shared()), (1, unit(2u8).shared())];
        assert_eq!(
            frequency(just_over).err(),
            Some(GenError::InvalidRange { lo: 0, hi: i64::from(i32::MAX) + 1 })
        );
    }

    #[test]
    fn elements_picks_every_value() {
        let g = elements(vec!["red", "green", "blue"]).unwrap();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for v in draw_n(&g, 3, 3_000) {
            *counts.entry(v).or_default() += 1;
        }
        assert_eq!(counts.len(), 3);
        assert!(counts.values().all(|&c| c > 800), "{counts:?}");
    }

    #[test]
    fn elements_empty_fails() {
        assert_eq!(elements(Vec::<u8>::new()).err(), Some(GenError::EmptyChoice));
    }
}

// ── collections ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod collections {
    use super::*;

    #[test]
    fn zero_length_sequence_is_empty() {
        let g = sequence(integers(), 0, 0).unwrap();
        assert!(draw_n(&g, 17, 500).iter().all(Vec::is_empty));
    }

    #[test]
    fn fixed_length_sequence() {
        let g = sequence(booleans(), 4, 4).unwrap();
        assert!(draw_n(&g, 18, 200).iter().all(|v| v.len() == 4));
    }

    #[test]
    fn lengths_within_range() {
        let g = sequence(interval(0, 100).unwrap(), 2, 6).unwrap();
        let samples = draw_n(&g, 19, 2_000);
        for v in &samples {
            assert!((2..6).contains(&v.len()), "len {}", v.len());
            assert!(v.iter().all(|x| (0..100).contains(x)));
        }
        for len in 2..6 {
            assert!(samples.iter().any(|v| v.len() == len), "length {len} never drawn");
        }
    }

    #[test]
    fn elements_in_draw_order() {
        let g = sequence(integers(), 1, 10).unwrap();
        // Length draw 2 → 1 + 2 % 9 = 3 elements, then 10, 20, 30.
        let mut src = replay(&[2, 10, 20, 30]);
        assert_eq!(g.generate(&mut src), vec![10, 20, 30]);
    }

    #[test]
    fn inverted_lengths_fail() {
        assert_eq!(
            sequence(integers(), 5, 2).err(),
            Some(GenError::InvalidRange { lo: 5, hi: 2 })
        );
    }

    #[test]
    fn oversized_lengths_fail() {
        let max = i32::MAX as usize + 1;
        assert!(matches!(
            sequence(integers(), 0, max).err(),
            Some(GenError::InvalidRange { .. })
        ));
    }

    #[test]
    fn custom_length_generator() {
        let g = sequence_with(unit('a'), unit(3));
        let mut src = SeededSource::new(0);
        assert_eq!(g.generate(&mut src), Ok(vec!['a', 'a', 'a']));
    }

    #[test]
    fn interval_as_length_generator() {
        let g = sequence_with(interval(0, 100).unwrap(), interval(1, 5).unwrap());
        for v in draw_n(&g, 24, 2_000) {
            let v = v.unwrap();
            assert!((1..5).contains(&v.len()), "len {}", v.len());
            assert!(v.iter().all(|x| (0..100).contains(x)));
        }

        // Length draw 6 → 1 + 6 % 4 = 3 elements, then 7, 8, 9.
        let g = sequence_with(integers(), interval(1, 5).unwrap());
        assert_eq!(g.generate(&mut replay(&[6, 7, 8, 9])), Ok(vec![7, 8, 9]));
    }

    #[test]
    fn negative_drawn_length_fails_at_generate() {
        let g = sequence_with(integers(), unit(-2));
        let mut src = replay(&[1]);
        assert_eq!(g.generate(&mut src), Err(GenError::NegativeLength(-2)));
        assert_eq!(src.draws(), 0);
    }

    #[test]
    fn sequence_with_matches_repeated_flat_map() {
        // The same vectors built by chaining one zip per element.
        let digits = Arc::new(interval(0, 10).unwrap());
        let lengths = interval(0, 6).unwrap();
        let chained = lengths.clone().flat_map(move |n| {
            let digits = Arc::clone(&digits);
            (0..n).fold(unit(Vec::new()).boxed(), move |acc, _| {
                acc.zip(Arc::clone(&digits))
                    .map(|(mut v, x)| {
                        v.push(x);
                        v
                    })
                    .boxed()
            })
        });
        let direct = sequence_with(interval(0, 10).unwrap(), lengths);

        let expected: Vec<_> = draw_n(&chained, 25, 500).into_iter().map(Ok).collect();
        assert_eq!(draw_n(&direct, 25, 500), expected);
    }

    #[test]
    fn sequence_matches_sequence_with() {
        let a = sequence(interval(-9, 9).unwrap(), 0, 7).unwrap();
        let b = sequence_with(interval(-9, 9).unwrap(), interval(0, 7).unwrap());
        let expected: Vec<_> = draw_n(&a, 26, 500).into_iter().map(Ok).collect();
        assert_eq!(draw_n(&b, 26, 500), expected);
    }

    #[test]
    fn hand_written_length_generator() {
        let lengths = from_fn(|src| src.next_int().rem_euclid(3));
        let g = sequence_with(unit(0u8), lengths);
        assert!(draw_n(&g, 27, 300).into_iter().all(|v| v.is_ok_and(|v| v.len() < 3)));
    }

    #[test]
    fn options_both_variants() {
        let samples = draw_n(&options(interval(0, 3).unwrap()), 23, 1_000);
        assert!(samples.iter().any(Option::is_none));
        assert!(samples.iter().any(Option::is_some));
    }
}

// ── Reproducibility ───────────────────────────────────────────────────────────

#[cfg(test)]
mod reproducibility {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let pipeline = || {
            let words = elements(vec!["alpha", "beta", "gamma"]).unwrap();
            let scores = interval(-100, 100).unwrap();
            sequence(pairs(words, options(scores)), 0, 8).unwrap()
        };
        let first = draw_n(&pipeline(), 4242, 500);
        let second = draw_n(&pipeline(), 4242, 500);
        assert_eq!(first, second);
    }
}
