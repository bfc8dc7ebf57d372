// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property tests over random chip collections.
//!
//! Collections are kept small (at most nine chips) so that the exhaustive
//! search and the subset oracle both stay fast.

mod common;

use chip_search::chips::Color::*;
use chip_search::{find_longest_path, Chip, Color, Variant};
use common::{oracle_longest, run_all};
use proptest::prelude::*;

fn color() -> impl Strategy<Value = Color> + Clone {
    prop::sample::select(vec![Red, Green, Blue, Yellow, Orange, Purple])
}

/// Colors drawn from only three values, so chains are common.
fn dense_color() -> impl Strategy<Value = Color> + Clone {
    prop::sample::select(vec![Blue, Green, Red])
}

fn chip_from(colors: impl Strategy<Value = Color> + Clone) -> impl Strategy<Value = Chip> {
    (colors.clone(), colors).prop_map(|(start, end)| Chip::new(start, end))
}

fn chip_set() -> impl Strategy<Value = Vec<Chip>> {
    prop_oneof![
        prop::collection::vec(chip_from(color()), 0..=9),
        prop::collection::vec(chip_from(dense_color()), 0..=9),
    ]
}

proptest! {
    #[test]
    fn variants_agree(chips in chip_set(), start in color(), end in color()) {
        let results = run_all(&chips, start, end);
        let (_, reference) = &results[0];
        for (variant, path) in &results[1..] {
            prop_assert_eq!(path.len(), reference.len(), "variant {}", variant);
            // Buckets and scans share ascending id order, so paths match exactly.
            prop_assert_eq!(path, reference, "variant {}", variant);
        }
    }

    #[test]
    fn results_are_valid(chips in chip_set(), start in color(), end in color()) {
        for (variant, path) in run_all(&chips, start, end) {
            prop_assert_eq!(path.validate(&chips, start, end), Ok(()), "variant {}", variant);
        }
    }

    #[test]
    fn results_are_longest(chips in chip_set(), start in color(), end in color()) {
        let expected = oracle_longest(&chips, start, end);
        for (variant, path) in run_all(&chips, start, end) {
            prop_assert_eq!(path.len(), expected, "variant {}", variant);
        }
    }

    #[test]
    fn missing_start_color_gives_empty(chips in chip_set(), start in color(), end in color()) {
        let chips: Vec<Chip> = chips.into_iter().filter(|c| c.start != start).collect();
        for (_, path) in run_all(&chips, start, end) {
            prop_assert!(path.is_empty());
        }
    }

    #[test]
    fn missing_end_color_gives_empty(chips in chip_set(), start in color(), end in color()) {
        let chips: Vec<Chip> = chips.into_iter().filter(|c| c.end != end).collect();
        for (_, path) in run_all(&chips, start, end) {
            prop_assert!(path.is_empty());
        }
    }

    #[test]
    fn search_is_idempotent(chips in chip_set(), start in color(), end in color()) {
        for variant in [Variant::Indexed, Variant::Unindexed, Variant::FrameBased] {
            let first = find_longest_path(&chips, start, end, variant);
            let second = find_longest_path(&chips, start, end, variant);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn appending_unrelated_chip_never_shortens(chips in chip_set(), start in color(), end in color(), extra in chip_from(color())) {
        let before = find_longest_path(&chips, start, end, Variant::Indexed).len();
        let mut more = chips.clone();
        more.push(extra);
        let after = find_longest_path(&more, start, end, Variant::Indexed).len();
        prop_assert!(after >= before);
    }
}
