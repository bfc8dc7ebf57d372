// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use chip_search::{find_longest_path, Chip, Color, Path, Variant};
use strum::IntoEnumIterator;

/// Build a chip collection from (start, end) pairs.
pub fn chips(pairs: &[(Color, Color)]) -> Vec<Chip> {
    pairs.iter().map(|&(start, end)| Chip::new(start, end)).collect()
}

/// Run every variant and return the results in variant order.
pub fn run_all(chips: &[Chip], start: Color, end: Color) -> Vec<(Variant, Path)> {
    Variant::iter()
        .map(|variant| (variant, find_longest_path(chips, start, end, variant)))
        .collect()
}

/// Assert that every variant returns exactly `expected`, and that it is valid.
pub fn assert_all_variants(chips: &[Chip], start: Color, end: Color, expected: &[usize]) {
    for (variant, path) in run_all(chips, start, end) {
        assert_eq!(path.ids(), expected, "variant {}", variant);
        assert_eq!(path.validate(chips, start, end), Ok(()), "variant {}", variant);
    }
}

/// Length of the longest valid path, by dynamic programming over subsets.
///
/// Independent of the search engine: `reach[mask]` holds the set of chips a
/// valid prefix using exactly `mask` can end on. Only usable for small inputs.
pub fn oracle_longest(chips: &[Chip], start: Color, end: Color) -> usize {
    let n = chips.len();
    assert!(n <= 16, "oracle is exponential in the number of chips");
    let mut reach = vec![0u32; 1 << n];
    for (id, chip) in chips.iter().enumerate() {
        if chip.start == start {
            reach[1 << id] |= 1 << id;
        }
    }

    let mut best = 0;
    for mask in 1..(1usize << n) {
        let ends = reach[mask];
        if ends == 0 {
            continue;
        }
        for last in 0..n {
            if ends & (1 << last) == 0 {
                continue;
            }
            if chips[last].end == end {
                best = best.max(mask.count_ones() as usize);
            }
            for next in 0..n {
                if mask & (1 << next) == 0 && chips[last].connects_to(&chips[next]) {
                    reach[mask | (1 << next)] |= 1 << next;
                }
            }
        }
    }
    best
}
