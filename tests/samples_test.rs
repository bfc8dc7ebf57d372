// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Every sample dataset meets its expected outcome with every variant.

mod common;

use chip_search::report::compare_variants;
use chip_search::samples::{sample, Expected, DEFAULT_END, DEFAULT_START, SAMPLES};
use common::run_all;

fn check_sample(name: &str) {
    let sample = sample(name).unwrap();
    let comparison = compare_variants(sample.chips, DEFAULT_START, DEFAULT_END);
    assert!(comparison.agree(), "variants disagree on {}", name);
    assert!(comparison.identical(), "variants differ on {}", name);
    assert!(
        sample.expected.accepts(comparison.longest()),
        "{}: expected {:?}, found {}",
        name,
        sample.expected,
        comparison.longest()
    );
    for run in &comparison.runs {
        assert_eq!(
            run.path.validate(sample.chips, DEFAULT_START, DEFAULT_END),
            Ok(())
        );
    }
}

#[test]
fn test_fast_samples() {
    for s in SAMPLES.iter().filter(|s| !s.slow) {
        check_sample(s.name);
    }
}

#[test]
fn test_only_performance_is_slow() {
    let slow: Vec<_> = SAMPLES.iter().filter(|s| s.slow).map(|s| s.name).collect();
    assert_eq!(slow, vec!["performance"]);
}

#[test]
fn test_original_sample_path() {
    let original = sample("original").unwrap();
    for (variant, path) in run_all(original.chips, DEFAULT_START, DEFAULT_END) {
        assert_eq!(path.ids(), &[2, 4, 5, 3, 7], "variant {}", variant);
    }
    assert_eq!(original.expected, Expected::Length(5));
}

#[test]
#[ignore = "about 10^8 expansions per variant; run with --ignored"]
fn test_performance_sample() {
    check_sample("performance");
    let performance = sample("performance").unwrap();
    let (_, path) = &run_all(performance.chips, DEFAULT_START, DEFAULT_END)[0];
    assert_eq!(
        path.ids(),
        &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 19, 20, 21, 15, 16, 17]
    );
}
