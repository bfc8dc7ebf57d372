// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Named sample chip collections.
//!
//! Each sample comes with the outcome expected for a Blue to Green search.
//! The command-line driver uses these for its `find`, `compare` and `test`
//! commands, and the integration tests check every expectation.

use crate::chips::{Chip, Color, Color::*};
use crate::error::ChipError;

/// Expected outcome of a Blue to Green search over a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A longest path of exactly this many chips.
    Length(usize),
    /// No path at all.
    NoPath,
}

impl Expected {
    /// True if a path of `length` chips meets this expectation.
    pub fn accepts(self, length: usize) -> bool {
        match self {
            Expected::Length(n) => n == length,
            Expected::NoPath => length == 0,
        }
    }
}

/// A named chip collection with its expected outcome.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    pub chips: &'static [Chip],
    pub expected: Expected,
    /// Takes seconds rather than microseconds to search exhaustively.
    pub slow: bool,
}

/// Default start color used by the samples.
pub const DEFAULT_START: Color = Blue;
/// Default end color used by the samples.
pub const DEFAULT_END: Color = Green;

const fn chip(start: Color, end: Color) -> Chip {
    Chip::new(start, end)
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "original",
        description: "Original problem",
        chips: &[
            chip(Red, Blue),
            chip(Green, Yellow),
            chip(Blue, Red),
            chip(Yellow, Orange),
            chip(Red, Purple),
            chip(Purple, Yellow),
            chip(Purple, Red),
            chip(Orange, Green),
        ],
        expected: Expected::Length(5),
        slow: false,
    },
    Sample {
        name: "readme",
        description: "README example",
        chips: &[
            chip(Blue, Yellow),
            chip(Red, Green),
            chip(Yellow, Red),
            chip(Orange, Purple),
        ],
        expected: Expected::Length(3),
        slow: false,
    },
    Sample {
        name: "no-path",
        description: "No path exists",
        chips: &[
            chip(Red, Blue),
            chip(Yellow, Purple),
            chip(Orange, Red),
            chip(Purple, Orange),
        ],
        expected: Expected::NoPath,
        slow: false,
    },
    Sample {
        name: "single",
        description: "Single chip solution",
        chips: &[chip(Blue, Green), chip(Red, Yellow), chip(Purple, Orange)],
        expected: Expected::Length(1),
        slow: false,
    },
    Sample {
        name: "self-loops",
        description: "Chips with the same start and end color",
        chips: &[
            chip(Blue, Blue),
            chip(Blue, Red),
            chip(Red, Yellow),
            chip(Yellow, Green),
            chip(Green, Green),
        ],
        expected: Expected::Length(5),
        slow: false,
    },
    Sample {
        name: "same-length",
        description: "Multiple paths of the same length",
        chips: &[
            chip(Blue, Red),
            chip(Blue, Yellow),
            chip(Red, Green),
            chip(Yellow, Green),
            chip(Red, Purple),
            chip(Purple, Green),
        ],
        expected: Expected::Length(3),
        slow: false,
    },
    Sample {
        name: "circular",
        description: "Cycle in color space",
        chips: &[
            chip(Blue, Red),
            chip(Red, Yellow),
            chip(Yellow, Red),
            chip(Yellow, Green),
        ],
        expected: Expected::Length(3),
        slow: false,
    },
    Sample {
        name: "disconnected",
        description: "Disconnected chips are ignored",
        chips: &[
            chip(Blue, Red),
            chip(Red, Green),
            chip(Yellow, Purple),
            chip(Purple, Orange),
            chip(Orange, Yellow),
        ],
        expected: Expected::Length(2),
        slow: false,
    },
    Sample {
        name: "long-chain",
        description: "Long chain with shortcuts",
        chips: &[
            chip(Blue, Red),
            chip(Red, Yellow),
            chip(Yellow, Purple),
            chip(Purple, Orange),
            chip(Orange, Green),
            chip(Blue, Green),
            chip(Red, Green),
        ],
        expected: Expected::Length(5),
        slow: false,
    },
    Sample {
        name: "empty",
        description: "Empty chip set",
        chips: &[],
        expected: Expected::NoPath,
        slow: false,
    },
    Sample {
        name: "no-outlet",
        description: "Start chip loops back with no way out",
        chips: &[
            chip(Blue, Blue),
            chip(Red, Yellow),
            chip(Yellow, Green),
            chip(Green, Green),
        ],
        expected: Expected::NoPath,
        slow: false,
    },
    Sample {
        name: "performance",
        description: "22 chips, heavily cyclic (slow: ~10^8 expansions)",
        chips: &[
            chip(Blue, Red),
            chip(Red, Yellow),
            chip(Yellow, Purple),
            chip(Purple, Orange),
            chip(Orange, Blue),
            chip(Blue, Yellow),
            chip(Yellow, Green),
            chip(Green, Red),
            chip(Red, Purple),
            chip(Purple, Blue),
            chip(Blue, Orange),
            chip(Orange, Yellow),
            chip(Yellow, Red),
            chip(Red, Blue),
            chip(Blue, Purple),
            chip(Purple, Yellow),
            chip(Yellow, Orange),
            chip(Orange, Green),
            chip(Green, Blue),
            chip(Blue, Red),
            chip(Red, Yellow),
            chip(Yellow, Purple),
        ],
        expected: Expected::Length(20),
        slow: true,
    },
];

/// Look up a sample by name, ignoring ASCII case.
pub fn sample(name: &str) -> Result<&'static Sample, ChipError> {
    SAMPLES
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| ChipError::UnknownSample(name.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(sample("original").unwrap().chips.len(), 8);
        assert_eq!(sample("README").unwrap().chips.len(), 4);
        assert_eq!(
            sample("nope").unwrap_err(),
            ChipError::UnknownSample("nope".to_string())
        );
    }

    #[test]
    fn test_names_unique() {
        for (i, a) in SAMPLES.iter().enumerate() {
            for b in &SAMPLES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_expected_accepts() {
        assert!(Expected::Length(3).accepts(3));
        assert!(!Expected::Length(3).accepts(2));
        assert!(Expected::NoPath.accepts(0));
        assert!(!Expected::NoPath.accepts(1));
    }
}
