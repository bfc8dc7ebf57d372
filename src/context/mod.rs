// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is what a search strategy sees while it runs:
//! - Tier 1 (MEMO): the chip collection and its adjacency index, read-only
//! - Tier 2 (DYNAMIC): statistics accumulated during the search
//!
//! The per-path visited set is not part of the context. Each starting chip
//! gets its own.

use crate::chips::{Chip, ChipId, Color};
use crate::memo::AdjacencyIndex;
use crate::state::{Counters, Statistics};

/// Everything a strategy needs to expand paths for one search.
///
/// # Memory Model
///
/// ```text
/// SearchContext<'a> {
///     chips: &'a [Chip],              // Tier 1: borrowed, read-only
///     adjacency: &'a AdjacencyIndex,  // Tier 1: borrowed, read-only
///     start, end: Color,
///     statistics: Statistics,         // Tier 2: owned
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext<'a> {
    /// The chip collection, addressed by [`ChipId`].
    pub chips: &'a [Chip],
    /// Index built from `chips`.
    pub adjacency: &'a AdjacencyIndex,
    /// Color every path must begin with.
    pub start: Color,
    /// Color a path must end with to count as an answer.
    pub end: Color,
    /// Work counters for this search.
    pub statistics: Statistics,
}

impl<'a> SearchContext<'a> {
    /// Create a context for a search from `start` to `end`.
    ///
    /// # Panics
    ///
    /// Panics if `adjacency` was built from a collection with a different
    /// number of chips.
    pub fn new(chips: &'a [Chip], adjacency: &'a AdjacencyIndex, start: Color, end: Color) -> Self {
        assert_eq!(
            adjacency.chip_count(),
            chips.len(),
            "adjacency index was built from a different chip collection"
        );
        Self {
            chips,
            adjacency,
            start,
            end,
            statistics: Statistics::new(),
        }
    }

    pub fn chip(&self, id: ChipId) -> &'a Chip {
        &self.chips[id]
    }

    /// True if a path ending with chip `id` is an answer.
    pub fn is_terminal(&self, id: ChipId) -> bool {
        self.chips[id].end == self.end
    }

    pub(crate) fn count(&mut self, counter: Counters) {
        self.statistics.increment(counter);
    }

    pub(crate) fn count_n(&mut self, counter: Counters, n: usize) {
        self.statistics.add(counter, n as u64);
    }
}
