// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Longest-path search engine.
//!
//! The engine finds the longest chain of chips that starts with a given
//! color and ends with another, using no chip twice. It coordinates one of
//! three interchangeable strategies:
//!
//! - [`IndexedSearch`]: recursive, next chips from the adjacency index
//! - [`UnindexedSearch`]: recursive, next chips by scanning every chip
//! - [`FrameSearch`]: the indexed search with an explicit trail and frame stack
//!
//! # Execution Model
//!
//! 1. Build the [`AdjacencyIndex`] (or take a prebuilt one)
//! 2. Return the empty path if there are no chips, no chip starts with the
//!    start color, or no chip ends with the end color
//! 3. Ask the strategy for the best path from every chip that starts with
//!    the start color, in ascending id order, each with fresh backtracking
//!    state
//! 4. Keep a result only if it is strictly longer than the best so far
//!
//! All strategies return identical paths for identical input, and the
//! search is deterministic, so re-running it gives the same answer.
//!
//! # Example
//!
//! ```
//! use chip_search::chips::{Chip, Color};
//! use chip_search::engine::{find_longest_path, Variant};
//!
//! let chips = vec![
//!     Chip::new(Color::Blue, Color::Yellow),
//!     Chip::new(Color::Red, Color::Green),
//!     Chip::new(Color::Yellow, Color::Red),
//!     Chip::new(Color::Orange, Color::Purple),
//! ];
//!
//! let path = find_longest_path(&chips, Color::Blue, Color::Green, Variant::Indexed);
//! assert_eq!(path.ids(), &[0, 2, 1]);
//! ```

pub mod frames;
pub mod indexed;
pub mod strategy;
pub mod unindexed;

pub use frames::FrameSearch;
pub use indexed::IndexedSearch;
pub use strategy::PathSearch;
pub use unindexed::UnindexedSearch;

use crate::chips::{Chip, Color, Path};
use crate::context::SearchContext;
use crate::error::ChipError;
use crate::memo::AdjacencyIndex;
use crate::state::{Counters, Statistics};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, trace};

/// Which strategy the engine runs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Variant {
    /// Recursive search over the adjacency index.
    #[default]
    #[strum(to_string = "indexed", serialize = "faster")]
    Indexed,
    /// Recursive search scanning every chip at every step.
    #[strum(to_string = "unindexed", serialize = "naive", serialize = "boring")]
    Unindexed,
    /// Indexed search with an explicit trail and frame stack.
    #[strum(to_string = "frames", serialize = "frame-based", serialize = "slow")]
    FrameBased,
}

impl Variant {
    /// A fresh strategy object for this variant.
    pub fn strategy(self) -> Box<dyn PathSearch> {
        match self {
            Variant::Indexed => Box::new(IndexedSearch),
            Variant::Unindexed => Box::new(UnindexedSearch),
            Variant::FrameBased => Box::new(FrameSearch),
        }
    }

    /// Parse a variant name, ignoring ASCII case.
    pub fn parse(name: &str) -> Result<Self, ChipError> {
        <Variant as FromStr>::from_str(name.trim())
            .map_err(|_| ChipError::UnknownVariant(name.trim().to_string()))
    }
}

/// Search engine that runs one strategy over every starting chip.
///
/// The engine holds no data about any chip collection between calls, so it
/// can be reused for any number of searches. Statistics describe the most
/// recent search only.
#[derive(Debug)]
pub struct SearchEngine {
    variant: Variant,
    strategy: Box<dyn PathSearch>,
    statistics: Statistics,
}

impl SearchEngine {
    /// Create an engine running `variant`.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            strategy: variant.strategy(),
            statistics: Statistics::new(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Find the longest path from `start` to `end` over `chips`.
    ///
    /// Builds a fresh [`AdjacencyIndex`] for this call. Returns the empty
    /// path when no path exists.
    pub fn search(&mut self, chips: &[Chip], start: Color, end: Color) -> Path {
        let adjacency = AdjacencyIndex::build(chips);
        self.search_with_index(chips, &adjacency, start, end)
    }

    /// Find the longest path using an index already built from `chips`.
    ///
    /// Reusing an index is only correct while `chips` is unchanged since the
    /// index was built.
    ///
    /// # Panics
    ///
    /// Panics if `adjacency` was built from a collection with a different
    /// number of chips.
    pub fn search_with_index(
        &mut self,
        chips: &[Chip],
        adjacency: &AdjacencyIndex,
        start: Color,
        end: Color,
    ) -> Path {
        let mut ctx = SearchContext::new(chips, adjacency, start, end);
        ctx.count(Counters::Searches);
        debug!(
            variant = %self.variant,
            chips = chips.len(),
            %start,
            %end,
            "searching for longest path"
        );

        let best = if chips.is_empty() {
            debug!("no chips to search");
            Path::empty()
        } else if !adjacency.has_starters_for(start) {
            debug!(%start, "no chip starts with the start color");
            Path::empty()
        } else if !adjacency.has_enders_for(end) {
            debug!(%end, "no chip ends with the end color");
            Path::empty()
        } else {
            self.search_all_starts(&mut ctx)
        };

        self.statistics = ctx.statistics;
        best
    }

    fn search_all_starts(&self, ctx: &mut SearchContext<'_>) -> Path {
        let adjacency = ctx.adjacency;
        let mut best = Path::empty();
        for &first in adjacency.starting_with(ctx.start) {
            ctx.count(Counters::StartingChips);
            let candidate = self.strategy.expand_from(ctx, first);
            if candidate.len() > best.len() {
                trace!(
                    strategy = self.strategy.name(),
                    first,
                    length = candidate.len(),
                    "new longest path"
                );
                ctx.count(Counters::Improvements);
                best = candidate;
            }
        }
        best
    }

    /// Counters from the most recent search.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

/// Find the longest path from `start` to `end` over `chips` with `variant`.
///
/// Returns the chip ids of the path in walk order, or the empty path if no
/// chain of chips links `start` to `end`.
pub fn find_longest_path(chips: &[Chip], start: Color, end: Color, variant: Variant) -> Path {
    SearchEngine::new(variant).search(chips, start, end)
}
