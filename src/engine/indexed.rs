// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Indexed recursive search (the primary strategy).
//!
//! From a chip ending in color `c`, the only chips worth trying next are
//! those in `c`'s starting bucket of the [`AdjacencyIndex`]. Each expansion:
//!
//! 1. Marks its chip visited (released when the expansion returns).
//! 2. Takes `[chip]` as a candidate if the chip ends in the target color.
//! 3. Recursively expands every unvisited chip in the bucket for its end
//!    color, and keeps the longest child answer with this chip in front.
//!
//! Replacement is strictly longer-only, so the first longest answer found
//! wins ties.
//!
//! Colors may repeat along a path through different chips; only reusing the
//! same chip is forbidden. The worst case is exponential in the number of
//! chips, and recursion depth is bounded by it.
//!
//! [`AdjacencyIndex`]: crate::memo::AdjacencyIndex

use super::PathSearch;
use crate::chips::{ChipId, Path};
use crate::context::SearchContext;
use crate::state::Counters;
use crate::trail::Visited;

/// Recursive search over the adjacency index.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndexedSearch;

impl IndexedSearch {
    fn expand(&self, ctx: &mut SearchContext<'_>, visited: &mut Visited, current: ChipId) -> Path {
        let mut visited = visited.enter(current);
        ctx.count(Counters::Expansions);

        let mut longest = if ctx.is_terminal(current) {
            ctx.count(Counters::Candidates);
            Path::from(vec![current])
        } else {
            Path::empty()
        };

        let adjacency = ctx.adjacency;
        let next_chips = adjacency.starting_with(ctx.chip(current).end);
        ctx.count_n(Counters::ChipsScanned, next_chips.len());

        for &next in next_chips {
            if visited.contains(next) {
                continue;
            }
            let tail = self.expand(ctx, &mut visited, next);
            // `next` is unmarked again here, before the next sibling is tried.
            if !tail.is_empty() && tail.len() + 1 > longest.len() {
                longest = Path::prefixed(current, tail);
            }
        }
        longest
    }
}

impl PathSearch for IndexedSearch {
    fn expand_from(&self, ctx: &mut SearchContext<'_>, start_chip: ChipId) -> Path {
        let mut visited = Visited::new(ctx.chips.len());
        self.expand(ctx, &mut visited, start_chip)
    }

    fn name(&self) -> &str {
        "Indexed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chips::{Chip, Color::*};
    use crate::memo::AdjacencyIndex;

    #[test]
    fn test_readme_example_from_first_chip() {
        let chips = vec![
            Chip::new(Blue, Yellow),
            Chip::new(Red, Green),
            Chip::new(Yellow, Red),
            Chip::new(Orange, Purple),
        ];
        let adjacency = AdjacencyIndex::build(&chips);
        let mut ctx = SearchContext::new(&chips, &adjacency, Blue, Green);
        let path = IndexedSearch.expand_from(&mut ctx, 0);
        assert_eq!(path.ids(), &[0, 2, 1]);
        assert_eq!(ctx.statistics.get(Counters::Expansions), 3);
        assert_eq!(ctx.statistics.get(Counters::Candidates), 1);
    }

    #[test]
    fn test_keeps_going_past_first_terminal() {
        // Blue->Green is an answer, but Green->Green extends it.
        let chips = vec![Chip::new(Blue, Green), Chip::new(Green, Green)];
        let adjacency = AdjacencyIndex::build(&chips);
        let mut ctx = SearchContext::new(&chips, &adjacency, Blue, Green);
        assert_eq!(IndexedSearch.expand_from(&mut ctx, 0).ids(), &[0, 1]);
        assert_eq!(ctx.statistics.get(Counters::Candidates), 2);
    }

    #[test]
    fn test_dead_end_is_empty() {
        let chips = vec![Chip::new(Blue, Red), Chip::new(Red, Yellow), Chip::new(Orange, Green)];
        let adjacency = AdjacencyIndex::build(&chips);
        let mut ctx = SearchContext::new(&chips, &adjacency, Blue, Green);
        assert!(IndexedSearch.expand_from(&mut ctx, 0).is_empty());
    }

    #[test]
    fn test_first_longest_wins_ties() {
        let chips = vec![
            Chip::new(Blue, Red),
            Chip::new(Red, Green),
            Chip::new(Red, Green),
        ];
        let adjacency = AdjacencyIndex::build(&chips);
        let mut ctx = SearchContext::new(&chips, &adjacency, Blue, Green);
        assert_eq!(IndexedSearch.expand_from(&mut ctx, 0).ids(), &[0, 1]);
    }

    #[test]
    fn test_color_identical_chips_both_usable() {
        // Two distinct Red->Red chips can both sit on one path.
        let chips = vec![
            Chip::new(Blue, Red),
            Chip::new(Red, Red),
            Chip::new(Red, Red),
            Chip::new(Red, Green),
        ];
        let adjacency = AdjacencyIndex::build(&chips);
        let mut ctx = SearchContext::new(&chips, &adjacency, Blue, Green);
        assert_eq!(IndexedSearch.expand_from(&mut ctx, 0).ids(), &[0, 1, 2, 3]);
    }
}
