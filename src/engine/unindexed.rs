// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Unindexed ("naive") recursive search.
//!
//! Same recursion as [`IndexedSearch`](super::IndexedSearch), but each
//! expansion finds its next chips by scanning the whole collection for
//! unvisited chips whose start color matches the current end color. It
//! exists as the baseline the indexed search is measured against, and it
//! must return exactly the same paths.

use super::PathSearch;
use crate::chips::{ChipId, Path};
use crate::context::SearchContext;
use crate::state::Counters;
use crate::trail::Visited;

/// Recursive search that scans every chip at every step.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnindexedSearch;

impl UnindexedSearch {
    fn expand(&self, ctx: &mut SearchContext<'_>, visited: &mut Visited, current: ChipId) -> Path {
        let mut visited = visited.enter(current);
        ctx.count(Counters::Expansions);

        let mut longest = if ctx.is_terminal(current) {
            ctx.count(Counters::Candidates);
            Path::from(vec![current])
        } else {
            Path::empty()
        };

        let chips = ctx.chips;
        let joining = ctx.chip(current).end;
        ctx.count_n(Counters::ChipsScanned, chips.len());

        for (next, chip) in chips.iter().enumerate() {
            if visited.contains(next) || chip.start != joining {
                continue;
            }
            let tail = self.expand(ctx, &mut visited, next);
            if !tail.is_empty() && tail.len() + 1 > longest.len() {
                longest = Path::prefixed(current, tail);
            }
        }
        longest
    }
}

impl PathSearch for UnindexedSearch {
    fn expand_from(&self, ctx: &mut SearchContext<'_>, start_chip: ChipId) -> Path {
        let mut visited = Visited::new(ctx.chips.len());
        self.expand(ctx, &mut visited, start_chip)
    }

    fn name(&self) -> &str {
        "Unindexed"
    }
}
