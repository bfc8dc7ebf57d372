// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Frame-based search.
//!
//! The indexed search restated with explicit state instead of recursion.
//! The path so far lives on a [`Trail`], and a stack of frames records, for
//! each chip on the trail, which of its next chips to try next.
//!
//! # Execution Model
//!
//! 1. Entering a chip pushes it on the trail and pushes a frame for it.
//!    If the chip ends in the target color and the trail is longer than the
//!    best answer so far, the trail is snapshotted as the new best.
//! 2. The top frame advances its choice cursor through the starting bucket
//!    for its chip's end color, skipping chips already on the trail.
//! 3. When a frame runs out of choices it is popped and its chip is popped
//!    from the trail (backtrack).
//! 4. The search from one starting chip ends when the frame stack is empty.
//!
//! Snapshots replace the best only when strictly longer, which in this
//! depth-first order picks the same path the recursive search builds.
//! Stack depth is heap-allocated, so very deep chains cannot overflow the
//! call stack.

use super::PathSearch;
use crate::chips::{ChipId, Path};
use crate::context::SearchContext;
use crate::state::Counters;
use crate::trail::Trail;

/// One chip on the trail and the position of its next choice.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// The chip this frame expands.
    chip: ChipId,
    /// Index into the starting bucket of `chip`'s end color.
    next_choice: usize,
}

/// Search with an explicit trail and frame stack.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameSearch;

impl FrameSearch {
    fn enter(
        ctx: &mut SearchContext<'_>,
        trail: &mut Trail,
        frames: &mut Vec<Frame>,
        best: &mut Path,
        chip: ChipId,
    ) {
        trail.push(chip);
        frames.push(Frame {
            chip,
            next_choice: 0,
        });
        ctx.count(Counters::Expansions);

        if ctx.is_terminal(chip) {
            ctx.count(Counters::Candidates);
            if trail.len() > best.len() {
                *best = trail.snapshot();
            }
        }
    }
}

impl PathSearch for FrameSearch {
    fn expand_from(&self, ctx: &mut SearchContext<'_>, start_chip: ChipId) -> Path {
        let adjacency = ctx.adjacency;
        let chips = ctx.chips;

        let mut trail = Trail::new(chips.len());
        let mut frames: Vec<Frame> = Vec::with_capacity(chips.len());
        let mut best = Path::empty();

        Self::enter(ctx, &mut trail, &mut frames, &mut best, start_chip);

        while let Some(frame) = frames.last_mut() {
            let choices = adjacency.starting_with(chips[frame.chip].end);

            let mut next = None;
            while frame.next_choice < choices.len() {
                let candidate = choices[frame.next_choice];
                frame.next_choice += 1;
                ctx.count(Counters::ChipsScanned);
                if !trail.contains(candidate) {
                    next = Some(candidate);
                    break;
                }
            }

            match next {
                Some(chip) => Self::enter(ctx, &mut trail, &mut frames, &mut best, chip),
                None => {
                    frames.pop();
                    trail.pop();
                }
            }
        }

        debug_assert!(trail.is_empty());
        best
    }

    fn name(&self) -> &str {
        "FrameBased"
    }
}
