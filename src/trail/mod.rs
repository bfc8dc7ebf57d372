// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking state for the chip search.
//!
//! Two shapes of the same mark/unmark discipline:
//! - [`Visited`] with its [`Mark`] guard, for the recursive searches, where
//!   the call stack holds the path and a guard's scope is one expansion.
//! - [`Trail`], for the frame-based search, where the path so far is kept
//!   explicitly. Pushing a chip marks it visited, popping unmarks it, and the
//!   best answer is taken by snapshotting the trail.

pub mod visited;

pub use visited::{Mark, Visited};

use crate::chips::{ChipId, Path};

/// The explicit path so far, with its visited set.
///
/// # Memory Model
///
/// Owned by one in-flight search from one starting chip. Its depth is bounded
/// by the number of chips, since a chip can be on the trail at most once.
#[derive(Debug, Clone)]
pub struct Trail {
    /// Chip ids on the current path, in walk order.
    entries: Vec<ChipId>,
    visited: Visited,
}

impl Trail {
    /// Create an empty trail for a collection of `chip_count` chips.
    pub fn new(chip_count: usize) -> Self {
        Self {
            entries: Vec::with_capacity(chip_count),
            visited: Visited::new(chip_count),
        }
    }

    /// Append `id` to the path and mark it visited.
    pub fn push(&mut self, id: ChipId) {
        self.visited.mark(id);
        self.entries.push(id);
    }

    /// Remove the last chip from the path and unmark it.
    ///
    /// Returns `None` if the trail is empty.
    pub fn pop(&mut self) -> Option<ChipId> {
        let id = self.entries.pop()?;
        self.visited.unmark(id);
        Some(id)
    }

    /// True if `id` is on the path.
    pub fn contains(&self, id: ChipId) -> bool {
        self.visited.contains(id)
    }

    /// Copy out the path as it stands.
    pub fn snapshot(&self) -> Path {
        Path::from(self.entries.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
