// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Paths: ordered, non-repeating sequences of chip ids.
//!
//! A search returns a [`Path`]. An empty path is the "no path" answer; it is
//! a normal value, not an error.

use crate::chips::{Chip, ChipId, Color};
use crate::error::ChipError;
use std::fmt;

/// An ordered sequence of chip ids forming a chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<ChipId>);

impl Path {
    /// The empty path ("no path").
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> &[ChipId] {
        &self.0
    }

    pub fn first(&self) -> Option<ChipId> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<ChipId> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = ChipId> + '_ {
        self.0.iter().copied()
    }

    /// Build a path with `head` in front of `tail`.
    pub(crate) fn prefixed(head: ChipId, tail: Path) -> Self {
        let mut ids = Vec::with_capacity(tail.len() + 1);
        ids.push(head);
        ids.extend(tail.0);
        Self(ids)
    }

    /// The chips this path walks, in order.
    pub fn chips<'a>(&'a self, chips: &'a [Chip]) -> impl Iterator<Item = &'a Chip> + 'a {
        self.0.iter().map(move |&id| &chips[id])
    }

    /// Check that this path is a valid answer for `start` to `end` over `chips`.
    ///
    /// The empty path is always valid. A non-empty path must stay in range,
    /// never repeat a chip, begin at `start`, end at `end`, and chain.
    pub fn validate(&self, chips: &[Chip], start: Color, end: Color) -> Result<(), ChipError> {
        if self.is_empty() {
            return Ok(());
        }

        let mut used = vec![false; chips.len()];
        for &id in &self.0 {
            if id >= chips.len() {
                return Err(ChipError::ChipOutOfRange {
                    id,
                    len: chips.len(),
                });
            }
            if used[id] {
                return Err(ChipError::RepeatedChip { id });
            }
            used[id] = true;
        }

        let first = &chips[self.0[0]];
        if first.start != start {
            return Err(ChipError::WrongStart {
                expected: start,
                found: first.start,
            });
        }
        let last = &chips[self.0[self.0.len() - 1]];
        if last.end != end {
            return Err(ChipError::WrongEnd {
                expected: end,
                found: last.end,
            });
        }

        for (position, pair) in self.0.windows(2).enumerate() {
            let (left, right) = (chips[pair[0]], chips[pair[1]]);
            if !left.connects_to(&right) {
                return Err(ChipError::BrokenChain {
                    position,
                    left,
                    right,
                });
            }
        }
        Ok(())
    }

    /// Render the path as "Blue → [Blue, Yellow] → [Yellow, Green] → Green".
    pub fn render(&self, chips: &[Chip], start: Color, end: Color) -> String {
        let mut out = start.to_string();
        for chip in self.chips(chips) {
            out.push_str(" → ");
            out.push_str(&chip.to_string());
        }
        out.push_str(" → ");
        out.push_str(&end.to_string());
        out
    }
}

impl From<Vec<ChipId>> for Path {
    fn from(ids: Vec<ChipId>) -> Self {
        Self(ids)
    }
}

impl From<Path> for Vec<ChipId> {
    fn from(path: Path) -> Self {
        path.0
    }
}

impl fmt::Display for Path {
    /// Format as "[0, 2, 1]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
