// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error type for the chip search.
//!
//! The search itself never fails: a missing path is an empty [`Path`](crate::Path).
//! These errors come from parsing caller input and from validating a path.

use crate::chips::{Chip, ChipId, Color};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChipError {
    #[error("unknown color '{0}' (expected one of Red, Green, Blue, Yellow, Orange, Purple)")]
    UnknownColor(String),

    #[error("malformed chip '{0}' (expected START:END, e.g. Blue:Green)")]
    MalformedChip(String),

    #[error("unknown search variant '{0}' (expected indexed, unindexed or frames)")]
    UnknownVariant(String),

    #[error("unknown sample '{0}'")]
    UnknownSample(String),

    /// A path refers to a chip outside the collection.
    #[error("chip {id} is out of range for {len} chips")]
    ChipOutOfRange { id: ChipId, len: usize },

    /// A path uses the same chip twice.
    #[error("chip {id} is used more than once")]
    RepeatedChip { id: ChipId },

    #[error("path starts with {found}, expected {expected}")]
    WrongStart { expected: Color, found: Color },

    #[error("path ends with {found}, expected {expected}")]
    WrongEnd { expected: Color, found: Color },

    /// Chips at `position` and `position + 1` do not join.
    #[error("chip {left} at position {position} does not connect to {right}")]
    BrokenChain {
        position: usize,
        left: Chip,
        right: Chip,
    },
}
