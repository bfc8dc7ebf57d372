// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Chips: directed, color-labeled edges.
//!
//! A chip is identified by its position in the caller's collection, never by
//! its colors. Two chips with the same colors are two distinct resources, and
//! a path may use both of them.

use crate::chips::Color;
use crate::error::ChipError;
use std::fmt;
use std::str::FromStr;

/// Identifier of a chip: its index in the input collection.
pub type ChipId = usize;

/// A chip joining a start color to an end color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chip {
    pub start: Color,
    pub end: Color,
}

impl Chip {
    pub const fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    /// True if `next` may directly follow this chip in a path.
    pub fn connects_to(&self, next: &Chip) -> bool {
        self.end == next.start
    }
}

impl fmt::Display for Chip {
    /// Format a chip as "[Blue, Yellow]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl FromStr for Chip {
    type Err = ChipError;

    /// Parse "Start:End". A `-` or `>` separator is accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split([':', '-', '>']);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(start), Some(end), None) if !start.trim().is_empty() && !end.trim().is_empty() => {
                Ok(Chip::new(Color::parse(start)?, Color::parse(end)?))
            }
            _ => Err(ChipError::MalformedChip(s.to_string())),
        }
    }
}
