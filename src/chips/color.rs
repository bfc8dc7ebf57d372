// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Color type for chip endpoints.
//!
//! Each chip joins a start color to an end color. The set of colors is closed
//! and small, so a color doubles as an array index into per-color tables
//! such as the [`AdjacencyIndex`](crate::memo::AdjacencyIndex).

use crate::error::ChipError;
use std::str::FromStr;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// Number of colors a chip endpoint can take.
pub const NCOLORS: usize = Color::COUNT;

/// A chip endpoint color.
///
/// Colors compare by identity only. The derived `repr(u8)` discriminant is
/// used for table lookups, never as an ordering between colors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCountMacro, EnumString,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
}

impl Color {
    /// Get the color as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self as usize
    }

    /// Iterate over every color, in declaration order.
    pub fn all() -> impl Iterator<Item = Color> {
        Color::iter()
    }

    /// Parse a color name, ignoring ASCII case.
    pub fn parse(name: &str) -> Result<Self, ChipError> {
        <Color as FromStr>::from_str(name.trim())
            .map_err(|_| ChipError::UnknownColor(name.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_count() {
        assert_eq!(NCOLORS, 6);
        assert_eq!(Color::all().count(), NCOLORS);
    }

    #[test]
    fn test_color_as_usize_is_dense() {
        let mut seen = [false; NCOLORS];
        for color in Color::all() {
            assert!(!seen[color.as_usize()]);
            seen[color.as_usize()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_color_parse() {
        assert_eq!(Color::parse("Blue").unwrap(), Color::Blue);
        assert_eq!(Color::parse("green").unwrap(), Color::Green);
        assert_eq!(Color::parse(" PURPLE ").unwrap(), Color::Purple);
    }

    #[test]
    fn test_color_parse_unknown() {
        assert_eq!(
            Color::parse("Magenta"),
            Err(ChipError::UnknownColor("Magenta".to_string()))
        );
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::Orange.to_string(), "Orange");
    }
}
