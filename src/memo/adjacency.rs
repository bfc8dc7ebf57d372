// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Adjacency index: chips grouped by color.
//!
//! For every color the index keeps two buckets of chip ids:
//! - **starting**: chips whose start color is this color. The search expands
//!   from a chip ending in color `c` to the chips in `c`'s starting bucket.
//! - **ending**: chips whose end color is this color. Only used for the
//!   feasibility check before a search begins.
//!
//! Every chip id lands in exactly one starting bucket and exactly one ending
//! bucket. Buckets hold ids in ascending order, which is what keeps the
//! indexed search's tie-break identical to a linear scan.
//!
//! # Example
//!
//! ```
//! use chip_search::chips::{Chip, Color};
//! use chip_search::memo::AdjacencyIndex;
//!
//! let chips = vec![
//!     Chip::new(Color::Blue, Color::Yellow),
//!     Chip::new(Color::Yellow, Color::Green),
//! ];
//! let index = AdjacencyIndex::build(&chips);
//! assert_eq!(index.starting_with(Color::Yellow), &[1]);
//! assert!(index.has_enders_for(Color::Green));
//! assert!(!index.has_starters_for(Color::Red));
//! ```

use crate::chips::{Chip, ChipId, Color, NCOLORS};

/// The two chip lists kept for one color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ColorBuckets {
    /// Chips whose start color is this color.
    starting: Vec<ChipId>,
    /// Chips whose end color is this color.
    ending: Vec<ChipId>,
}

/// Per-search lookup table from color to chip ids.
///
/// Built once per search and read-only afterwards. The index can be reused
/// across searches for as long as the chip collection it was built from is
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyIndex {
    buckets: [ColorBuckets; NCOLORS],
    chip_count: usize,
}

impl AdjacencyIndex {
    /// Build the index from a chip collection.
    ///
    /// An empty collection gives an index with every bucket empty.
    pub fn build(chips: &[Chip]) -> Self {
        let mut buckets: [ColorBuckets; NCOLORS] = Default::default();
        for (id, chip) in chips.iter().enumerate() {
            buckets[chip.start.as_usize()].starting.push(id);
            buckets[chip.end.as_usize()].ending.push(id);
        }
        Self {
            buckets,
            chip_count: chips.len(),
        }
    }

    /// Chips that start with `color`, in ascending id order.
    pub fn starting_with(&self, color: Color) -> &[ChipId] {
        &self.buckets[color.as_usize()].starting
    }

    /// Chips that end with `color`, in ascending id order.
    pub fn ending_with(&self, color: Color) -> &[ChipId] {
        &self.buckets[color.as_usize()].ending
    }

    pub fn has_starters_for(&self, color: Color) -> bool {
        !self.starting_with(color).is_empty()
    }

    pub fn has_enders_for(&self, color: Color) -> bool {
        !self.ending_with(color).is_empty()
    }

    /// Number of chips the index was built from.
    pub fn chip_count(&self) -> usize {
        self.chip_count
    }

    pub fn is_empty(&self) -> bool {
        self.chip_count == 0
    }
}
