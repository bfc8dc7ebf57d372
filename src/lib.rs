// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Longest chain search over color chips.
//!
//! A chip joins a start color to an end color. Given a collection of chips,
//! a start color and an end color, the search finds the longest sequence of
//! distinct chips where the first starts with the start color, each chip's
//! start color equals the previous chip's end color, and the last ends with
//! the end color. Chips are identified by position: two chips with the same
//! colors are different chips.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Read-only for the duration of one search:
//! - The chip collection
//! - The adjacency index (chips by start color and by end color)
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Owned by one search and never shared:
//! - Visited set / trail - chips on the current path, released on backtrack
//! - Statistics - work counters
//!
//! # Search Algorithm
//!
//! Exhaustive depth-first backtracking from every chip that starts with the
//! start color. Three strategies give the same answers:
//!
//! 1. **Indexed**: recursive, next chips from the adjacency index
//! 2. **Unindexed**: recursive, next chips by scanning every chip
//! 3. **FrameBased**: indexed, with an explicit trail and frame stack
//!
//! The first longest path found wins ties, so every search is deterministic.
//!
//! # Example
//!
//! ```
//! use chip_search::{find_longest_path, Chip, Color, Variant};
//!
//! let chips: Vec<Chip> = ["Blue:Yellow", "Red:Green", "Yellow:Red", "Orange:Purple"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//!
//! let path = find_longest_path(&chips, Color::Blue, Color::Green, Variant::FrameBased);
//! assert_eq!(path.ids(), &[0, 2, 1]);
//! assert!(path.validate(&chips, Color::Blue, Color::Green).is_ok());
//! ```

pub mod chips;
pub mod context;
pub mod engine;
pub mod error;
pub mod memo;
pub mod report;
pub mod samples;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use chips::{Chip, ChipId, Color, Path};
pub use context::SearchContext;
pub use engine::{find_longest_path, PathSearch, SearchEngine, Variant};
pub use error::ChipError;
pub use memo::AdjacencyIndex;
