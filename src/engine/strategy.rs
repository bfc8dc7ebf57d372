// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Strategy trait for the longest-path search.
//!
//! The engine owns the top-level loop over starting chips (see
//! [`SearchEngine`](super::SearchEngine)). A strategy only answers one
//! question: what is the longest answer among the paths that begin with a
//! given chip? Strategies differ in how they find the next chip and in how
//! they keep the path so far, never in the answer they give.
//!
//! # Example
//!
//! ```
//! use chip_search::chips::{Chip, ChipId, Color, Path};
//! use chip_search::context::SearchContext;
//! use chip_search::engine::PathSearch;
//! use chip_search::memo::AdjacencyIndex;
//!
//! /// Only ever considers the starting chip on its own.
//! #[derive(Debug)]
//! struct SingleChip;
//!
//! impl PathSearch for SingleChip {
//!     fn expand_from(&self, ctx: &mut SearchContext<'_>, start_chip: ChipId) -> Path {
//!         if ctx.is_terminal(start_chip) {
//!             Path::from(vec![start_chip])
//!         } else {
//!             Path::empty()
//!         }
//!     }
//! }
//!
//! let chips = vec![Chip::new(Color::Blue, Color::Green)];
//! let adjacency = AdjacencyIndex::build(&chips);
//! let mut ctx = SearchContext::new(&chips, &adjacency, Color::Blue, Color::Green);
//! assert_eq!(SingleChip.expand_from(&mut ctx, 0).ids(), &[0]);
//! ```

use crate::chips::{ChipId, Path};
use crate::context::SearchContext;
use std::fmt::Debug;

/// A way of expanding paths from one starting chip.
///
/// # Contract
///
/// `expand_from(ctx, start_chip)` returns the longest path that
/// - begins with `start_chip`,
/// - chains (each chip's start color is the previous chip's end color),
/// - never uses a chip twice,
/// - ends with a chip whose end color is `ctx.end`,
///
/// or the empty path if there is none. Among paths of equal maximal length it
/// returns the first one met in a depth-first walk that tries next chips in
/// ascending id order. Every implementation must agree exactly, so callers
/// can swap strategies freely.
///
/// The caller guarantees that `start_chip` is in range and starts with
/// `ctx.start`.
pub trait PathSearch: Debug {
    /// Longest answer among paths beginning with `start_chip`.
    fn expand_from(&self, ctx: &mut SearchContext<'_>, start_chip: ChipId) -> Path;

    /// Optional: Get a name for this strategy (for logging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
