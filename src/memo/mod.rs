// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! Lookup tables built once from the chip collection before the search
//! starts, and never changed while it runs:
//! - AdjacencyIndex: chips grouped by start color and by end color

pub mod adjacency;

pub use adjacency::AdjacencyIndex;
