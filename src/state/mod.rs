// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, owned by one search).
//!
//! The per-path backtracking state lives in [`crate::trail`]; this module
//! holds the counters that accumulate over a whole search.

pub mod statistics;

pub use statistics::{Counters, Statistics};
