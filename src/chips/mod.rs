// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Data model for the chip search.
//!
//! - Color: chip endpoint labels
//! - Chip: a directed edge from one color to another, identified by position
//! - Path: an ordered, non-repeating sequence of chip ids

pub mod chip;
pub mod color;
pub mod path;

pub use chip::{Chip, ChipId};
pub use color::{Color, NCOLORS};
pub use path::Path;
