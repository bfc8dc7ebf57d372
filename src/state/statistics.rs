// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are stored in the search context and incremented by the search
//! strategies as they run. They describe how much work a search did; they
//! never influence its result.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, Display, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Top-level searches started.
    Searches,
    /// Chips tried as the first chip of a path.
    StartingChips,
    /// Chips entered by an expansion (recursive call or pushed frame).
    Expansions,
    /// Chips inspected while looking for the next chip to enter.
    ChipsScanned,
    /// Points where the path so far ended in the target color.
    Candidates,
    /// Times the best path so far was replaced.
    Improvements,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Increment the specified counter by `n`.
    pub(crate) fn add(&mut self, counter: Counters, n: u64) {
        self.stats[counter as usize] += n;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

}

impl fmt::Display for Statistics {
    /// Format as "Searches=1 StartingChips=2 ...".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for counter in Counters::iter() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{}={}", counter, self.get(counter))?;
        }
        Ok(())
    }
}
