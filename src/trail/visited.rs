// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Visited set with scoped marks.
//!
//! A chip is marked while it is on the path being explored, and unmarked as
//! soon as the search backs out of it, so a sibling branch may use it again.
//! [`Visited::enter`] hands back a [`Mark`] guard which unmarks the chip when
//! dropped. Every exit from an expansion (normal return, early return or an
//! unwinding panic) therefore releases the mark before the caller moves on to
//! the next sibling.
//!
//! # Example
//!
//! ```
//! use chip_search::trail::Visited;
//!
//! let mut visited = Visited::new(3);
//! {
//!     let mut mark = visited.enter(0);
//!     assert!(mark.contains(0));
//!     {
//!         let inner = mark.enter(2);
//!         assert_eq!(inner.len(), 2);
//!     }
//!     assert!(!mark.contains(2));
//! }
//! assert!(visited.is_empty());
//! ```

use crate::chips::ChipId;
use std::ops::{Deref, DerefMut};

/// Chips currently on the in-progress path.
///
/// Owned by exactly one in-flight expansion; never shared between starting
/// chips.
#[derive(Debug, Clone)]
pub struct Visited {
    marks: Vec<bool>,
    count: usize,
}

impl Visited {
    /// Create an empty visited set for a collection of `chip_count` chips.
    pub fn new(chip_count: usize) -> Self {
        Self {
            marks: vec![false; chip_count],
            count: 0,
        }
    }

    pub fn contains(&self, id: ChipId) -> bool {
        self.marks[id]
    }

    /// Number of marked chips (the depth of the current path).
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Mark `id` for the lifetime of the returned guard.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `id` is already marked; that would mean the
    /// search tried to reuse a chip within one path.
    pub fn enter(&mut self, id: ChipId) -> Mark<'_> {
        self.mark(id);
        Mark { visited: self, id }
    }

    /// Mark `id` without a guard. Pair with [`Visited::unmark`].
    pub fn mark(&mut self, id: ChipId) {
        debug_assert!(!self.marks[id], "chip {} is already on the path", id);
        self.marks[id] = true;
        self.count += 1;
    }

    pub fn unmark(&mut self, id: ChipId) {
        debug_assert!(self.marks[id], "chip {} is not on the path", id);
        self.marks[id] = false;
        self.count -= 1;
    }
}

/// Guard returned by [`Visited::enter`]. Unmarks its chip on drop.
///
/// Dereferences to the underlying [`Visited`] so that nested expansions can
/// enter further chips through it.
#[derive(Debug)]
pub struct Mark<'a> {
    visited: &'a mut Visited,
    id: ChipId,
}

impl Deref for Mark<'_> {
    type Target = Visited;

    fn deref(&self) -> &Visited {
        self.visited
    }
}

impl DerefMut for Mark<'_> {
    fn deref_mut(&mut self) -> &mut Visited {
        self.visited
    }
}

impl Drop for Mark<'_> {
    fn drop(&mut self) {
        self.visited.unmark(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let visited = Visited::new(4);
        assert!(visited.is_empty());
        assert!((0..4).all(|id| !visited.contains(id)));
    }

    #[test]
    fn test_mark_unmark() {
        let mut visited = Visited::new(2);
        visited.mark(1);
        assert!(visited.contains(1));
        assert_eq!(visited.len(), 1);
        visited.unmark(1);
        assert!(visited.is_empty());
    }

    #[test]
    fn test_guard_releases_on_scope_exit() {
        let mut visited = Visited::new(3);
        {
            let mut outer = visited.enter(1);
            assert_eq!(outer.len(), 1);
            {
                let inner = outer.enter(0);
                assert!(inner.contains(0));
                assert!(inner.contains(1));
            }
            assert!(!outer.contains(0));
            assert!(outer.contains(1));
        }
        assert!(visited.is_empty());
    }

    #[test]
    fn test_guard_releases_on_early_return() {
        fn leave_early(visited: &mut Visited, id: ChipId) -> bool {
            let mark = visited.enter(id);
            if mark.contains(id) {
                return true;
            }
            false
        }

        let mut visited = Visited::new(2);
        assert!(leave_early(&mut visited, 1));
        assert!(!visited.contains(1));
    }

    #[test]
    fn test_sibling_may_reuse_chip() {
        let mut visited = Visited::new(3);
        let mut root = visited.enter(0);
        for _ in 0..2 {
            let child = root.enter(2);
            assert!(child.contains(2));
        }
        assert!(!root.contains(2));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "already on the path")]
    fn test_double_mark_panics_in_debug() {
        let mut visited = Visited::new(1);
        visited.mark(0);
        visited.mark(0);
    }
}
