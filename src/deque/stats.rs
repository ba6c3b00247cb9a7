//! Reallocation counters.

use serde::{Deserialize, Serialize};

/// Running totals of the reallocations a deque has performed.
///
/// `moved` counts every element carried over into new storage, which is the
/// whole cost of resizing. Over any sequence of `n` operations starting from
/// an empty deque it stays within a constant factor of `n`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResizeStats {
    /// Reallocations that increased capacity.
    pub grows: u64,
    /// Reallocations that decreased capacity.
    pub shrinks: u64,
    /// Elements moved into new storage across all reallocations.
    pub moved: u64,
}

impl ResizeStats {
    /// Total number of reallocations.
    #[inline]
    pub fn reallocations(&self) -> u64 {
        self.grows + self.shrinks
    }

    pub(crate) fn record(&mut self, old_capacity: usize, new_capacity: usize, moved: usize) {
        if new_capacity > old_capacity {
            self.grows += 1;
        } else if new_capacity < old_capacity {
            self.shrinks += 1;
        }
        self.moved += moved as u64;
    }
}
