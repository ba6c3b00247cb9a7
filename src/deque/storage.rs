//! Slot storage and the centered resize policy.
//!
//! Storage is a boxed slice of `Option<T>` where `None` marks a free slot.
//! The occupied slots always form one contiguous range; [`relocate`] is the
//! only function that allocates a new slice.

use core::ops::Range;

/// Contiguous slot array backing a deque.
pub(crate) type Slots<T> = Box<[Option<T>]>;

/// Allocates `capacity` free slots.
pub(crate) fn empty_slots<T>(capacity: usize) -> Slots<T> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

/// Index of the first occupied slot when `len` elements are centered inside
/// `capacity` slots. An odd free slot goes to the back.
#[inline(always)]
pub(crate) const fn centered_start(capacity: usize, len: usize) -> usize {
    (capacity - len) / 2
}

/// Moves the `occupied` range of `slots` into `new_capacity` fresh slots,
/// re-centered, and returns the new storage together with its occupied range.
///
/// # Panics
///
/// Panics if `new_capacity` is zero or smaller than the number of occupied
/// slots. Callers inside the crate never request either.
pub(crate) fn relocate<T>(
    slots: Slots<T>,
    occupied: Range<usize>,
    new_capacity: usize,
) -> (Slots<T>, Range<usize>) {
    let len = occupied.len();
    assert!(
        new_capacity > 0 && new_capacity >= len,
        "relocate: capacity {new_capacity} cannot hold {len} elements"
    );

    let start = centered_start(new_capacity, len);
    let mut fresh = empty_slots(new_capacity);
    let moved = slots
        .into_vec()
        .into_iter()
        .skip(occupied.start)
        .take(len);
    for (dst, value) in fresh[start..start + len].iter_mut().zip(moved) {
        *dst = value;
    }

    (fresh, start..start + len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied_values(slots: &Slots<u32>) -> Vec<Option<u32>> {
        slots.iter().copied().collect()
    }

    #[test]
    fn centered_start_splits_free_space() {
        assert_eq!(centered_start(8, 4), 2);
        assert_eq!(centered_start(8, 3), 2);
        assert_eq!(centered_start(2, 0), 1);
        assert_eq!(centered_start(1, 1), 0);
    }

    #[test]
    fn relocate_grows_and_recenters() {
        let slots: Slots<u32> = vec![Some(1), Some(2)].into_boxed_slice();
        let (fresh, range) = relocate(slots, 0..2, 4);
        assert_eq!(range, 1..3);
        assert_eq!(occupied_values(&fresh), vec![None, Some(1), Some(2), None]);
    }

    #[test]
    fn relocate_shrinks_and_leaves_no_stale_slots() {
        let slots: Slots<u32> =
            vec![None, None, None, None, None, Some(7), None, None].into_boxed_slice();
        let (fresh, range) = relocate(slots, 5..6, 4);
        assert_eq!(range, 1..2);
        assert_eq!(occupied_values(&fresh), vec![None, Some(7), None, None]);
    }

    #[test]
    fn relocate_empty_range() {
        let slots: Slots<u32> = empty_slots(1);
        let (fresh, range) = relocate(slots, 0..0, 2);
        assert_eq!(range, 1..1);
        assert_eq!(fresh.len(), 2);
    }

    #[test]
    #[should_panic(expected = "cannot hold")]
    fn relocate_rejects_capacity_below_len() {
        let slots: Slots<u32> = vec![Some(1), Some(2), Some(3)].into_boxed_slice();
        let _ = relocate(slots, 0..3, 2);
    }

    #[test]
    #[should_panic(expected = "cannot hold")]
    fn relocate_rejects_zero_capacity() {
        let slots: Slots<u32> = empty_slots(1);
        let _ = relocate(slots, 0..0, 0);
    }
}
