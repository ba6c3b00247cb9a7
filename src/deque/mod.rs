//! `CenteredDeque` — a growable double-ended queue over one contiguous array.
//!
//! Elements occupy a single contiguous run of slots delimited by a `head` and
//! a `tail` cursor. When an end runs out of room the storage doubles, and when
//! it falls to a quarter full it halves. Every reallocation places the
//! elements in the middle of the new storage so both ends get the same
//! headroom, whichever end grows next.
//!
//! Performance Characteristics:
//! - Push/Pop at either end: amortized O(1)
//! - Access by index: O(1)
//! - Iteration: O(n) over a contiguous slice
//! - Memory: between `len` and `4 * len` slots once the deque has shrunk
//!
//! The deque has no interior mutability. Sharing it between threads for
//! mutation needs external synchronization such as a `Mutex`.

mod iter;
mod serde_impl;
mod stats;
pub(crate) mod storage;


pub use iter::{IntoIter, Iter, IterMut};
pub use stats::ResizeStats;

use crate::error::DequeError;
use core::fmt;
use storage::Slots;

/// A double-ended queue backed by a single resizable array.
pub struct CenteredDeque<T> {
    /// Backing storage. Only `head..tail` holds values.
    slots: Slots<T>,
    /// Index of the first occupied slot.
    head: usize,
    /// Index one past the last occupied slot.
    tail: usize,
    /// Number of elements.
    len: usize,
    stats: ResizeStats,
}

impl<T> CenteredDeque<T> {
    /// Creates an empty deque with capacity 1.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an empty deque with `capacity` slots.
    ///
    /// The empty range starts in the middle of the storage, so about
    /// `capacity / 2` pushes fit at either end before the first
    /// reallocation. A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let start = storage::centered_start(capacity, 0);
        Self {
            slots: storage::empty_slots(capacity),
            head: start,
            tail: start,
            len: 0,
            stats: ResizeStats::default(),
        }
    }

    /// Number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of slots.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Reallocation totals since construction.
    #[inline]
    pub fn stats(&self) -> ResizeStats {
        self.stats
    }

    #[inline(always)]
    fn occupied(&self) -> &[Option<T>] {
        &self.slots[self.head..self.tail]
    }

    #[inline(always)]
    fn occupied_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots[self.head..self.tail]
    }

    /// Returns a reference to the element at `index` from the front.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.occupied().get(index)?.as_ref()
    }

    /// Returns a mutable reference to the element at `index` from the front.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.occupied_mut().get_mut(index)?.as_mut()
    }

    /// Returns the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the front element mutably.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Returns the back element mutably.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.len.checked_sub(1)?;
        self.get_mut(last)
    }

    /// Moves the elements into fresh, centered storage of `new_capacity` slots.
    fn resize(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity();
        let slots = core::mem::take(&mut self.slots);
        let (slots, occupied) = storage::relocate(slots, self.head..self.tail, new_capacity);
        self.slots = slots;
        self.head = occupied.start;
        self.tail = occupied.end;
        self.stats.record(old_capacity, new_capacity, self.len);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            old_capacity,
            new_capacity,
            len = self.len,
            head = self.head,
            "relocated deque storage"
        );
    }

    /// Halves the storage once it is at most a quarter full.
    #[inline]
    fn shrink_if_sparse(&mut self) {
        let capacity = self.capacity();
        if !self.is_empty() && self.len <= capacity / 4 {
            self.resize(capacity / 2);
        }
    }

    /// Adds an element to the front.
    pub fn push_front(&mut self, value: T) {
        // From one full slot, doubling to two still leaves no room in front.
        while self.head == 0 {
            self.resize(self.capacity() * 2);
        }
        self.head -= 1;
        self.slots[self.head] = Some(value);
        self.len += 1;
        debug_assert_eq!(self.tail - self.head, self.len);
    }

    /// Adds an element to the back.
    pub fn push_back(&mut self, value: T) {
        if self.tail == self.capacity() {
            self.resize(self.capacity() * 2);
        }
        self.slots[self.tail] = Some(value);
        self.tail += 1;
        self.len += 1;
        debug_assert_eq!(self.tail - self.head, self.len);
    }

    /// Adds `item` to the front, rejecting `None`.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::InvalidArgument`] if `item` is `None`; the deque
    /// is left unchanged.
    pub fn try_push_front(&mut self, item: Option<T>) -> Result<(), DequeError> {
        let value = item.ok_or(DequeError::InvalidArgument)?;
        self.push_front(value);
        Ok(())
    }

    /// Adds `item` to the back, rejecting `None`.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::InvalidArgument`] if `item` is `None`; the deque
    /// is left unchanged.
    pub fn try_push_back(&mut self, item: Option<T>) -> Result<(), DequeError> {
        let value = item.ok_or(DequeError::InvalidArgument)?;
        self.push_back(value);
        Ok(())
    }

    /// Removes and returns the front element.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head += 1;
        self.len -= 1;
        self.shrink_if_sparse();
        value
    }

    /// Removes and returns the back element.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.tail -= 1;
        let value = self.slots[self.tail].take();
        self.len -= 1;
        self.shrink_if_sparse();
        value
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::Empty`] if there is nothing to remove.
    pub fn try_pop_front(&mut self) -> Result<T, DequeError> {
        self.pop_front().ok_or(DequeError::Empty)
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::Empty`] if there is nothing to remove.
    pub fn try_pop_back(&mut self) -> Result<T, DequeError> {
        self.pop_back().ok_or(DequeError::Empty)
    }

    /// Drops every element and returns to a single-slot storage.
    pub fn clear(&mut self) {
        let old_capacity = self.capacity();
        let stats = self.stats;
        *self = Self::new();
        self.stats = stats;
        if old_capacity != 1 {
            self.stats.record(old_capacity, 1, 0);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(old_capacity, "cleared deque");
    }

    /// Front-to-back iterator over shared references.
    ///
    /// The iterator borrows the deque, so the deque cannot be modified until
    /// the iterator is dropped.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.occupied())
    }

    /// Front-to-back iterator over mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.occupied_mut())
    }
}

impl<T> Default for CenteredDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CenteredDeque<T> {
    /// Copies the elements into fresh centered storage of the same capacity.
    /// The clone starts with zeroed statistics.
    fn clone(&self) -> Self {
        let capacity = self.capacity();
        let start = storage::centered_start(capacity, self.len);
        let mut slots = storage::empty_slots(capacity);
        slots[start..start + self.len].clone_from_slice(self.occupied());
        Self {
            slots,
            head: start,
            tail: start + self.len,
            len: self.len,
            stats: ResizeStats::default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CenteredDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for CenteredDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CenteredDeque<T> {}

impl<T> Extend<T> for CenteredDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for CenteredDeque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for CenteredDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> IntoIterator for CenteredDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.slots, self.head..self.tail)
    }
}

impl<'a, T> IntoIterator for &'a CenteredDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CenteredDeque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
