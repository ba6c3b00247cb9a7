//! Iterators over a [`CenteredDeque`](super::CenteredDeque).

use crate::error::DequeError;
use core::iter::FusedIterator;
use core::ops::Range;
use core::slice;
use std::vec;

/// Borrowing front-to-back iterator, created by
/// [`CenteredDeque::iter`](super::CenteredDeque::iter).
///
/// It walks the occupied slots as they were when it was created. The shared
/// borrow it holds keeps the deque from being modified in the meantime, and a
/// finished iterator cannot be restarted.
#[derive(Debug)]
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(super) fn new(occupied: &'a [Option<T>]) -> Self {
        Self {
            slots: occupied.iter(),
        }
    }

    /// Returns `true` while elements remain.
    #[inline]
    pub fn has_next(&self) -> bool {
        !self.slots.as_slice().is_empty()
    }

    /// Returns the next element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::NoMoreElements`] once the iterator is exhausted.
    #[inline]
    pub fn try_next(&mut self) -> Result<&'a T, DequeError> {
        self.next().ok_or(DequeError::NoMoreElements)
    }

    /// Removal through the iterator is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`DequeError::Unsupported`].
    #[inline]
    #[allow(clippy::unused_self)]
    pub fn remove(&mut self) -> Result<(), DequeError> {
        Err(DequeError::Unsupported)
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_ref)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable front-to-back iterator, created by
/// [`CenteredDeque::iter_mut`](super::CenteredDeque::iter_mut).
#[derive(Debug)]
pub struct IterMut<'a, T> {
    slots: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> IterMut<'a, T> {
    #[inline]
    pub(super) fn new(occupied: &'a mut [Option<T>]) -> Self {
        Self {
            slots: occupied.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_mut)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_mut)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning front-to-back iterator, created by consuming the deque.
#[derive(Debug)]
pub struct IntoIter<T> {
    slots: vec::IntoIter<Option<T>>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(slots: Box<[Option<T>]>, occupied: Range<usize>) -> Self {
        let mut slots = slots.into_vec();
        slots.truncate(occupied.end);
        slots.drain(..occupied.start);
        Self {
            slots: slots.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.slots.next().flatten()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.slots.next_back().flatten()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
