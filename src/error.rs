//! Error type shared by the fallible deque and iterator operations.

use core::fmt;

/// The error type for rejected deque operations.
///
/// A call that returns one of these has not modified the deque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DequeError {
    /// A `None` item was offered to `try_push_front` or `try_push_back`.
    InvalidArgument,
    /// An element was requested from an empty deque.
    Empty,
    /// The iterator was advanced past its last element.
    NoMoreElements,
    /// Removal through an iterator was attempted.
    Unsupported,
}

impl fmt::Display for DequeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidArgument => "cannot insert a missing item",
            Self::Empty => "deque is empty",
            Self::NoMoreElements => "iterator has no more elements",
            Self::Unsupported => "iterator does not support removal",
        })
    }
}

impl std::error::Error for DequeError {}
