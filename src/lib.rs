//! # `centered_deque` - Array-Backed Double-Ended Queue
//!
//! A generic double-ended queue stored in one contiguous, resizable array.
//! Pushes and pops at either end run in amortized constant time.
//!
//! ## Layout
//!
//! The elements always occupy a single contiguous run of slots, delimited by a
//! `head` and a `tail` cursor. Nothing wraps around:
//!
//! ```text
//!   capacity = 8, len = 3
//!   [ _ | _ | a | b | c | _ | _ | _ ]
//!           ^head       ^tail
//! ```
//!
//! ## Resizing
//!
//! - Pushing at an end with no free slot doubles the storage.
//! - Popping down to a quarter of the capacity halves it.
//! - Every reallocation re-centers the elements, so the free space on the two
//!   sides differs by at most one slot. A burst of pushes at either end finds
//!   the same headroom.
//!
//! Each doubling is paid for by the pushes since the previous reallocation and
//! each halving by the pops, so the elements moved by all reallocations stay
//! proportional to the number of operations. [`ResizeStats`] exposes the
//! running totals.
//!
//! ## Errors
//!
//! The infallible `push_*`/`pop_*` methods follow `std` conventions. The
//! `try_*` variants report violated preconditions as [`DequeError`] and leave
//! the deque untouched.
//!
//! ## Example
//!
//! ```rust
//! use centered_deque::CenteredDeque;
//!
//! let mut deque = CenteredDeque::new();
//! deque.push_front("one");
//! deque.push_back("two");
//! deque.push_back("three");
//! deque.push_front("four");
//!
//! let order: Vec<_> = deque.iter().copied().collect();
//! assert_eq!(order, ["four", "one", "two", "three"]);
//! assert_eq!(deque.pop_back(), Some("three"));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `trace` events for every reallocation.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![forbid(unsafe_code)]

pub mod deque;
pub mod error;

pub use deque::{CenteredDeque, IntoIter, Iter, IterMut, ResizeStats};
pub use error::DequeError;
