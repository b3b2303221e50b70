//! Error type for heap operations
//!
//! All public heap operations detect their contract violations before any
//! mutation takes place, so a returned error always leaves the heap exactly
//! as it was.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The key is already present in the heap; use
    /// [`change_priority`](crate::IndexedBinaryHeap::change_priority) to
    /// update an enqueued key
    DuplicateKey,
    /// The key is not present in the heap
    KeyNotFound,
    /// The heap contains no elements
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::DuplicateKey => {
                write!(f, "key is already present in the heap")
            }
            HeapError::KeyNotFound => {
                write!(f, "key is not present in the heap")
            }
            HeapError::Empty => {
                write!(f, "heap contains no elements")
            }
        }
    }
}

impl std::error::Error for HeapError {}
