//! Indexed Binary Min-Heap for Rust
//!
//! This crate provides a binary min-heap augmented with a bidirectional
//! key↔position index, giving O(log n) priority updates for keys that are
//! already enqueued: the decrease/increase-key operation needed by
//! algorithms such as Dijkstra's shortest path and Prim's MST.
//!
//! # Features
//!
//! - **Keyed operations**: every element is addressed by a caller-supplied
//!   unique key; no handles to store or invalidate
//! - **`change_priority`**: O(log n) reprioritization in either direction,
//!   located through the key→index map instead of an O(n) scan
//! - **Recoverable errors**: duplicate inserts, missing keys and empty-heap
//!   reads return [`HeapError`] values before any mutation happens
//! - **Diagnostics**: read-only views of the internal structures plus an
//!   O(n) `verify_internal_structure` check, for tests and debugging
//! - **Pathfinding**: generic Dijkstra and A* in [`pathfinding`], driven by
//!   the heap's decrease-key support
//!
//! # Example
//!
//! ```rust
//! use indexed_binary_heap::IndexedBinaryHeap;
//!
//! let mut heap = IndexedBinaryHeap::new();
//! heap.insert(5, "item1").unwrap();
//! heap.insert(3, "item2").unwrap();
//! heap.change_priority(&"item1", 1).unwrap();
//! assert_eq!(heap.peek(), Ok(&"item1"));
//! ```

pub mod error;
pub mod indexed_binary;
pub mod pathfinding;

// Re-export the main types for convenience
pub use error::HeapError;
pub use indexed_binary::IndexedBinaryHeap;
