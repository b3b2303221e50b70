//! Dijkstra's and A* pathfinding built on the indexed binary heap
//!
//! This module provides generic implementations of Dijkstra's shortest path
//! algorithm and A* search driven by the O(log n) `change_priority`
//! operation of [`IndexedBinaryHeap`], the decrease-key step that plain
//! binary heaps cannot do without an O(n) scan or stale duplicate entries.
//!
//! # Design
//!
//! The open set is an [`IndexedBinaryHeap`] keyed directly by node state, so
//! each discovered node appears in the frontier at most once and relaxation
//! updates it in place. Per-node metadata (cost from start, predecessor,
//! closed flag) lives in a fast hash map (using FxHash).
//!
//! Note: Dijkstra and A* are the same algorithm - A* just adds a heuristic
//! to guide the search. Dijkstra is A* with h(n) = 0.
//!
//! The node type carries its own goal context and implements `is_goal()` to
//! determine when the search should terminate.
//!
//! # Example
//!
//! ```rust
//! use indexed_binary_heap::pathfinding::{dijkstra, SearchNode};
//!
//! // Node carries its goal coordinates
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct GridPos { x: i32, y: i32, goal_x: i32, goal_y: i32 }
//!
//! impl SearchNode for GridPos {
//!     type Cost = u32;
//!
//!     fn successors(&self) -> Vec<(Self, Self::Cost)> {
//!         vec![
//!             (GridPos { x: self.x + 1, y: self.y, goal_x: self.goal_x, goal_y: self.goal_y }, 1),
//!             (GridPos { x: self.x - 1, y: self.y, goal_x: self.goal_x, goal_y: self.goal_y }, 1),
//!             (GridPos { x: self.x, y: self.y + 1, goal_x: self.goal_x, goal_y: self.goal_y }, 1),
//!             (GridPos { x: self.x, y: self.y - 1, goal_x: self.goal_x, goal_y: self.goal_y }, 1),
//!         ]
//!     }
//!
//!     fn is_goal(&self) -> bool {
//!         self.x == self.goal_x && self.y == self.goal_y
//!     }
//! }
//!
//! let start = GridPos { x: 0, y: 0, goal_x: 2, goal_y: 2 };
//!
//! let result = dijkstra(&start);
//! assert!(result.is_some());
//! let (path, cost) = result.unwrap();
//! assert_eq!(cost, 4); // Manhattan distance
//! assert_eq!(path.len(), 5);
//! ```

use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use std::ops::Add;

use crate::indexed_binary::IndexedBinaryHeap;

/// Trait for types that can be used as costs in pathfinding algorithms.
///
/// This requires the type to be orderable, copyable, and support addition.
/// It also requires a zero value for initialization.
pub trait Cost: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// Trait for nodes in a search graph.
///
/// Implement this trait for your node type to use Dijkstra's or A*
/// algorithms. The node type must be hashable and cloneable because node
/// states key both the frontier heap and the metadata map.
///
/// The node carries all context needed to:
/// - Generate successors
/// - Check if it's a goal
/// - (Optionally) compute heuristics for A*
pub trait SearchNode: Clone + Eq + Hash {
    /// The cost type for edge weights (e.g., u32, u64)
    type Cost: Cost;

    /// Returns all successor nodes along with the cost to reach them.
    ///
    /// This is where you define your graph structure. Each call should
    /// return all neighbors reachable from this node along with their edge
    /// costs.
    fn successors(&self) -> Vec<(Self, Self::Cost)>;

    /// Returns true if this node is a goal state.
    fn is_goal(&self) -> bool;
}

/// Trait for nodes that can provide a heuristic estimate for A* search.
///
/// The heuristic must be admissible (never overestimate the true cost)
/// for A* to find optimal paths.
pub trait AStarNode: SearchNode {
    /// Returns a heuristic estimate of the cost from this node to any goal.
    ///
    /// Common heuristics include Manhattan distance for grid movement and
    /// zero (which reduces A* to Dijkstra's algorithm).
    fn heuristic(&self) -> Self::Cost;
}

/// Metadata stored for each discovered node during search.
struct NodeMeta<N: SearchNode> {
    /// Cost from start to this node (g-score)
    g_score: N::Cost,
    /// Previous node in the path (for reconstruction)
    came_from: Option<N>,
    /// Whether this node has been fully processed
    closed: bool,
}

/// Runs Dijkstra's algorithm from the start node until `is_goal()` returns
/// true.
///
/// # Returns
/// - `Some((path, cost))` if a path is found; the path runs from `start` to
///   the goal inclusive
/// - `None` if no path exists
pub fn dijkstra<N: SearchNode>(start: &N) -> Option<(Vec<N>, N::Cost)> {
    search_impl(start, |_| N::Cost::default())
}

/// Runs A* search from the start node until `is_goal()` returns true.
///
/// Uses the node's `heuristic()` method to guide the search. With an
/// admissible heuristic the returned path has the same cost Dijkstra would
/// find, usually after settling fewer nodes.
pub fn astar<N: AStarNode>(start: &N) -> Option<(Vec<N>, N::Cost)> {
    search_impl(start, |n| n.heuristic())
}

/// Internal search implementation.
///
/// The frontier holds f-scores (g + h; h is zero for Dijkstra). Settled
/// nodes are marked closed and never re-expanded.
fn search_impl<N: SearchNode>(
    start: &N,
    heuristic: impl Fn(&N) -> N::Cost,
) -> Option<(Vec<N>, N::Cost)> {
    let mut open: IndexedBinaryHeap<N, N::Cost> = IndexedBinaryHeap::new();
    let mut meta: FxHashMap<N, NodeMeta<N>> = FxHashMap::default();

    meta.insert(
        start.clone(),
        NodeMeta {
            g_score: N::Cost::default(),
            came_from: None,
            closed: false,
        },
    );
    // The frontier is empty, so the insert cannot collide.
    let _ = open.insert(heuristic(start), start.clone());

    while let Ok(current) = open.extract() {
        let entry = meta.get_mut(&current).unwrap();
        entry.closed = true;
        let current_g = entry.g_score;

        if current.is_goal() {
            return Some((reconstruct_path(&meta, &current), current_g));
        }

        for (neighbor, edge_cost) in current.successors() {
            let tentative_g = current_g + edge_cost;

            match meta.entry(neighbor.clone()) {
                Entry::Occupied(mut occupied) => {
                    let neighbor_entry = occupied.get_mut();
                    if neighbor_entry.closed || tentative_g >= neighbor_entry.g_score {
                        continue;
                    }
                    neighbor_entry.g_score = tentative_g;
                    neighbor_entry.came_from = Some(current.clone());
                    let f = tentative_g + heuristic(&neighbor);
                    // A discovered, non-closed node is always in the frontier.
                    let _ = open.change_priority(&neighbor, f);
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(NodeMeta {
                        g_score: tentative_g,
                        came_from: Some(current.clone()),
                        closed: false,
                    });
                    let f = tentative_g + heuristic(&neighbor);
                    let _ = open.insert(f, neighbor);
                }
            }
        }
    }

    None
}

/// Reconstructs the start-to-goal path by walking predecessor links.
fn reconstruct_path<N: SearchNode>(meta: &FxHashMap<N, NodeMeta<N>>, goal: &N) -> Vec<N> {
    let mut path = vec![goal.clone()];
    let mut current = goal;

    while let Some(prev) = meta.get(current).and_then(|entry| entry.came_from.as_ref()) {
        path.push(prev.clone());
        current = prev;
    }

    path.reverse();
    path
}
