//! Generic A* shortest-path search.
//!
//! The search runs over any caller-supplied directed [`Graph`] whose nodes
//! are plain identities (`Copy + Eq + Hash`). Costs come from a
//! [`CostModel`] and progress can be watched through an [`Observer`]:
//!
//! - [`find_shortest_path`] / [`find_shortest_path_with`] run one search and
//!   return a [`SearchOutcome`].
//! - [`Frontier`] is the ordered container used as the open set; it is also
//!   usable on its own as a sorted list or a plain queue.
//!
//! Every call owns its scratch state (edge index, per-node costs, frontier)
//! and drops it before returning, so searches never interfere with each
//! other and the graph is only read.
//!
//! # Tie-breaking
//!
//! Nodes with equal `f` leave the frontier in the order they entered it, and
//! a node already waiting in the frontier is never re-relaxed. Results are
//! therefore fully deterministic for a given graph and cost model.

mod astar;
mod edge_index;
mod error;
mod frontier;
mod graph;
mod path;
mod state;
mod traits;

pub use astar::{CostMode, SearchOptions, find_shortest_path, find_shortest_path_with};
pub use error::SearchError;
pub use frontier::{Frontier, Identity};
pub use graph::{Cost, Edge, Graph, INFINITE_COST};
pub use path::{Path, SearchOutcome};
pub use traits::{CostModel, FnCosts, Observer, Progress, Role};
