//! Grid boards for waypath: cells, barriers and start/end points, turned
//! into a [`waypath_search::Graph`] of [`Point`](waypath_core::Point) nodes.

pub mod barrier;
pub mod board;
pub mod distance;
mod graph;

pub use barrier::{BarrierSpec, BarrierSpecError};
pub use board::{Board, CellFlags, MAX_BARRIER_RATIO};
pub use distance::{GridCosts, distance};
