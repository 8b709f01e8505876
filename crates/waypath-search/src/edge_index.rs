use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::{Result, SearchError};
use crate::graph::{Cost, Graph};

/// An outgoing edge as seen from its source slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OutEdge {
    pub(crate) to: usize,
    pub(crate) cost: Cost,
}

/// Outgoing edges grouped by source node.
///
/// Every distinct node gets a dense *slot*. Edges are laid out in one
/// contiguous array grouped by source slot (input order kept within a
/// group), so looking up the edges of a node is a slice of that array.
/// The graph itself is left untouched.
#[derive(Debug)]
pub(crate) struct EdgeIndex<N> {
    nodes: Vec<N>,
    slots: FxHashMap<N, usize>,
    offsets: Vec<usize>,
    edges: Vec<OutEdge>,
}

impl<N: Copy + Eq + Hash> EdgeIndex<N> {
    pub(crate) fn build(graph: &Graph<N>) -> Result<Self> {
        let mut slots =
            FxHashMap::with_capacity_and_hasher(graph.nodes.len(), Default::default());
        let mut nodes = Vec::with_capacity(graph.nodes.len());
        for &n in &graph.nodes {
            slots.entry(n).or_insert_with(|| {
                nodes.push(n);
                nodes.len() - 1
            });
        }

        // Counting pass, then prefix sums give each source its run.
        let mut offsets = vec![0usize; nodes.len() + 1];
        let mut ends = Vec::with_capacity(graph.edges.len());
        for e in &graph.edges {
            let from = *slots.get(&e.from).ok_or(SearchError::UnknownNode("edge source"))?;
            let to = *slots.get(&e.to).ok_or(SearchError::UnknownNode("edge target"))?;
            offsets[from + 1] += 1;
            ends.push((from, to));
        }
        for i in 1..offsets.len() {
            offsets[i] += offsets[i - 1];
        }

        let mut cursor = offsets.clone();
        let mut edges = vec![OutEdge { to: 0, cost: 0 }; graph.edges.len()];
        for (e, &(from, to)) in graph.edges.iter().zip(&ends) {
            edges[cursor[from]] = OutEdge { to, cost: e.cost };
            cursor[from] += 1;
        }

        Ok(Self {
            nodes,
            slots,
            offsets,
            edges,
        })
    }

    /// Number of distinct nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn slot(&self, n: &N) -> Option<usize> {
        self.slots.get(n).copied()
    }

    #[inline]
    pub(crate) fn node(&self, slot: usize) -> N {
        self.nodes[slot]
    }

    /// Outgoing edges of the node in `slot`.
    #[inline]
    pub(crate) fn outgoing(&self, slot: usize) -> &[OutEdge] {
        &self.edges[self.offsets[slot]..self.offsets[slot + 1]]
    }
}
