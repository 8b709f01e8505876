//! Caller-supplied graph description: [`Edge`] and [`Graph`].

/// Movement cost. Edge costs must be non-negative.
pub type Cost = i64;

/// Cost of a node that has not been reached yet.
pub const INFINITE_COST: Cost = Cost::MAX;

/// A directed, weighted edge. Several edges may join the same pair of nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<N> {
    pub from: N,
    pub to: N,
    pub cost: Cost,
}

impl<N> Edge<N> {
    #[inline]
    pub const fn new(from: N, to: N, cost: Cost) -> Self {
        Self { from, to, cost }
    }
}

/// Nodes, edges and the two endpoints of a search.
///
/// Nodes are opaque identities: the search only compares and hashes them.
/// `begin` and `end` are optional so that an incompletely built graph is
/// rejected by the search instead of being unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph<N> {
    pub nodes: Vec<N>,
    pub edges: Vec<Edge<N>>,
    pub begin: Option<N>,
    pub end: Option<N>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            begin: None,
            end: None,
        }
    }
}

impl<N: Copy> Graph<N> {
    /// Create an empty graph without endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both endpoints (builder).
    pub fn with_endpoints(mut self, begin: N, end: N) -> Self {
        self.begin = Some(begin);
        self.end = Some(end);
        self
    }

    /// Add a node. Nodes are expected to be unique; a repeated node keeps its
    /// first position.
    pub fn add_node(&mut self, n: N) -> &mut Self {
        self.nodes.push(n);
        self
    }

    /// Add a directed edge `from -> to`.
    pub fn add_edge(&mut self, from: N, to: N, cost: Cost) -> &mut Self {
        self.edges.push(Edge::new(from, to, cost));
        self
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn graph_round_trip() {
        let mut g = Graph::new().with_endpoints(1u32, 2);
        g.add_node(1).add_node(2);
        g.add_edge(1, 2, 10);
        let json = serde_json::to_string(&g).unwrap();
        let back: Graph<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
