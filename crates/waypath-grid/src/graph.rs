//! Conversion of a [`Board`] into a search [`Graph`].

use waypath_core::Point;
use waypath_search::Graph;

use crate::board::{Board, CellFlags};

/// Neighbour offsets in visiting order: NW, N, NE, E, SE, S, SW, W.
/// The flag marks diagonal moves.
const DIRS: [(Point, bool); 8] = [
    (Point::new(-1, -1), true),
    (Point::new(0, -1), false),
    (Point::new(1, -1), true),
    (Point::new(1, 0), false),
    (Point::new(1, 1), true),
    (Point::new(0, 1), false),
    (Point::new(-1, 1), true),
    (Point::new(-1, 0), false),
];

impl Board {
    /// Open neighbours of `p`, in visiting order. Diagonals are included only
    /// with `cut_corners`.
    pub fn neighbors(&self, p: Point, cut_corners: bool) -> impl Iterator<Item = Point> + '_ {
        DIRS.iter()
            .filter(move |&&(_, diagonal)| cut_corners || !diagonal)
            .map(move |&(d, _)| p + d)
            .filter(move |&n| self.contains(n) && !self.is_barrier(n))
    }

    /// Every non-barrier cell becomes a node joined to its open neighbours.
    /// Edges carry no cost of their own; the step cost comes from
    /// [`GridCosts`](crate::GridCosts).
    pub fn to_graph(&self, cut_corners: bool) -> Graph<Point> {
        let mut graph = Graph::new().with_endpoints(self.start(), self.end());
        for (p, flags) in self.iter() {
            if flags.contains(CellFlags::BARRIER) {
                continue;
            }
            graph.add_node(p);
            for n in self.neighbors(p, cut_corners) {
                graph.add_edge(p, n, 0);
            }
        }
        log::debug!(
            "board {}x{} -> {} nodes, {} edges",
            self.rows(),
            self.columns(),
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }
}
