use crate::graph::{Cost, INFINITE_COST};

/// Scratch bookkeeping for one node during one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodeState {
    pub(crate) g: Cost,
    pub(crate) h: Cost,
    pub(crate) f: Cost,
    pub(crate) predecessor: Option<usize>,
    pub(crate) closed: bool,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            g: INFINITE_COST,
            h: INFINITE_COST,
            f: INFINITE_COST,
            predecessor: None,
            closed: false,
        }
    }
}

/// Per-slot [`NodeState`] for every node of the graph being searched.
#[derive(Debug)]
pub(crate) struct StateTable {
    states: Vec<NodeState>,
}

impl StateTable {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            states: vec![NodeState::default(); len],
        }
    }

    #[inline]
    pub(crate) fn get(&self, slot: usize) -> &NodeState {
        &self.states[slot]
    }

    #[inline]
    pub(crate) fn is_closed(&self, slot: usize) -> bool {
        self.states[slot].closed
    }

    /// Mark a node as expanded. There is no way back.
    #[inline]
    pub(crate) fn close(&mut self, slot: usize) {
        self.states[slot].closed = true;
    }

    /// Give a node known costs without a predecessor (search seeds).
    pub(crate) fn seed(&mut self, slot: usize, g: Cost, h: Cost) {
        let s = &mut self.states[slot];
        s.g = g;
        s.h = h;
        s.f = g.saturating_add(h);
    }

    /// Offer a route of cost `g` to `slot` through `predecessor`.
    ///
    /// The route is taken if it is strictly cheaper, or equally cheap with a
    /// strictly smaller heuristic. `estimate` is only evaluated when `g` does
    /// not exceed the stored cost. Returns the new `f` on acceptance.
    pub(crate) fn relax(
        &mut self,
        slot: usize,
        g: Cost,
        estimate: impl FnOnce() -> Cost,
        predecessor: usize,
    ) -> Option<Cost> {
        let s = &mut self.states[slot];
        if g > s.g {
            return None;
        }
        let h = estimate();
        if g == s.g && h >= s.h {
            return None;
        }
        s.g = g;
        s.h = h;
        s.f = g.saturating_add(h);
        s.predecessor = Some(predecessor);
        Some(s.f)
    }

    /// Slots from the start of the predecessor chain to `end`, in order.
    pub(crate) fn trace(&self, end: usize) -> Vec<usize> {
        let mut steps = Vec::new();
        let mut cur = Some(end);
        while let Some(slot) = cur {
            steps.push(slot);
            cur = self.states[slot].predecessor;
        }
        steps.reverse();
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_unreached() {
        let t = StateTable::new(2);
        assert_eq!(*t.get(1), NodeState::default());
        assert_eq!(t.get(0).g, INFINITE_COST);
        assert!(!t.is_closed(0));
    }

    #[test]
    fn relax_accepts_cheaper_routes_only() {
        let mut t = StateTable::new(3);
        assert_eq!(t.relax(2, 10, || 4, 0), Some(14));
        assert_eq!(t.relax(2, 11, || 0, 1), None);
        assert_eq!(t.relax(2, 8, || 4, 1), Some(12));
        assert_eq!(t.get(2).predecessor, Some(1));
    }

    #[test]
    fn equal_cost_ties_prefer_smaller_estimate() {
        let mut t = StateTable::new(3);
        t.relax(2, 10, || 4, 0);
        assert_eq!(t.relax(2, 10, || 4, 1), None);
        assert_eq!(t.relax(2, 10, || 3, 1), Some(13));
        assert_eq!(t.get(2).h, 3);
    }

    #[test]
    fn estimate_skipped_for_worse_routes() {
        let mut t = StateTable::new(2);
        t.relax(1, 5, || 0, 0);
        let accepted = t.relax(1, 6, || panic!("estimate evaluated"), 0);
        assert!(accepted.is_none());
    }

    #[test]
    fn infinite_route_still_beats_unknown_estimate() {
        let mut t = StateTable::new(2);
        assert_eq!(t.relax(1, INFINITE_COST, || 3, 0), Some(INFINITE_COST));
        assert_eq!(t.get(1).h, 3);
    }

    #[test]
    fn trace_follows_predecessors() {
        let mut t = StateTable::new(4);
        t.relax(1, 1, || 0, 0);
        t.relax(3, 1, || 0, 1);
        t.relax(2, 1, || 0, 3);
        assert_eq!(t.trace(2), [0, 1, 3, 2]);
        assert_eq!(t.trace(0), [0]);
    }

    #[test]
    fn seed_sets_costs_without_predecessor() {
        let mut t = StateTable::new(1);
        t.seed(0, 0, 7);
        assert_eq!((t.get(0).g, t.get(0).h, t.get(0).f), (0, 7, 7));
        assert!(t.get(0).predecessor.is_none());
    }
}
