use crate::graph::Cost;

/// Movement cost and heuristic used by the search.
///
/// Both functions must be total, deterministic and non-negative. Whatever
/// context they need is carried by the implementing value.
pub trait CostModel<N> {
    /// Cost of moving from `from` to its neighbour `to`, added to the edge's
    /// own cost.
    fn step_cost(&self, from: &N, to: &N) -> Cost;

    /// Estimated remaining cost from `from` to `to`. Admissibility is the
    /// caller's concern.
    fn estimate(&self, from: &N, to: &N) -> Cost;
}

/// [`CostModel`] built from two closures.
#[derive(Debug, Clone, Copy)]
pub struct FnCosts<G, H> {
    pub step: G,
    pub estimate: H,
}

impl<G, H> FnCosts<G, H> {
    pub const fn new(step: G, estimate: H) -> Self {
        Self { step, estimate }
    }
}

impl<N, G, H> CostModel<N> for FnCosts<G, H>
where
    G: Fn(&N, &N) -> Cost,
    H: Fn(&N, &N) -> Cost,
{
    #[inline]
    fn step_cost(&self, from: &N, to: &N) -> Cost {
        (self.step)(from, to)
    }

    #[inline]
    fn estimate(&self, from: &N, to: &N) -> Cost {
        (self.estimate)(from, to)
    }
}

/// Which node a progress notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The node just taken from the frontier.
    Current,
    /// A neighbour of the current node being considered for relaxation.
    Analyzed,
}

/// Snapshot handed to an [`Observer`] during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress<N> {
    /// Number of nodes taken from the frontier so far.
    pub frame: u64,
    /// Estimate from `current` to the end node.
    pub current_distance: Cost,
    /// Estimate from the begin node to the end node, taken once at start.
    pub max_distance: Cost,
    pub current: N,
    /// Equal to `current` for [`Role::Current`] notifications.
    pub analyzed: N,
    pub role: Role,
}

/// Receives progress notifications synchronously from inside the search.
///
/// Notifications cannot influence the search: there is nothing to return.
pub trait Observer<N> {
    fn on_progress(&mut self, progress: &Progress<N>);
}

impl<N, F> Observer<N> for F
where
    F: FnMut(&Progress<N>),
{
    #[inline]
    fn on_progress(&mut self, progress: &Progress<N>) {
        self(progress)
    }
}
