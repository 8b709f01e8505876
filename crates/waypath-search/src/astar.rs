use std::hash::Hash;

use crate::edge_index::EdgeIndex;
use crate::error::{Result, SearchError};
use crate::frontier::{Frontier, Identity};
use crate::graph::{Cost, Graph};
use crate::path::{Path, SearchOutcome};
use crate::state::StateTable;
use crate::traits::{CostModel, Observer, Progress, Role};

/// How the tentative cost of a neighbour is formed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CostMode {
    /// `step_cost(current, neighbour) + edge cost`. The begin node is not
    /// seeded; it is expanded first because it is alone in the frontier.
    #[default]
    Step,
    /// `g(current) + step_cost(current, neighbour) + edge cost`, with the
    /// begin node seeded at `g = 0`, `h = estimate(begin, end)`.
    Cumulative,
}

/// Knobs for [`find_shortest_path_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub cost_mode: CostMode,
}

impl SearchOptions {
    /// Set the cost mode (builder).
    pub const fn with_cost_mode(mut self, cost_mode: CostMode) -> Self {
        self.cost_mode = cost_mode;
        self
    }
}

/// Frontier entry: a node slot and the `f` it was queued with.
///
/// Open nodes are never relaxed again, so the cached `f` stays accurate for
/// as long as the entry is queued.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    slot: usize,
    f: Cost,
}

impl OpenEntry {
    /// Entry used only for identity lookups.
    #[inline]
    fn probe(slot: usize) -> Self {
        Self { slot, f: 0 }
    }
}

impl Identity for OpenEntry {
    #[inline]
    fn is_same(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

/// Compute a path from `graph.begin` to `graph.end` using A* with the
/// default [`SearchOptions`].
///
/// `observer`, if given, is called once for every node taken from the
/// frontier and once for every neighbour considered.
///
/// Returns [`SearchOutcome::Found`] with the path (both endpoints
/// included), [`SearchOutcome::NoPath`] if `end` cannot be reached, or an
/// error if the graph is malformed.
pub fn find_shortest_path<N, M>(
    graph: &Graph<N>,
    costs: &M,
    observer: Option<&mut dyn Observer<N>>,
) -> Result<SearchOutcome<N>>
where
    N: Copy + Eq + Hash,
    M: CostModel<N> + ?Sized,
{
    find_shortest_path_with(graph, costs, observer, SearchOptions::default())
}

/// [`find_shortest_path`] with explicit [`SearchOptions`].
pub fn find_shortest_path_with<N, M>(
    graph: &Graph<N>,
    costs: &M,
    mut observer: Option<&mut dyn Observer<N>>,
    options: SearchOptions,
) -> Result<SearchOutcome<N>>
where
    N: Copy + Eq + Hash,
    M: CostModel<N> + ?Sized,
{
    let (begin, end) = validate(graph)?;

    let index = EdgeIndex::build(graph)?;
    let begin_slot = index.slot(&begin).ok_or(SearchError::UnknownNode("begin"))?;
    let end_slot = index.slot(&end).ok_or(SearchError::UnknownNode("end"))?;
    log::debug!(
        "a* search over {} nodes, {} edges ({:?})",
        index.len(),
        graph.edges.len(),
        options.cost_mode
    );

    let mut states = StateTable::new(index.len());
    let max_distance = costs.estimate(&begin, &end);
    if options.cost_mode == CostMode::Cumulative {
        states.seed(begin_slot, 0, max_distance);
    }

    let mut progress = Progress {
        frame: 0,
        current_distance: max_distance,
        max_distance,
        current: begin,
        analyzed: begin,
        role: Role::Current,
    };

    let mut open = Frontier::ordered_by(|a: &OpenEntry, b: &OpenEntry| a.f.cmp(&b.f));
    open.insert_ordered(OpenEntry {
        slot: begin_slot,
        f: states.get(begin_slot).f,
    });

    let mut expanded = 0usize;
    let found = loop {
        let Some(OpenEntry { slot: cur, .. }) = open.pop_front() else {
            break false;
        };
        let cur_node = index.node(cur);

        if let Some(obs) = observer.as_deref_mut() {
            progress.frame += 1;
            progress.current_distance = costs.estimate(&cur_node, &end);
            progress.current = cur_node;
            progress.analyzed = cur_node;
            progress.role = Role::Current;
            obs.on_progress(&progress);
        }

        states.close(cur);
        expanded += 1;

        if cur == end_slot {
            break true;
        }

        let base = match options.cost_mode {
            CostMode::Step => 0,
            CostMode::Cumulative => states.get(cur).g,
        };

        for edge in index.outgoing(cur) {
            let next = edge.to;
            if states.is_closed(next) || open.exists(&OpenEntry::probe(next)) {
                continue;
            }
            let next_node = index.node(next);

            if let Some(obs) = observer.as_deref_mut() {
                progress.analyzed = next_node;
                progress.role = Role::Analyzed;
                obs.on_progress(&progress);
            }

            let g = base
                .saturating_add(costs.step_cost(&cur_node, &next_node))
                .saturating_add(edge.cost);
            if let Some(f) = states.relax(next, g, || costs.estimate(&next_node, &end), cur) {
                log::trace!("a* open slot {next} with f = {f}");
                open.insert_ordered(OpenEntry { slot: next, f });
            }
        }
    };

    if !found {
        log::debug!("a* search exhausted the frontier after {expanded} expansions");
        return Ok(SearchOutcome::NoPath);
    }

    let steps: Vec<N> = states
        .trace(end_slot)
        .into_iter()
        .map(|slot| index.node(slot))
        .collect();
    log::debug!(
        "a* search reached the end after {expanded} expansions, path of {} nodes",
        steps.len()
    );
    Ok(SearchOutcome::Found(Path::from_steps(steps)))
}

/// Reject malformed input before anything is allocated.
fn validate<N: Copy>(graph: &Graph<N>) -> Result<(N, N)> {
    let begin = graph.begin.ok_or(SearchError::MissingBegin)?;
    let end = graph.end.ok_or(SearchError::MissingEnd)?;
    if let Some((index, e)) = graph.edges.iter().enumerate().find(|(_, e)| e.cost < 0) {
        return Err(SearchError::NegativeCost {
            index,
            cost: e.cost,
        });
    }
    Ok((begin, end))
}
