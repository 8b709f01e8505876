//! Error type for rejected searches.

use thiserror::Error;

use crate::graph::Cost;

/// Why a search was rejected before it ran.
///
/// Exhausting the frontier without reaching `end` is not an error; it is
/// reported as [`SearchOutcome::NoPath`](crate::SearchOutcome::NoPath).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("graph has no begin node")]
    MissingBegin,

    #[error("graph has no end node")]
    MissingEnd,

    #[error("edge {index} has negative cost {cost}")]
    NegativeCost { index: usize, cost: Cost },

    #[error("{0} is not one of the graph's nodes")]
    UnknownNode(&'static str),
}

impl SearchError {
    /// Negative status code for callers that report results as a single
    /// integer (path length, `0` for no path, negative for bad input).
    #[inline]
    pub const fn code(&self) -> i32 {
        -1
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
