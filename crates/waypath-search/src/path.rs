/// Ordered node sequence from the begin node to the end node, inclusive.
///
/// Never empty: a search whose begin and end coincide yields a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<N> {
    steps: Vec<N>,
}

impl<N> Path<N> {
    pub(crate) fn from_steps(steps: Vec<N>) -> Self {
        debug_assert!(!steps.is_empty());
        Self { steps }
    }

    /// Number of nodes on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn steps(&self) -> &[N] {
        &self.steps
    }

    #[inline]
    pub fn first(&self) -> Option<&N> {
        self.steps.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&N> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.steps.iter()
    }

    pub fn into_vec(self) -> Vec<N> {
        self.steps
    }
}

impl<N> IntoIterator for Path<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Result of a search that was allowed to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<N> {
    Found(Path<N>),
    /// The frontier ran dry before the end node was reached.
    NoPath,
}

impl<N> SearchOutcome<N> {
    /// Path length, or `0` when there is no path.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Found(p) => p.len(),
            Self::NoPath => 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn path(&self) -> Option<&Path<N>> {
        match self {
            Self::Found(p) => Some(p),
            Self::NoPath => None,
        }
    }

    pub fn into_path(self) -> Option<Path<N>> {
        match self {
            Self::Found(p) => Some(p),
            Self::NoPath => None,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let p = Path::from_steps(vec![4u8, 5, 6]);
        let json = serde_json::to_string(&p).unwrap();
        let back: Path<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
