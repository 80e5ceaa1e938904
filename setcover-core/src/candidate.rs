//! Candidate sub-collections explored by the solvers.

use std::collections::BTreeSet;

use crate::{CoveringSet, ProblemInstance};

/// An immutable selection of covering sets, stored as collection indices.
///
/// Candidates never change in place: [`Candidate::with`] and
/// [`Candidate::toggled`] return new values. Members iterate in ascending
/// index order, which is the tie-break order used by both solvers.
///
/// # Examples
/// ```
/// use setcover_core::Candidate;
///
/// let empty = Candidate::empty();
/// let one = empty.toggled(2);
///
/// assert!(empty.is_empty());
/// assert!(one.contains(2));
/// assert!(one.toggled(2).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Candidate {
    members: BTreeSet<usize>,
}

impl Candidate {
    /// A candidate with no covering sets.
    pub const fn empty() -> Self {
        Self {
            members: BTreeSet::new(),
        }
    }

    /// Whether the set at `index` is part of the candidate.
    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    /// Number of covering sets in the candidate.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the candidate holds no covering sets.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().copied()
    }

    /// A new candidate that also contains `index`.
    #[must_use]
    pub fn with(&self, index: usize) -> Self {
        let mut members = self.members.clone();
        members.insert(index);
        Self { members }
    }

    /// A new candidate with membership of `index` flipped.
    #[must_use]
    pub fn toggled(&self, index: usize) -> Self {
        let mut members = self.members.clone();
        if !members.remove(&index) {
            members.insert(index);
        }
        Self { members }
    }

    /// Resolve the member indices against `problem`, in index order.
    ///
    /// Indices outside the collection are skipped.
    pub fn sets<'p>(
        &'p self,
        problem: &'p ProblemInstance,
    ) -> impl Iterator<Item = &'p CoveringSet> + 'p {
        self.indices()
            .filter_map(move |index| problem.collection().get(index))
    }

    /// Member set names in index order.
    pub fn names(&self, problem: &ProblemInstance) -> Vec<String> {
        self.sets(problem).map(|set| set.name().to_owned()).collect()
    }

    /// Member set names sorted alphabetically, for display.
    pub fn sorted_names(&self, problem: &ProblemInstance) -> Vec<String> {
        let mut names = self.names(problem);
        names.sort();
        names
    }
}

impl FromIterator<usize> for Candidate {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}
