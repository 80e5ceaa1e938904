//! Budget-pruned enumeration of fixed-cardinality combinations.
//!
//! The enumeration walks the collection depth-first with a start cursor, so
//! each branch only considers sets at or after the cursor and every
//! combination is produced exactly once, in lexicographic index order.

use setcover_core::{Candidate, Cost, ProblemInstance};

/// Generates the states of one depth for a fixed problem and budget.
pub(crate) struct DepthEnumerator<'p> {
    problem: &'p ProblemInstance,
    budget: Cost,
}

impl<'p> DepthEnumerator<'p> {
    pub(crate) const fn new(problem: &'p ProblemInstance, budget: Cost) -> Self {
        Self { problem, budget }
    }

    /// Every combination of exactly `depth` sets whose cost fits the budget.
    ///
    /// Coverage is not checked here; callers scan the states afterwards.
    pub(crate) fn states(&self, depth: usize) -> Vec<Candidate> {
        let mut states = Vec::new();
        self.extend(&Candidate::empty(), 0, 0, depth, &mut states);
        states
    }

    fn extend(
        &self,
        partial: &Candidate,
        start: usize,
        partial_cost: Cost,
        depth: usize,
        states: &mut Vec<Candidate>,
    ) {
        if partial.len() == depth {
            states.push(partial.clone());
            return;
        }

        let collection = self.problem.collection();
        let needed = depth.saturating_sub(partial.len());
        for (index, set) in collection.iter().enumerate().skip(start) {
            // Not enough sets left to reach the target depth.
            if collection.len().saturating_sub(index) < needed {
                break;
            }
            let cost = partial_cost.saturating_add(set.cost());
            if cost > self.budget {
                continue;
            }
            self.extend(
                &partial.with(index),
                index.saturating_add(1),
                cost,
                depth,
                states,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use setcover_core::sample_problem;
    use setcover_core::test_support::problem;

    fn indices(states: &[Candidate]) -> Vec<Vec<usize>> {
        states
            .iter()
            .map(|state| state.indices().collect())
            .collect()
    }

    #[rstest]
    #[case(1, 6)]
    #[case(2, 15)]
    #[case(3, 20)]
    #[case(6, 1)]
    #[case(7, 0)]
    fn unbounded_budget_yields_every_combination(#[case] depth: usize, #[case] count: usize) {
        let problem = sample_problem().expect("sample problem is valid");
        let enumerator = DepthEnumerator::new(&problem, Cost::MAX);
        assert_eq!(enumerator.states(depth).len(), count);
    }

    #[rstest]
    fn states_follow_lexicographic_index_order() {
        let problem = problem(
            &[("x", 1)],
            &[("A", &["x"]), ("B", &["x"]), ("C", &["x"])],
        );
        let enumerator = DepthEnumerator::new(&problem, Cost::MAX);
        assert_eq!(
            indices(&enumerator.states(2)),
            vec![vec![0, 1], vec![0, 2], vec![1, 2]]
        );
    }

    #[rstest]
    fn branches_over_budget_are_cut() {
        let problem = problem(
            &[("x", 1), ("y", 5)],
            &[("cheap", &["x"]), ("dear", &["y"]), ("both", &["x", "y"])],
        );
        let enumerator = DepthEnumerator::new(&problem, 5);
        assert_eq!(indices(&enumerator.states(1)), vec![vec![0], vec![1]]);
        assert!(enumerator.states(2).is_empty());
    }

    #[rstest]
    fn zero_budget_keeps_only_free_sets() {
        let problem = problem(
            &[("x", 0), ("y", 2)],
            &[("paid", &["y"]), ("free", &["x"])],
        );
        let enumerator = DepthEnumerator::new(&problem, 0);
        assert_eq!(indices(&enumerator.states(1)), vec![vec![1]]);
    }
}
