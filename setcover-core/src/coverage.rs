//! Shared definitions of coverage and cost.
//!
//! Both solvers judge candidates exclusively through these functions, so
//! "covered" and "cost" mean the same thing everywhere.

use std::collections::BTreeSet;

use crate::{Candidate, Cost, Element, ProblemInstance};

/// Union of the elements of every set in `candidate`.
///
/// # Examples
/// ```
/// use setcover_core::{Candidate, coverage::covered_by, sample_problem};
///
/// # fn main() -> Result<(), setcover_core::ProblemError> {
/// let problem = sample_problem()?;
/// let s4: Candidate = [3].into_iter().collect();
/// let names: Vec<_> = covered_by(&problem, &s4).iter().map(|e| e.name.as_str()).collect();
/// assert_eq!(names, vec!["b", "f"]);
/// # Ok(())
/// # }
/// ```
pub fn covered_by<'p>(
    problem: &'p ProblemInstance,
    candidate: &Candidate,
) -> BTreeSet<&'p Element> {
    candidate
        .indices()
        .filter_map(|index| problem.collection().get(index))
        .flat_map(|set| set.elements().iter())
        .collect()
}

/// Total cost of the sets in `candidate`, saturating at [`Cost::MAX`].
pub fn cost(problem: &ProblemInstance, candidate: &Candidate) -> Cost {
    candidate
        .sets(problem)
        .fold(0, |total: Cost, set| total.saturating_add(set.cost()))
}

/// Whether `candidate` covers the whole universe.
pub fn is_full_cover(problem: &ProblemInstance, candidate: &Candidate) -> bool {
    let covered = covered_by(problem, candidate);
    covered.len() == problem.universe().len()
        && problem.universe().iter().all(|element| covered.contains(element))
}

/// Sum of the costs of universe elements that `candidate` leaves uncovered.
pub fn uncovered_cost(problem: &ProblemInstance, candidate: &Candidate) -> Cost {
    let covered = covered_by(problem, candidate);
    problem
        .universe()
        .iter()
        .filter(|element| !covered.contains(element))
        .fold(0, |total: Cost, element| total.saturating_add(element.cost))
}

/// Whether `candidate` is a full cover costing at most `budget`.
pub fn is_solution(problem: &ProblemInstance, candidate: &Candidate, budget: Cost) -> bool {
    cost(problem, candidate) <= budget && is_full_cover(problem, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_problem;
    use rstest::{fixture, rstest};

    #[fixture]
    fn problem() -> ProblemInstance {
        sample_problem().expect("sample problem is valid")
    }

    fn pick(indices: &[usize]) -> Candidate {
        indices.iter().copied().collect()
    }

    #[rstest]
    fn empty_candidate_covers_nothing(problem: ProblemInstance) {
        let empty = Candidate::empty();
        assert!(covered_by(&problem, &empty).is_empty());
        assert_eq!(cost(&problem, &empty), 0);
        assert_eq!(uncovered_cost(&problem, &empty), problem.universe_cost());
        assert!(!is_full_cover(&problem, &empty));
    }

    #[rstest]
    #[case::s1_s2(&[0, 1], true, 24)]
    #[case::s1_s4(&[0, 3], false, 19)]
    #[case::s3_s6(&[2, 5], true, 19)]
    #[case::s2_s6(&[1, 5], false, 20)]
    #[case::everything(&[0, 1, 2, 3, 4, 5], true, 51)]
    fn cover_and_cost(
        problem: ProblemInstance,
        #[case] indices: &[usize],
        #[case] covers: bool,
        #[case] expected_cost: Cost,
    ) {
        let candidate = pick(indices);
        assert_eq!(is_full_cover(&problem, &candidate), covers);
        assert_eq!(cost(&problem, &candidate), expected_cost);
    }

    #[rstest]
    fn uncovered_cost_counts_missing_elements(problem: ProblemInstance) {
        // S1 covers a..e; f, g and h remain at one each.
        assert_eq!(uncovered_cost(&problem, &pick(&[0])), 3);
    }

    #[rstest]
    #[case(24, true)]
    #[case(23, false)]
    fn solution_respects_budget(
        problem: ProblemInstance,
        #[case] budget: Cost,
        #[case] ok: bool,
    ) {
        assert_eq!(is_solution(&problem, &pick(&[0, 1]), budget), ok);
    }
}
