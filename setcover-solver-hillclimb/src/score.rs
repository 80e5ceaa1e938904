//! Error function driving the local search.

use setcover_core::{Candidate, Cost, ProblemInstance, coverage};

/// Score how far `candidate` is from a feasible cover.
///
/// The error is the budget overrun plus the total cost of the universe
/// elements left uncovered, where every uncovered element weighs at least
/// one. It is zero exactly when the candidate covers the universe within
/// `budget`, even when some elements are free.
///
/// # Examples
/// ```rust
/// use setcover_core::{Candidate, sample_problem};
/// use setcover_solver_hillclimb::error;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let problem = sample_problem()?;
/// assert_eq!(error(&problem, &Candidate::empty(), 30), 18);
/// assert_eq!(error(&problem, &[0, 1].into_iter().collect(), 30), 0);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn error(problem: &ProblemInstance, candidate: &Candidate, budget: Cost) -> Cost {
    let overrun = coverage::cost(problem, candidate).saturating_sub(budget);
    overrun.saturating_add(uncovered_weight(problem, candidate))
}

/// Sum of uncovered element costs, counting free elements as one.
fn uncovered_weight(problem: &ProblemInstance, candidate: &Candidate) -> Cost {
    let covered = coverage::covered_by(problem, candidate);
    problem
        .universe()
        .iter()
        .filter(|element| !covered.contains(element))
        .fold(0, |total: Cost, element| {
            total.saturating_add(element.cost.max(1))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use setcover_core::sample_problem;
    use setcover_core::test_support::problem;

    #[fixture]
    fn sample() -> ProblemInstance {
        sample_problem().expect("sample problem is valid")
    }

    #[rstest]
    #[case::empty(&[], 30, 18)]
    #[case::within_budget_cover(&[0, 1], 30, 0)]
    #[case::overrun_only(&[0, 1], 20, 4)]
    #[case::uncovered_only(&[3], 30, 14)]
    #[case::overrun_and_uncovered(&[0], 10, 8)]
    #[case::everything(&[0, 1, 2, 3, 4, 5], 30, 21)]
    fn error_adds_overrun_and_uncovered_cost(
        sample: ProblemInstance,
        #[case] indices: &[usize],
        #[case] budget: Cost,
        #[case] expected: Cost,
    ) {
        let candidate: Candidate = indices.iter().copied().collect();
        assert_eq!(error(&sample, &candidate, budget), expected);
    }

    #[rstest]
    #[case::free_element_missed(&[0], 10, 1)]
    #[case::free_element_covered(&[1], 10, 0)]
    #[case::nothing_chosen(&[], 10, 3)]
    #[case::overrun_with_free_element_missed(&[0], 1, 2)]
    fn uncovered_free_elements_still_count(
        #[case] indices: &[usize],
        #[case] budget: Cost,
        #[case] expected: Cost,
    ) {
        let problem = problem(
            &[("x", 0), ("y", 2)],
            &[("only_y", &["y"]), ("both", &["x", "y"])],
        );
        let candidate: Candidate = indices.iter().copied().collect();
        assert_eq!(error(&problem, &candidate, budget), expected);
        assert_eq!(
            expected == 0,
            coverage::is_solution(&problem, &candidate, budget)
        );
    }

    #[rstest]
    fn zero_error_matches_solution_predicate(sample: ProblemInstance) {
        for mask in 0_u32..64 {
            let candidate: Candidate = (0..6).filter(|bit| mask & (1 << bit) != 0).collect();
            for budget in [0, 19, 24, 30] {
                assert_eq!(
                    error(&sample, &candidate, budget) == 0,
                    coverage::is_solution(&sample, &candidate, budget),
                    "mask {mask:06b} budget {budget}"
                );
            }
        }
    }
}
