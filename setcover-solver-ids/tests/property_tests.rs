//! Property-based tests for the iterative-deepening solver.
//!
//! These tests use `proptest` to assert invariants that must hold for every
//! small problem instance, checked against an exhaustive subset search.
//!
//! # Invariants tested
//!
//! - **Soundness:** A reported solution covers the universe within budget.
//! - **Completeness:** A solution is found whenever a cover fits the budget.
//! - **Minimal depth:** The solution has the smallest feasible cardinality.
//! - **Determinism:** Repeated runs produce identical solutions and traces.
//! - **Purity:** Solving never changes the problem instance.


use proptest::prelude::*;
use setcover_core::{RecordingTrace, SolveRequest, Solver, coverage};
use setcover_solver_ids::IterativeDeepeningSolver;

use proptest_support::{brute_force_min_cardinality, problem_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: Any reported cover is sound and of minimum cardinality.
    #[test]
    fn solution_is_sound_and_minimal(problem in problem_strategy(), budget in 0_u64..=30) {
        let response = IterativeDeepeningSolver::new()
            .solve(&problem, &SolveRequest::new(budget), &mut RecordingTrace::default())
            .expect("solve should succeed");
        let reference = brute_force_min_cardinality(&problem, budget);

        prop_assert_eq!(response.found, reference.is_some());
        if response.found {
            let chosen: setcover_core::Candidate = response
                .solution
                .iter()
                .filter_map(|set| problem.collection().iter().position(|s| s == set))
                .collect();
            prop_assert!(coverage::is_full_cover(&problem, &chosen));
            prop_assert!(coverage::cost(&problem, &chosen) <= budget);
            prop_assert_eq!(response.cost, coverage::cost(&problem, &chosen));
            prop_assert_eq!(Some(response.solution.len()), reference);
        } else {
            prop_assert!(response.solution.is_empty());
        }
    }

    /// Property: Two runs on the same input agree on solution and trace.
    #[test]
    fn search_is_deterministic(problem in problem_strategy(), budget in 0_u64..=30) {
        let solver = IterativeDeepeningSolver::new();
        let request = SolveRequest::new(budget);
        let mut first_trace = RecordingTrace::default();
        let mut second_trace = RecordingTrace::default();
        let first = solver.solve(&problem, &request, &mut first_trace).expect("first run");
        let second = solver.solve(&problem, &request, &mut second_trace).expect("second run");

        prop_assert_eq!(first.solution, second.solution);
        prop_assert_eq!(first_trace, second_trace);
    }

    /// Property: The problem instance is unchanged by a solve.
    #[test]
    fn solving_leaves_problem_untouched(problem in problem_strategy(), budget in 0_u64..=30) {
        let before = problem.clone();
        IterativeDeepeningSolver::new()
            .solve(&problem, &SolveRequest::new(budget), &mut RecordingTrace::default())
            .expect("solve should succeed");
        prop_assert_eq!(problem, before);
    }
}
