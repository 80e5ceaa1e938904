//! `IterativeDeepeningSolver` implementation.

use setcover_core::{
    Deadline, Diagnostics, ProblemInstance, SolveError, SolveRequest, SolveResponse, Solver,
    TraceEvent, TraceSink, coverage,
};

use crate::enumerate::DepthEnumerator;

/// Configuration for [`IterativeDeepeningSolver`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IterativeDeepeningConfig {
    /// Deepest cardinality to try. `None` searches up to the collection size,
    /// which keeps the search complete.
    pub max_depth: Option<usize>,
}

/// Exhaustive solver that deepens one cardinality at a time.
///
/// # Examples
/// ```rust
/// use setcover_core::{SilentTrace, SolveRequest, Solver, sample_problem};
/// use setcover_solver_ids::IterativeDeepeningSolver;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let problem = sample_problem()?;
/// let response = IterativeDeepeningSolver::new().solve(
///     &problem,
///     &SolveRequest::new(30),
///     &mut SilentTrace,
/// )?;
/// assert!(response.found);
/// assert_eq!(response.solution_names(), vec!["S1", "S2"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct IterativeDeepeningSolver {
    config: IterativeDeepeningConfig,
}

impl IterativeDeepeningSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IterativeDeepeningConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: IterativeDeepeningConfig) -> Self {
        Self { config }
    }

    fn depth_limit(&self, problem: &ProblemInstance) -> usize {
        let size = problem.collection().len();
        self.config.max_depth.map_or(size, |cap| cap.min(size))
    }
}

impl Solver for IterativeDeepeningSolver {
    fn solve(
        &self,
        problem: &ProblemInstance,
        request: &SolveRequest,
        trace: &mut dyn TraceSink,
    ) -> Result<SolveResponse, SolveError> {
        let deadline = Deadline::start(request);
        let enumerator = DepthEnumerator::new(problem, request.budget);
        let mut diagnostics = Diagnostics::default();

        for depth in 1..=self.depth_limit(problem) {
            deadline.check()?;
            diagnostics.rounds = diagnostics.rounds.saturating_add(1);
            log::debug!("searching to depth {depth}");
            if trace.is_enabled() {
                trace.record(TraceEvent::DepthStarted { depth });
            }

            let states = enumerator.states(depth);
            diagnostics.states_evaluated = diagnostics
                .states_evaluated
                .saturating_add(u64::try_from(states.len()).unwrap_or(u64::MAX));

            if states.is_empty() {
                log::info!("every branch at depth {depth} exceeds the budget");
                if trace.is_enabled() {
                    trace.record(TraceEvent::DepthExhausted { depth });
                }
                return Ok(SolveResponse::not_found(finish(diagnostics, &deadline)));
            }

            for state in &states {
                if trace.is_enabled() {
                    trace.record(TraceEvent::State {
                        names: state.sorted_names(problem),
                    });
                }
                if coverage::is_full_cover(problem, state) {
                    log::info!("found a cover of {depth} sets");
                    if trace.is_enabled() {
                        trace.record(TraceEvent::DepthSolution {
                            depth,
                            names: state.sorted_names(problem),
                        });
                    }
                    return Ok(SolveResponse::solved(
                        problem,
                        state,
                        finish(diagnostics, &deadline),
                    ));
                }
            }
        }

        log::info!("no cover within budget {}", request.budget);
        if trace.is_enabled() {
            trace.record(TraceEvent::NoSolution);
        }
        Ok(SolveResponse::not_found(finish(diagnostics, &deadline)))
    }
}

fn finish(mut diagnostics: Diagnostics, deadline: &Deadline) -> Diagnostics {
    diagnostics.solve_time = deadline.elapsed();
    diagnostics
}
