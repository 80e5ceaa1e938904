//! `HillClimbSolver` implementation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use setcover_core::{
    Candidate, ConfigurationError, Cost, Deadline, Diagnostics, ProblemInstance, SolveError,
    SolveRequest, SolveResponse, Solver, TraceEvent, TraceSink,
};

use crate::score::error;

/// Attempts made when no configuration is supplied.
const DEFAULT_ATTEMPTS: u32 = 10;

/// Configuration for [`HillClimbSolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HillClimbConfig {
    /// Number of random restarts. Must be greater than zero.
    pub attempts: u32,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}

/// Randomised local-search solver.
///
/// Neighbors are scored in collection order and the first strictly lowest
/// error wins. A returned solution always satisfies the budget, but a failed
/// search does not prove that no cover exists.
///
/// # Examples
/// ```rust
/// use setcover_core::{SilentTrace, SolveRequest, Solver, sample_problem};
/// use setcover_solver_hillclimb::{HillClimbConfig, HillClimbSolver};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let problem = sample_problem()?;
/// let solver = HillClimbSolver::with_config(HillClimbConfig { attempts: 3 });
/// let response = solver.solve(&problem, &SolveRequest::new(0), &mut SilentTrace)?;
/// assert!(!response.found);
/// assert_eq!(response.diagnostics.rounds, 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct HillClimbSolver {
    config: HillClimbConfig,
}

impl HillClimbSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HillClimbConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: HillClimbConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &HillClimbConfig {
        &self.config
    }

    /// Solve with an injected random generator instead of seeding one from
    /// `request.seed`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidConfiguration`] when the solver is
    /// configured with zero attempts, or [`SolveError::DeadlineExceeded`] when
    /// `request.time_limit` elapses before an attempt starts.
    pub fn solve_with_rng<R>(
        &self,
        problem: &ProblemInstance,
        request: &SolveRequest,
        rng: &mut R,
        trace: &mut dyn TraceSink,
    ) -> Result<SolveResponse, SolveError>
    where
        R: Rng + ?Sized,
    {
        if self.config.attempts == 0 {
            return Err(ConfigurationError::ZeroAttempts.into());
        }

        let deadline = Deadline::start(request);
        let mut climb = Climb {
            problem,
            budget: request.budget,
            trace,
            diagnostics: Diagnostics::default(),
        };

        for attempt in 0..self.config.attempts {
            deadline.check()?;
            climb.diagnostics.rounds = attempt.saturating_add(1);
            let start = random_start(problem, rng);
            log::debug!("attempt {attempt} starts from {} sets", start.len());
            if climb.trace.is_enabled() {
                climb.trace.record(TraceEvent::AttemptStarted {
                    attempt,
                    names: start.names(problem),
                });
            }

            if let Some(solution) = climb.descend(start) {
                log::info!(
                    "attempt {attempt} reached a cover of {} sets",
                    solution.len()
                );
                if climb.trace.is_enabled() {
                    climb.trace.record(TraceEvent::ClimbSolution {
                        names: solution.names(problem),
                    });
                }
                let diagnostics = finish(climb.diagnostics, &deadline);
                return Ok(SolveResponse::solved(problem, &solution, diagnostics));
            }
        }

        log::info!(
            "no cover within budget {} after {} attempts",
            request.budget,
            self.config.attempts
        );
        if climb.trace.is_enabled() {
            climb.trace.record(TraceEvent::NoSolution);
        }
        Ok(SolveResponse::not_found(finish(climb.diagnostics, &deadline)))
    }
}

impl Solver for HillClimbSolver {
    fn solve(
        &self,
        problem: &ProblemInstance,
        request: &SolveRequest,
        trace: &mut dyn TraceSink,
    ) -> Result<SolveResponse, SolveError> {
        let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
        self.solve_with_rng(problem, request, &mut rng, trace)
    }
}

/// Include each covering set independently with probability one half.
fn random_start<R>(problem: &ProblemInstance, rng: &mut R) -> Candidate
where
    R: Rng + ?Sized,
{
    (0..problem.collection().len())
        .filter(|_| rng.gen_bool(0.5))
        .collect()
}

/// State shared by the descents of one solve call.
struct Climb<'a> {
    problem: &'a ProblemInstance,
    budget: Cost,
    trace: &'a mut dyn TraceSink,
    diagnostics: Diagnostics,
}

impl Climb<'_> {
    /// Steepest descent from `start`. Returns the first zero-error state, or
    /// `None` once no neighbor strictly improves. A zero-error neighbor is
    /// returned as soon as the scan ends, without another iteration line.
    fn descend(&mut self, start: Candidate) -> Option<Candidate> {
        let mut current = start;
        let mut current_error = self.score(&current);
        loop {
            if self.trace.is_enabled() {
                self.trace.record(TraceEvent::Iteration {
                    names: current.names(self.problem),
                    error: current_error,
                });
            }
            if current_error == 0 {
                return Some(current);
            }
            let (next, next_error) = self.best_neighbor(&current, current_error)?;
            if next_error == 0 {
                return Some(next);
            }
            current = next;
            current_error = next_error;
        }
    }

    /// Lowest-error neighbor strictly below `current_error`, first in
    /// collection order on ties.
    fn best_neighbor(
        &mut self,
        current: &Candidate,
        current_error: Cost,
    ) -> Option<(Candidate, Cost)> {
        let mut best: Option<(Candidate, Cost)> = None;
        for index in 0..self.problem.collection().len() {
            let neighbor = current.toggled(index);
            let neighbor_error = self.score(&neighbor);
            if self.trace.is_enabled() {
                self.trace.record(TraceEvent::Neighbor {
                    names: neighbor.names(self.problem),
                    error: neighbor_error,
                });
            }
            let threshold = best.as_ref().map_or(current_error, |(_, cost)| *cost);
            if neighbor_error < threshold {
                best = Some((neighbor, neighbor_error));
            }
            // Zero is the minimum; nothing later can replace it.
            if neighbor_error == 0 {
                break;
            }
        }
        best
    }

    fn score(&mut self, candidate: &Candidate) -> Cost {
        self.diagnostics.states_evaluated = self.diagnostics.states_evaluated.saturating_add(1);
        error(self.problem, candidate, self.budget)
    }
}

fn finish(mut diagnostics: Diagnostics, deadline: &Deadline) -> Diagnostics {
    diagnostics.solve_time = deadline.elapsed();
    diagnostics
}
