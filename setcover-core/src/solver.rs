use std::time::{Duration, Instant};

use thiserror::Error;

use crate::coverage;
use crate::{Candidate, Cost, CoveringSet, ProblemError, ProblemInstance, ProviderError, TraceSink};

/// Parameters shared by every solve call.
///
/// # Examples
/// ```rust
/// use std::time::Duration;
/// use setcover_core::SolveRequest;
///
/// let request = SolveRequest::new(30)
///     .with_seed(7)
///     .with_time_limit(Duration::from_secs(1));
/// assert_eq!(request.budget, 30);
/// assert_eq!(request.seed, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveRequest {
    /// Maximum total cost of an acceptable cover.
    pub budget: Cost,
    /// Seed for reproducible stochastic components.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: u64,
    /// Wall-clock limit checked between depths or attempts.
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_limit: Option<Duration>,
}

impl SolveRequest {
    /// A request with the given budget, seed `0` and no time limit.
    pub const fn new(budget: Cost) -> Self {
        Self {
            budget,
            seed: 0,
            time_limit: None,
        }
    }

    /// Replace the seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Bound the wall-clock time of the search.
    #[must_use]
    pub const fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

/// Runtime information about a solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Wall-clock time spent in the solver.
    pub solve_time: Duration,
    /// Number of candidates scored or generated.
    pub states_evaluated: u64,
    /// Depths searched by iterative deepening, or attempts started by hill
    /// climbing.
    pub rounds: u32,
}

/// Outcome of a solve call.
///
/// `found == false` means no cover within budget was found; it is not an
/// error. The solution is empty in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResponse {
    /// Chosen covering sets, in collection order.
    pub solution: Vec<CoveringSet>,
    /// Whether `solution` covers the universe within budget.
    pub found: bool,
    /// Total cost of `solution`.
    pub cost: Cost,
    /// Runtime information.
    pub diagnostics: Diagnostics,
}

impl SolveResponse {
    /// A successful response holding the sets of `candidate`.
    pub fn solved(
        problem: &ProblemInstance,
        candidate: &Candidate,
        diagnostics: Diagnostics,
    ) -> Self {
        Self {
            solution: candidate.sets(problem).cloned().collect(),
            found: true,
            cost: coverage::cost(problem, candidate),
            diagnostics,
        }
    }

    /// A response reporting that no cover was found.
    pub const fn not_found(diagnostics: Diagnostics) -> Self {
        Self {
            solution: Vec::new(),
            found: false,
            cost: 0,
            diagnostics,
        }
    }

    /// Names of the chosen sets, in collection order.
    pub fn solution_names(&self) -> Vec<&str> {
        self.solution.iter().map(CoveringSet::name).collect()
    }
}

/// Caller mistakes detected before a search starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Hill climbing was asked to make zero attempts.
    #[error("attempts must be greater than zero")]
    ZeroAttempts,
}

/// Errors returned by [`Solver::solve`] and the provider-driven entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Solver parameters were invalid.
    #[error("invalid solver configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),
    /// The problem instance violated its construction rules.
    #[error("malformed problem instance: {0}")]
    MalformedProblem(#[source] ProblemError),
    /// The problem provider failed.
    #[error("problem provider failed: {0}")]
    Provider(#[source] ProviderError),
    /// The search ran past its time limit.
    #[error("search exceeded its time limit of {limit:?}")]
    DeadlineExceeded {
        /// Limit taken from the request.
        limit: Duration,
    },
}

impl From<ProviderError> for SolveError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Malformed(problem) => Self::MalformedProblem(problem),
            other => Self::Provider(other),
        }
    }
}

impl From<ProblemError> for SolveError {
    fn from(err: ProblemError) -> Self {
        Self::MalformedProblem(err)
    }
}

/// Alias for the solver error type.
pub type Error = SolveError;

/// Wall-clock budget for one solve call.
///
/// Solvers call [`Deadline::check`] at their natural boundaries (a new depth,
/// a new attempt) rather than inside the inner loops.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started_at: Instant,
    limit: Option<Duration>,
}

impl Deadline {
    /// Start the clock for `request`.
    pub fn start(request: &SolveRequest) -> Self {
        Self {
            started_at: Instant::now(),
            limit: request.time_limit,
        }
    }

    /// Time elapsed since [`Deadline::start`].
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Fail once the limit has passed.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DeadlineExceeded`] when a limit is set and has
    /// elapsed.
    pub fn check(&self) -> Result<(), SolveError> {
        match self.limit {
            Some(limit) if self.elapsed() >= limit => {
                log::warn!("search stopped after exceeding its {limit:?} time limit");
                Err(SolveError::DeadlineExceeded { limit })
            }
            _ => Ok(()),
        }
    }
}

/// Search for a cover of the universe within the request budget.
///
/// Implementations report infeasibility through
/// [`SolveResponse::found`] and reserve [`Error`] for invalid input or an
/// expired deadline. Solvers must be `Send + Sync`; all per-call state lives
/// on the stack of [`Solver::solve`].
pub trait Solver: Send + Sync {
    /// Solve `problem` under `request`, describing progress to `trace`.
    fn solve(
        &self,
        problem: &ProblemInstance,
        request: &SolveRequest,
        trace: &mut dyn TraceSink,
    ) -> Result<SolveResponse, Error>;
}
