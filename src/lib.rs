//! Facade crate for the set-cover engine.
//!
//! This crate re-exports the core domain types and exposes the solvers behind
//! feature flags, together with provider-driven entry points that load a
//! problem and solve it in one call.
//!
//! ```rust
//! use setcover_engine::{RecordingTrace, SampleProblem, iterative_deepening_solve};
//!
//! # fn main() -> Result<(), setcover_engine::SolveError> {
//! let mut trace = RecordingTrace::default();
//! let response = iterative_deepening_solve(&SampleProblem, 30, &mut trace)?;
//! assert!(response.found);
//! assert_eq!(trace.lines().first().map(String::as_str), Some("Searching to depth 1"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use setcover_core::{
    Candidate, ConfigurationError, Cost, CoveringSet, Diagnostics, Element, LogTrace,
    ProblemError, ProblemInstance, ProblemProvider, ProviderError, RecordingTrace, SampleProblem,
    SilentTrace, SolveError, SolveRequest, SolveResponse, Solver, TraceEvent, TraceSink,
    coverage, sample_problem,
};

#[cfg(feature = "serde")]
pub use setcover_core::document;

#[cfg(feature = "solver-ids")]
pub use setcover_solver_ids::{IterativeDeepeningConfig, IterativeDeepeningSolver};

#[cfg(feature = "solver-hillclimb")]
pub use setcover_solver_hillclimb::{HillClimbConfig, HillClimbSolver};

/// Load a problem from `provider` and solve it by iterative deepening.
///
/// Pass [`SilentTrace`] for a quiet run.
///
/// # Errors
///
/// Returns [`SolveError::Provider`] when the provider fails and
/// [`SolveError::MalformedProblem`] when it yields an invalid problem.
#[cfg(feature = "solver-ids")]
pub fn iterative_deepening_solve<P>(
    provider: &P,
    budget: Cost,
    trace: &mut dyn TraceSink,
) -> Result<SolveResponse, SolveError>
where
    P: ProblemProvider + ?Sized,
{
    let problem = provider.provide()?;
    IterativeDeepeningSolver::new().solve(&problem, &SolveRequest::new(budget), trace)
}

/// Load a problem from `provider` and solve it by hill climbing with
/// `attempts` random restarts seeded from `seed`.
///
/// # Errors
///
/// Returns [`SolveError::InvalidConfiguration`] for zero attempts before the
/// provider is consulted, and propagates provider failures like
/// [`iterative_deepening_solve`].
#[cfg(feature = "solver-hillclimb")]
pub fn hill_climb_solve<P>(
    provider: &P,
    budget: Cost,
    attempts: u32,
    seed: u64,
    trace: &mut dyn TraceSink,
) -> Result<SolveResponse, SolveError>
where
    P: ProblemProvider + ?Sized,
{
    if attempts == 0 {
        return Err(ConfigurationError::ZeroAttempts.into());
    }
    let problem = provider.provide()?;
    let request = SolveRequest::new(budget).with_seed(seed);
    HillClimbSolver::with_config(HillClimbConfig { attempts }).solve(&problem, &request, trace)
}
