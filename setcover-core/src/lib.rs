//! Core domain types for the set-cover engine.
//!
//! A [`ProblemInstance`] pairs a universe of costed [`Element`]s with an
//! ordered collection of [`CoveringSet`]s. Solvers explore [`Candidate`]
//! selections, judge them with the functions in [`coverage`], and report
//! progress to a [`TraceSink`]. Constructors return `Result` to surface
//! invalid input early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod candidate;
pub mod coverage;
#[cfg(feature = "serde")]
pub mod document;
mod element;
mod problem;
mod provider;
mod sample;
mod solver;
mod trace;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use candidate::Candidate;
pub use element::{Cost, CoveringSet, Element};
pub use problem::{ProblemError, ProblemInstance};
pub use provider::{ProblemProvider, ProviderError};
pub use sample::{SampleProblem, sample_problem};
pub use solver::{
    ConfigurationError, Deadline, Diagnostics, Error, SolveError, SolveRequest, SolveResponse,
    Solver,
};
pub use trace::{LogTrace, RecordingTrace, SilentTrace, TraceEvent, TraceSink};
