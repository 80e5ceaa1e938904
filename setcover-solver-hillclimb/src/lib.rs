//! Hill-climbing solver with random restarts for BEST-SET-COVER.
//!
//! This crate provides [`HillClimbSolver`], an implementation of the
//! [`Solver`](setcover_core::Solver) trait that trades completeness for speed.
//! Each attempt starts from a random candidate and performs steepest descent on
//! the [`error`] function, toggling one covering set per step. An attempt ends
//! as soon as no neighbor strictly improves on the current error; the solver
//! then restarts from a fresh random candidate until its attempts run out.
//!
//! Randomness comes from a `ChaCha8Rng` seeded with
//! [`SolveRequest::seed`](setcover_core::SolveRequest), so a run is fully
//! reproducible. [`HillClimbSolver::solve_with_rng`] accepts any other
//! generator.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod score;
mod solver;

pub use score::error;
pub use solver::{HillClimbConfig, HillClimbSolver};
