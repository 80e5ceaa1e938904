//! Exhaustive iterative-deepening solver for BEST-SET-COVER.
//!
//! This crate provides [`IterativeDeepeningSolver`], an implementation of the
//! [`Solver`](setcover_core::Solver) trait that enumerates combinations of
//! covering sets one cardinality at a time. Within a depth, combinations are
//! generated in lexicographic collection-index order and any branch whose
//! accumulated cost would exceed the budget is cut. The first full cover at
//! the smallest depth wins, so a returned solution always has minimum
//! cardinality among the covers that fit the budget.
//!
//! The search is deterministic: the same problem and budget always produce the
//! same solution and the same trace.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod enumerate;
mod solver;

pub use solver::{IterativeDeepeningConfig, IterativeDeepeningSolver};
