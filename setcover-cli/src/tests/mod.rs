//! Shared test harness modules for the set-cover CLI.

use super::*;

mod helpers;
mod solve_steps;
