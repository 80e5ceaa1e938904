//! Command-line interface for the set-cover solvers.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use setcover_core::document::ProblemDocument;
use setcover_core::{SolveError, sample_problem};
use std::io::Write;

mod error;
mod problem;
mod report;
mod solve;
mod trace;

pub use error::CliError;
use solve::{SolveArgs, run_solve};

pub(crate) const ARG_PROBLEM: &str = "problem";
pub(crate) const ARG_BUDGET: &str = "budget";
pub(crate) const ARG_STRATEGY: &str = "strategy";
pub(crate) const ARG_ATTEMPTS: &str = "attempts";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ARG_TIME_LIMIT_MS: &str = "time-limit-ms";
pub(crate) const ENV_BUDGET: &str = "SETCOVER_CMDS_SOLVE_BUDGET";

/// Run the CLI with the current process arguments and environment.
///
/// Help and version requests are printed and treated as success.
pub fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            err.print().map_err(CliError::WriteOutput)?;
            return Ok(());
        }
        Err(err) => return Err(CliError::ArgumentParsing(err)),
    };
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Solve(args) => run_solve(args, &mut stdout),
        Command::Sample => write_sample(&mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "setcover",
    about = "Solve BEST-SET-COVER problems within a budget",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search for a cover of the universe within a budget.
    Solve(SolveArgs),
    /// Print the canonical sample problem as JSON.
    Sample,
}

/// Write the canonical sample problem in the JSON problem format.
fn write_sample(writer: &mut dyn Write) -> Result<(), CliError> {
    let problem = sample_problem().map_err(SolveError::from)?;
    let document = ProblemDocument::from(&problem);
    report::write_json(writer, &document)
}

#[cfg(test)]
mod tests;
