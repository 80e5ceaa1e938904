//! Solve command implementation for the set-cover CLI.

use std::io::Write;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use setcover_core::{
    Cost, ProblemProvider, SilentTrace, SolveError, SolveRequest, SolveResponse, Solver,
};

use crate::problem::ProblemSource;
use crate::report::{self, SolveReport};
use crate::trace::WriterTrace;
use crate::{
    ARG_ATTEMPTS, ARG_BUDGET, ARG_PROBLEM, ARG_SEED, ARG_STRATEGY, ARG_TIME_LIMIT_MS, CliError,
    ENV_BUDGET,
};

const DEFAULT_ATTEMPTS: u32 = 10;
const DEFAULT_SEED: u64 = 1;

/// Search algorithm selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Strategy {
    /// Exhaustive iterative deepening.
    #[default]
    Ids,
    /// Hill climbing with random restarts.
    HillClimb,
}

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Search for a sub-collection of covering sets whose union is \
                 the whole universe and whose total cost fits the budget. The \
                 problem is read from a JSON file, or the canonical sample \
                 problem is used when no path is given.",
    about = "Solve a set-cover problem within a budget"
)]
#[ortho_config(prefix = "SETCOVER")]
pub(crate) struct SolveArgs {
    /// Path to a JSON problem file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) problem: Option<Utf8PathBuf>,
    /// Maximum total cost of the cover.
    #[arg(long = ARG_BUDGET, value_name = "cost")]
    #[serde(default)]
    pub(crate) budget: Option<u64>,
    /// Search algorithm to run.
    #[arg(long = ARG_STRATEGY, value_enum, value_name = "name")]
    #[serde(default)]
    pub(crate) strategy: Option<Strategy>,
    /// Random restarts made by hill climbing.
    #[arg(long = ARG_ATTEMPTS, value_name = "count")]
    #[serde(default)]
    pub(crate) attempts: Option<u32>,
    /// Seed for hill climbing's random starts.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Abort the search after this many milliseconds.
    #[arg(long = ARG_TIME_LIMIT_MS, value_name = "ms")]
    #[serde(default)]
    pub(crate) time_limit_ms: Option<u64>,
    /// Print the search trace before the report.
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) verbose: bool,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// JSON problem file, or `None` for the sample problem.
    pub(crate) problem: Option<Utf8PathBuf>,
    pub(crate) budget: Cost,
    pub(crate) strategy: Strategy,
    pub(crate) attempts: u32,
    pub(crate) seed: u64,
    pub(crate) time_limit: Option<Duration>,
    pub(crate) verbose: bool,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match &self.problem {
            Some(path) => Self::require_existing(path, ARG_PROBLEM),
            None => Ok(()),
        }
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match setcover_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub(crate) fn request(&self) -> SolveRequest {
        let request = SolveRequest::new(self.budget).with_seed(self.seed);
        match self.time_limit {
            Some(limit) => request.with_time_limit(limit),
            None => request,
        }
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let budget = args.budget.ok_or(CliError::MissingArgument {
            field: ARG_BUDGET,
            env: ENV_BUDGET,
        })?;
        Ok(Self {
            problem: args.problem,
            budget,
            strategy: args.strategy.unwrap_or_default(),
            attempts: args.attempts.unwrap_or(DEFAULT_ATTEMPTS),
            seed: args.seed.unwrap_or(DEFAULT_SEED),
            time_limit: args.time_limit_ms.map(Duration::from_millis),
            verbose: args.verbose,
        })
    }
}

/// Builds a solver instance for the current solve invocation.
pub(crate) trait SolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError>;
}

pub(crate) struct DefaultSolverBuilder;

impl SolverBuilder for DefaultSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
        match config.strategy {
            Strategy::Ids => build_ids(),
            Strategy::HillClimb => build_hill_climb(config.attempts),
        }
    }
}

#[cfg(feature = "solver-ids")]
fn build_ids() -> Result<Box<dyn Solver>, CliError> {
    Ok(Box::new(setcover_solver_ids::IterativeDeepeningSolver::new()))
}

#[cfg(not(feature = "solver-ids"))]
fn build_ids() -> Result<Box<dyn Solver>, CliError> {
    Err(CliError::MissingFeature {
        feature: "solver-ids",
        action: "the ids strategy",
    })
}

#[cfg(feature = "solver-hillclimb")]
fn build_hill_climb(attempts: u32) -> Result<Box<dyn Solver>, CliError> {
    use setcover_solver_hillclimb::{HillClimbConfig, HillClimbSolver};

    Ok(Box::new(HillClimbSolver::with_config(HillClimbConfig {
        attempts,
    })))
}

#[cfg(not(feature = "solver-hillclimb"))]
fn build_hill_climb(_attempts: u32) -> Result<Box<dyn Solver>, CliError> {
    Err(CliError::MissingFeature {
        feature: "solver-hillclimb",
        action: "the hill-climb strategy",
    })
}

pub(crate) fn run_solve(args: SolveArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_solve_with(args, &DefaultSolverBuilder, writer)
}

pub(crate) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_solve_config(args)?;
    let source = ProblemSource::from_path(config.problem.as_deref());
    if let ProblemSource::File(file) = &source {
        log::info!("loading problem from {}", file.path());
    }
    let solver = builder.build(&config)?;
    let response = execute_solve(&config, &source, solver.as_ref(), writer)?;
    report::write_json(
        writer,
        &SolveReport::new(config.strategy, config.budget, &response),
    )
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_solve(
    config: &SolveConfig,
    provider: &dyn ProblemProvider,
    solver: &dyn Solver,
    writer: &mut dyn Write,
) -> Result<SolveResponse, CliError> {
    let problem = provider.provide().map_err(SolveError::from)?;
    let request = config.request();
    log::info!(
        "solving {} sets over {} elements with budget {}",
        problem.collection().len(),
        problem.universe().len(),
        config.budget
    );
    if config.verbose {
        let mut trace = WriterTrace::new(&mut *writer);
        let response = solver.solve(&problem, &request, &mut trace)?;
        trace.finish().map_err(CliError::WriteOutput)?;
        Ok(response)
    } else {
        Ok(solver.solve(&problem, &request, &mut SilentTrace)?)
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
