//! JSON summary printed after a solve.

use std::io::Write;

use serde::{Deserialize, Serialize};
use setcover_core::{Cost, Diagnostics, SolveResponse};

use crate::CliError;
use crate::solve::Strategy;

/// Outcome of the `solve` command as written to stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SolveReport {
    pub(crate) strategy: Strategy,
    pub(crate) found: bool,
    /// Set names in collection order; empty when nothing was found.
    pub(crate) solution: Vec<String>,
    pub(crate) cost: Cost,
    pub(crate) budget: Cost,
    pub(crate) diagnostics: DiagnosticsReport,
}

impl SolveReport {
    pub(crate) fn new(strategy: Strategy, budget: Cost, response: &SolveResponse) -> Self {
        Self {
            strategy,
            found: response.found,
            solution: response
                .solution_names()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            cost: response.cost,
            budget,
            diagnostics: DiagnosticsReport::from(&response.diagnostics),
        }
    }
}

/// Serialisable view of [`Diagnostics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct DiagnosticsReport {
    pub(crate) solve_time_ms: u64,
    pub(crate) states_evaluated: u64,
    pub(crate) rounds: u32,
}

impl From<&Diagnostics> for DiagnosticsReport {
    fn from(diagnostics: &Diagnostics) -> Self {
        Self {
            solve_time_ms: u64::try_from(diagnostics.solve_time.as_millis()).unwrap_or(u64::MAX),
            states_evaluated: diagnostics.states_evaluated,
            rounds: diagnostics.rounds,
        }
    }
}

/// Pretty-print `value` as JSON followed by a newline.
pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
