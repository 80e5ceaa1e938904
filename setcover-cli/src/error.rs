//! Error types emitted by the set-cover CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use setcover_core::SolveError;
use thiserror::Error;

/// Errors emitted by the set-cover CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        /// Cargo feature that provides the operation.
        feature: &'static str,
        /// What the user asked for.
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Loading the problem or running the solver failed.
    #[error("solver failed: {source}")]
    Solve {
        /// Underlying solver error.
        #[source]
        source: SolveError,
    },
    /// Serializing the report failed.
    #[error("failed to serialize report: {0}")]
    SerializeReport(#[source] serde_json::Error),
    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

impl From<SolveError> for CliError {
    fn from(source: SolveError) -> Self {
        Self::Solve { source }
    }
}
