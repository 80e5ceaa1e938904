//! Problem sources available to the CLI.

use camino::{Utf8Path, Utf8PathBuf};
use setcover_core::document::ProblemDocument;
use setcover_core::{ProblemInstance, ProblemProvider, ProviderError, SampleProblem};
use setcover_fs::read_utf8_to_string;

/// Loads a JSON-encoded [`ProblemDocument`] from disk on each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct JsonProblemFile {
    path: Utf8PathBuf,
}

impl JsonProblemFile {
    pub(crate) fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn unavailable(&self, reason: String) -> ProviderError {
        ProviderError::Unavailable {
            source_name: self.path.to_string(),
            reason,
        }
    }
}

impl ProblemProvider for JsonProblemFile {
    fn provide(&self) -> Result<ProblemInstance, ProviderError> {
        let contents =
            read_utf8_to_string(&self.path).map_err(|err| self.unavailable(err.to_string()))?;
        let document: ProblemDocument = serde_json::from_str(&contents)
            .map_err(|err| self.unavailable(format!("invalid problem JSON: {err}")))?;
        log::debug!(
            "loaded {} elements and {} sets from {}",
            document.elements.len(),
            document.sets.len(),
            self.path
        );
        Ok(ProblemInstance::try_from(document)?)
    }
}

/// Where the `solve` command takes its problem from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ProblemSource {
    /// The built-in canonical sample.
    Sample,
    /// A JSON problem file.
    File(JsonProblemFile),
}

impl ProblemSource {
    pub(crate) fn from_path(path: Option<&Utf8Path>) -> Self {
        path.map_or(Self::Sample, |path| Self::File(JsonProblemFile::new(path)))
    }
}

impl ProblemProvider for ProblemSource {
    fn provide(&self) -> Result<ProblemInstance, ProviderError> {
        match self {
            Self::Sample => SampleProblem.provide(),
            Self::File(file) => file.provide(),
        }
    }
}
