//! Sources of problem instances.

use thiserror::Error;

use crate::{ProblemError, ProblemInstance};

/// Errors from [`ProblemProvider::provide`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The source backing the provider could not be read.
    #[error("problem source {source_name} is unavailable: {reason}")]
    Unavailable {
        /// Human-readable name of the source, such as a file path.
        source_name: String,
        /// Description of the underlying failure.
        reason: String,
    },
    /// The source was read but described an invalid problem.
    #[error(transparent)]
    Malformed(#[from] ProblemError),
}

/// Supply a problem instance on demand.
///
/// The solvers never load problems themselves; they ask a provider once per
/// solve and propagate its failure unchanged. Closures returning
/// `Result<ProblemInstance, ProviderError>` are providers.
///
/// # Examples
///
/// ```rust
/// use setcover_core::{Element, ProblemInstance, ProblemProvider, ProviderError};
///
/// let provider = || -> Result<ProblemInstance, ProviderError> {
///     Ok(ProblemInstance::new(Vec::<Element>::new(), Vec::new())?)
/// };
/// let problem = provider.provide()?;
/// assert!(problem.universe().is_empty());
/// # Ok::<(), ProviderError>(())
/// ```
pub trait ProblemProvider {
    /// Produce the problem instance to solve.
    fn provide(&self) -> Result<ProblemInstance, ProviderError>;
}

impl<F> ProblemProvider for F
where
    F: Fn() -> Result<ProblemInstance, ProviderError>,
{
    fn provide(&self) -> Result<ProblemInstance, ProviderError> {
        self()
    }
}
