//! The canonical eight-element sample problem.

use crate::{CoveringSet, Element, ProblemError, ProblemInstance, ProblemProvider, ProviderError};

/// Build the canonical sample problem.
///
/// Elements `a` to `e` cost 3 and `f` to `h` cost 1. The six covering sets are
/// `S1 = {a, b, c, d, e}`, `S2 = {a, e, f, g, h}`, `S3 = {b, c, g, h}`,
/// `S4 = {b, f}`, `S5 = {d, h}` and `S6 = {a, d, e, f, h}`.
///
/// # Errors
///
/// Never fails in practice; the signature mirrors [`ProblemInstance::new`].
///
/// # Examples
/// ```
/// use setcover_core::sample_problem;
///
/// # fn main() -> Result<(), setcover_core::ProblemError> {
/// let problem = sample_problem()?;
/// assert_eq!(problem.universe().len(), 8);
/// assert_eq!(problem.collection().len(), 6);
/// # Ok(())
/// # }
/// ```
pub fn sample_problem() -> Result<ProblemInstance, ProblemError> {
    let a = Element::new("a", 3);
    let b = Element::new("b", 3);
    let c = Element::new("c", 3);
    let d = Element::new("d", 3);
    let e = Element::new("e", 3);
    let f = Element::new("f", 1);
    let g = Element::new("g", 1);
    let h = Element::new("h", 1);

    let collection = vec![
        CoveringSet::new(
            "S1",
            [a.clone(), b.clone(), c.clone(), d.clone(), e.clone()],
        ),
        CoveringSet::new(
            "S2",
            [a.clone(), e.clone(), f.clone(), g.clone(), h.clone()],
        ),
        CoveringSet::new("S3", [b.clone(), c.clone(), g.clone(), h.clone()]),
        CoveringSet::new("S4", [b.clone(), f.clone()]),
        CoveringSet::new("S5", [d.clone(), h.clone()]),
        CoveringSet::new(
            "S6",
            [a.clone(), d.clone(), e.clone(), f.clone(), h.clone()],
        ),
    ];

    ProblemInstance::new([a, b, c, d, e, f, g, h], collection)
}

/// Provider yielding [`sample_problem`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleProblem;

impl ProblemProvider for SampleProblem {
    fn provide(&self) -> Result<ProblemInstance, ProviderError> {
        Ok(sample_problem()?)
    }
}
