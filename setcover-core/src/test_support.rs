//! Test-only problem builders and providers used by unit and behaviour tests.

use crate::{CoveringSet, Element, ProblemInstance, ProblemProvider, ProviderError};

/// Construct a problem from `(name, cost)` elements and `(name, members)`
/// sets, where members are element names.
///
/// # Panics
///
/// Panics when the description is invalid, which is a bug in the test.
pub fn problem(elements: &[(&str, u64)], sets: &[(&str, &[&str])]) -> ProblemInstance {
    let universe: Vec<Element> = elements
        .iter()
        .map(|(name, cost)| Element::new(*name, *cost))
        .collect();
    let collection = sets
        .iter()
        .map(|(name, members)| {
            let members = members.iter().map(|member| {
                universe
                    .iter()
                    .find(|element| element.name == *member)
                    .cloned()
                    .expect("set member must be declared in the universe")
            });
            CoveringSet::new(*name, members.collect::<Vec<_>>())
        })
        .collect();
    ProblemInstance::new(universe, collection).expect("test problem must be valid")
}

/// Two disjoint sets, `right` (index 0) and `left` (index 1), covering
/// `{x, y}` at cost 2 each.
pub fn two_set_problem() -> ProblemInstance {
    problem(
        &[("x", 2), ("y", 2)],
        &[("right", &["y"]), ("left", &["x"])],
    )
}

/// Provider that always fails with [`ProviderError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableProvider;

impl ProblemProvider for UnavailableProvider {
    fn provide(&self) -> Result<ProblemInstance, ProviderError> {
        Err(ProviderError::Unavailable {
            source_name: "test".into(),
            reason: "no problem configured".into(),
        })
    }
}

/// Provider returning a clone of a fixed problem.
#[derive(Debug, Clone)]
pub struct FixedProvider(pub ProblemInstance);

impl ProblemProvider for FixedProvider {
    fn provide(&self) -> Result<ProblemInstance, ProviderError> {
        Ok(self.0.clone())
    }
}
