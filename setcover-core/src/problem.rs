//! Validated BEST-SET-COVER problem instances.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use thiserror::Error;

use crate::{CoveringSet, Element};

/// Errors returned by [`ProblemInstance::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemError {
    /// Two universe elements share a name.
    #[error("element '{name}' is declared more than once")]
    DuplicateElement {
        /// Repeated element name.
        name: String,
    },
    /// Two covering sets share a name.
    #[error("covering set '{name}' is declared more than once")]
    DuplicateSet {
        /// Repeated set name.
        name: String,
    },
    /// A covering set refers to an element outside the universe.
    #[error("covering set '{set}' references element '{element}' outside the universe")]
    UnknownElement {
        /// Name of the offending covering set.
        set: String,
        /// Name of the element missing from the universe.
        element: String,
    },
}

/// A universe of elements plus an ordered collection of covering sets.
///
/// The position of each set in [`ProblemInstance::collection`] is its index.
/// Both solvers break ties by that index, so the order is fixed at
/// construction and never changes.
///
/// # Examples
/// ```
/// use setcover_core::{CoveringSet, Element, ProblemInstance};
///
/// # fn main() -> Result<(), setcover_core::ProblemError> {
/// let a = Element::new("a", 2);
/// let b = Element::new("b", 1);
/// let problem = ProblemInstance::new(
///     [a.clone(), b.clone()],
///     vec![CoveringSet::new("S1", [a]), CoveringSet::new("S2", [b])],
/// )?;
///
/// assert_eq!(problem.universe().len(), 2);
/// assert_eq!(problem.collection().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemInstance {
    universe: BTreeSet<Element>,
    collection: Vec<CoveringSet>,
}

impl ProblemInstance {
    /// Validate and construct a problem instance.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError::DuplicateElement`] when two universe elements
    /// share a name, [`ProblemError::DuplicateSet`] when two covering sets
    /// share a name, and [`ProblemError::UnknownElement`] when a covering set
    /// holds an element that is not part of the universe.
    pub fn new<U>(universe: U, collection: Vec<CoveringSet>) -> Result<Self, ProblemError>
    where
        U: IntoIterator<Item = Element>,
    {
        let mut by_name: BTreeMap<String, Element> = BTreeMap::new();
        for element in universe {
            if by_name.contains_key(&element.name) {
                return Err(ProblemError::DuplicateElement { name: element.name });
            }
            by_name.insert(element.name.clone(), element);
        }

        let mut set_names = HashSet::with_capacity(collection.len());
        for set in &collection {
            if !set_names.insert(set.name()) {
                return Err(ProblemError::DuplicateSet {
                    name: set.name().to_owned(),
                });
            }
            if let Some(stray) = set
                .elements()
                .iter()
                .find(|element| by_name.get(&element.name) != Some(*element))
            {
                return Err(ProblemError::UnknownElement {
                    set: set.name().to_owned(),
                    element: stray.name.clone(),
                });
            }
        }

        Ok(Self {
            universe: by_name.into_values().collect(),
            collection,
        })
    }

    /// Elements that every solution must cover.
    pub const fn universe(&self) -> &BTreeSet<Element> {
        &self.universe
    }

    /// Covering sets in index order.
    pub fn collection(&self) -> &[CoveringSet] {
        &self.collection
    }

    /// Look up an element of the universe by name.
    pub fn element(&self, name: &str) -> Option<&Element> {
        self.universe.iter().find(|element| element.name == name)
    }

    /// Sum of the costs of every universe element, saturating at
    /// [`Cost::MAX`](crate::Cost).
    pub fn universe_cost(&self) -> crate::Cost {
        self.universe
            .iter()
            .fold(0, |total: crate::Cost, element| {
                total.saturating_add(element.cost)
            })
    }
}
