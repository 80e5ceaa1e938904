//! Costed elements and the covering sets built from them.

use std::collections::BTreeSet;

/// Cost of an element, a covering set, or a candidate.
///
/// Costs are non-negative by construction, so a negative budget cannot be
/// expressed.
pub type Cost = u64;

/// A named member of the universe with an associated cost.
///
/// Elements order by name first, so sets of elements iterate alphabetically.
///
/// # Examples
/// ```
/// use setcover_core::Element;
///
/// let element = Element::new("a", 3);
///
/// assert_eq!(element.name, "a");
/// assert_eq!(element.cost, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Element {
    /// Name identifying the element within one problem instance.
    pub name: String,
    /// Cost incurred for covering the element.
    pub cost: Cost,
}

impl Element {
    /// Construct an element from a name and a cost.
    pub fn new(name: impl Into<String>, cost: Cost) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

/// A named subset of the universe.
///
/// The cost is the sum of the member elements' costs. It is computed once in
/// [`CoveringSet::new`] and cannot be set independently, so it always matches
/// the elements.
///
/// # Examples
/// ```
/// use setcover_core::{CoveringSet, Element};
///
/// let set = CoveringSet::new("S4", [Element::new("b", 3), Element::new("f", 1)]);
///
/// assert_eq!(set.name(), "S4");
/// assert_eq!(set.cost(), 4);
/// assert_eq!(set.elements().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoveringSet {
    name: String,
    elements: BTreeSet<Element>,
    cost: Cost,
}

impl CoveringSet {
    /// Construct a covering set, caching the sum of its element costs.
    ///
    /// Duplicate elements collapse into one. The sum saturates at
    /// [`Cost::MAX`].
    pub fn new<I>(name: impl Into<String>, elements: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        let elements: BTreeSet<Element> = elements.into_iter().collect();
        let cost = elements
            .iter()
            .fold(0, |total: Cost, element| total.saturating_add(element.cost));
        Self {
            name: name.into(),
            elements,
            cost,
        }
    }

    /// Name of the set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Elements covered by the set, in name order.
    pub fn elements(&self) -> &BTreeSet<Element> {
        &self.elements
    }

    /// Sum of the element costs.
    pub const fn cost(&self) -> Cost {
        self.cost
    }
}
