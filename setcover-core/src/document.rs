//! Serialisable description of a problem instance.
//!
//! Covering sets refer to universe elements by name, so element costs are
//! stated exactly once and set costs are always derived.
//!
//! ```json
//! {
//!   "elements": [{ "name": "a", "cost": 3 }, { "name": "b", "cost": 1 }],
//!   "sets": [{ "name": "S1", "elements": ["a", "b"] }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::{Cost, CoveringSet, Element, ProblemError, ProblemInstance};

/// One universe element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDocument {
    /// Element name.
    pub name: String,
    /// Element cost.
    pub cost: Cost,
}

/// One covering set, listing element names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetDocument {
    /// Set name.
    pub name: String,
    /// Names of the elements in the set.
    pub elements: Vec<String>,
}

/// A whole problem: the universe and the ordered collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDocument {
    /// Universe elements.
    pub elements: Vec<ElementDocument>,
    /// Covering sets in index order.
    #[serde(default)]
    pub sets: Vec<SetDocument>,
}

impl TryFrom<ProblemDocument> for ProblemInstance {
    type Error = ProblemError;

    fn try_from(document: ProblemDocument) -> Result<Self, Self::Error> {
        let universe: Vec<Element> = document
            .elements
            .into_iter()
            .map(|element| Element::new(element.name, element.cost))
            .collect();

        let mut collection = Vec::with_capacity(document.sets.len());
        for set in document.sets {
            let mut members = Vec::with_capacity(set.elements.len());
            for name in set.elements {
                let Some(element) = universe.iter().find(|element| element.name == name) else {
                    return Err(ProblemError::UnknownElement {
                        set: set.name,
                        element: name,
                    });
                };
                members.push(element.clone());
            }
            collection.push(CoveringSet::new(set.name, members));
        }

        Self::new(universe, collection)
    }
}

impl From<&ProblemInstance> for ProblemDocument {
    fn from(problem: &ProblemInstance) -> Self {
        Self {
            elements: problem
                .universe()
                .iter()
                .map(|element| ElementDocument {
                    name: element.name.clone(),
                    cost: element.cost,
                })
                .collect(),
            sets: problem
                .collection()
                .iter()
                .map(|set| SetDocument {
                    name: set.name().to_owned(),
                    elements: set.elements().iter().map(|e| e.name.clone()).collect(),
                })
                .collect(),
        }
    }
}
