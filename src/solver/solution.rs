//! In-memory solution snapshots and the JSON dump format
//!
//! A solver run produces an ordered series of satisfying instances (one per
//! "find next solution" request). The CLI consumes them from a JSON dump:
//!
//! ```json
//! {
//!   "instances": [
//!     {
//!       "relations": {
//!         "EmptyLabel": [["Label$0"]],
//!         "Transition.preState": [["Transition$0", "State$0"]]
//!       },
//!       "skolems": { "$run_e": [["Execution$0"]] }
//!     }
//!   ]
//! }
//! ```

use crate::error::{Error, Result};
use crate::solver::Solution;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// One row of a named relation: an ordered list of atom names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tuple(pub Vec<String>);

impl Tuple {
    pub fn new(atoms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(atoms.into_iter().map(Into::into).collect())
    }

    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// Atom at the given column. Callers must have checked the arity.
    pub fn atom(&self, index: usize) -> &str {
        &self.0[index]
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.join("->"))
    }
}

/// One satisfying instance: named relations plus skolem bindings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolutionInstance {
    /// Relation name -> unordered tuples
    #[serde(default)]
    pub relations: BTreeMap<String, Vec<Tuple>>,

    /// Skolem variable name -> bound tuple set
    #[serde(default)]
    pub skolems: BTreeMap<String, Vec<Tuple>>,
}

impl SolutionInstance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one tuple to a relation, creating the relation if needed
    pub fn add_tuple(&mut self, relation: &str, atoms: &[&str]) {
        self.relations
            .entry(relation.to_string())
            .or_default()
            .push(Tuple::new(atoms.iter().copied()));
    }

    /// Declare a relation with no tuples (present but empty)
    pub fn declare_relation(&mut self, relation: &str) {
        self.relations.entry(relation.to_string()).or_default();
    }

    /// Record a skolem variable binding
    pub fn add_skolem(&mut self, variable: &str, tuples: Vec<Tuple>) {
        self.skolems.insert(variable.to_string(), tuples);
    }
}

impl Solution for SolutionInstance {
    fn relation(&self, name: &str) -> Option<&[Tuple]> {
        self.relations.get(name).map(Vec::as_slice)
    }

    fn skolems(&self) -> Vec<(&str, &[Tuple])> {
        self.skolems
            .iter()
            .map(|(name, tuples)| (name.as_str(), tuples.as_slice()))
            .collect()
    }
}

/// The ordered series of instances produced by one solver session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolutionSet {
    #[serde(default)]
    pub instances: Vec<SolutionInstance>,
}

impl SolutionSet {
    /// Load a solution dump from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::SolutionFile {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&contents).map_err(|e| Error::SolutionFile {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Select one instance by "find next solution" rank.
    ///
    /// An empty set means the solver found no satisfying instance at all;
    /// an index past the end means the solutions ran out.
    pub fn select(&self, index: usize) -> Result<&SolutionInstance> {
        if self.instances.is_empty() {
            return Err(Error::NoSolution);
        }
        self.instances.get(index).ok_or(Error::NoMoreSolutions)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
