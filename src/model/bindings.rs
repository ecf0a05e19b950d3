//! Skolem variable bindings

use std::collections::{BTreeMap, BTreeSet};

/// Mapping from solver-introduced skolem variable names to the entity names
/// they are bound to. Populated once during import, read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct VariableBindingTable {
    bindings: BTreeMap<String, BTreeSet<String>>,
}

impl VariableBindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, variable: impl Into<String>, entities: BTreeSet<String>) {
        self.bindings.insert(variable.into(), entities);
    }

    pub fn get(&self, variable: &str) -> Option<&BTreeSet<String>> {
        self.bindings.get(variable)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.bindings
            .iter()
            .map(|(name, set)| (name.as_str(), set))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
