//! Trace representation

use crate::model::store::LabelId;

/// One linear trace: an ordered sequence of labels.
///
/// Empty labels are kept in the sequence; display-time rendering filters
/// them out without touching the underlying data.
#[derive(Debug, Clone)]
pub struct Trace {
    name: String,
    labels: Vec<LabelId>,
}

impl Trace {
    pub fn new(name: String) -> Self {
        Self {
            name,
            labels: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compact name for listings: `Trace$3` becomes `τ3`
    pub fn short_name(&self) -> String {
        self.name.replace("Trace$", "τ")
    }

    pub fn push(&mut self, label: LabelId) {
        self.labels.push(label);
    }

    /// The full label sequence, empty labels included
    pub fn labels(&self) -> &[LabelId] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
