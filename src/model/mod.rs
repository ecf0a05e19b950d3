//! Model module - Typed entities reconstructed from solver output
//!
//! One imported solution snapshot becomes one [`SolutionModel`]: an
//! [`EntityStore`] owning every state, label, transition, execution, and
//! trace, plus the skolem binding table and any per-entity import issues.
//! Each snapshot gets a fresh store; nothing is carried over between
//! solutions.

use crate::error::Error;

pub mod bindings;
pub mod execution;
pub mod import;
pub mod label;
pub mod state;
pub mod store;
pub mod trace;
pub mod transition;

// Re-export key types
pub use bindings::VariableBindingTable;
pub use execution::{Execution, StepError};
pub use import::{SolutionImporter, import_solution};
pub use label::Label;
pub use state::State;
pub use store::{
    EntityStore, ExecutionId, Id, InternTable, LabelId, StateId, TraceId, TransitionId,
};
pub use trace::Trace;
pub use transition::{CompleteTransition, Transition, TransitionField};

/// One execution or trace that failed to reconstruct and was left out of
/// the model's listings
#[derive(Debug)]
pub struct ImportIssue {
    pub entity: String,
    pub error: Error,
}

/// The reconstructed model of one solution snapshot
#[derive(Debug)]
pub struct SolutionModel {
    store: EntityStore,
    executions: Vec<ExecutionId>,
    traces: Vec<TraceId>,
    bindings: VariableBindingTable,
    issues: Vec<ImportIssue>,
}

impl SolutionModel {
    pub(crate) fn new(
        store: EntityStore,
        executions: Vec<ExecutionId>,
        traces: Vec<TraceId>,
        bindings: VariableBindingTable,
        issues: Vec<ImportIssue>,
    ) -> Self {
        Self {
            store,
            executions,
            traces,
            bindings,
            issues,
        }
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Successfully reconstructed executions, in name order
    pub fn executions(&self) -> &[ExecutionId] {
        &self.executions
    }

    /// Successfully reconstructed traces, in name order
    pub fn traces(&self) -> &[TraceId] {
        &self.traces
    }

    pub fn bindings(&self) -> &VariableBindingTable {
        &self.bindings
    }

    /// Executions and traces that failed to reconstruct
    pub fn issues(&self) -> &[ImportIssue] {
        &self.issues
    }

    /// One-line rendering of an execution:
    /// `Execution$0: State$0 --(Transition$0: Label$1 | Label$0)--> State$1`
    pub fn execution_summary(&self, id: ExecutionId) -> String {
        let execution = &self.store[id];
        let mut out = format!(
            "{}: {}",
            execution.name(),
            self.state_name(execution.initial_state())
        );
        for &tid in execution.transitions() {
            let transition = &self.store[tid];
            out.push_str(&format!(
                " --({}: {} | {})--> {}",
                transition.name(),
                self.label_name(transition.trigger()),
                self.label_name(transition.effect()),
                self.state_name(transition.poststate()),
            ));
        }
        out
    }

    /// One-line rendering of a trace with empty labels filtered out:
    /// `Trace$0: Label$1 -> Label$2`
    pub fn trace_summary(&self, id: TraceId) -> String {
        let trace = &self.store[id];
        let visible: Vec<&str> = trace
            .labels()
            .iter()
            .map(|&lid| &self.store[lid])
            .filter(|label| !label.is_empty())
            .map(Label::name)
            .collect();
        format!("{}: {}", trace.name(), visible.join(" -> "))
    }

    fn state_name(&self, id: Option<StateId>) -> &str {
        id.map(|s| self.store[s].name()).unwrap_or("?")
    }

    fn label_name(&self, id: Option<LabelId>) -> &str {
        id.map(|l| self.store[l].name()).unwrap_or("?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::mock::sample_instance;

    #[test]
    fn test_execution_summary() {
        let model = import_solution(&sample_instance()).unwrap();
        let summary = model.execution_summary(model.executions()[0]);
        assert_eq!(
            summary,
            "Execution$0: State$0 \
             --(Transition$0: Label$1 | Label$0)--> State$1 \
             --(Transition$1: Label$2 | Label$1)--> State$2"
        );
    }

    #[test]
    fn test_trace_summary_filters_empty_labels() {
        let model = import_solution(&sample_instance()).unwrap();
        // Underlying sequence is [Label$1, Label$0(empty), Label$2]
        let id = model.traces()[0];
        assert_eq!(model.store()[id].len(), 3);
        assert_eq!(model.trace_summary(id), "Trace$0: Label$1 -> Label$2");
    }
}
