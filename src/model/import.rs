//! Solution import - reconstruct the typed entity graph from relation tuples
//!
//! Reconstruction is two-phase. Phase one walks the unary and binary
//! relations: every atom mentioned is interned on first reference and scalar
//! fields (empty-label flags, the four transition fields, execution initial
//! states) are set write-once. Phase two resolves the ordered sequences
//! encoded by the ternary relations: tuples are collected into per-owner
//! sparse position maps, validated dense, then replayed in ascending
//! position order. Tuple order within a relation never matters.
//!
//! A failure while replaying one execution or trace quarantines that entity
//! and is recorded as an issue; the rest of the model is still built. A
//! missing or malformed relation aborts the whole import.

use crate::error::{Error, Result};
use crate::model::execution::StepError;
use crate::model::store::{EntityStore, ExecutionId, TraceId, TransitionId};
use crate::model::transition::TransitionField;
use crate::model::{ImportIssue, LabelId, SolutionModel, VariableBindingTable};
use crate::solver::{Solution, Tuple, relations};
use std::collections::{BTreeMap, BTreeSet};

/// Reconstruct a [`SolutionModel`] from one solved instance
pub fn import_solution(solution: &dyn Solution) -> Result<SolutionModel> {
    SolutionImporter::new(solution).import()
}

type PositionBuffer<T> = BTreeMap<usize, T>;

/// Per-owner sequence buffers plus owners already known to be broken
struct Buffered<K: Ord, T> {
    buffers: BTreeMap<K, PositionBuffer<T>>,
    failed: BTreeMap<K, Error>,
}

impl<K: Ord, T> Buffered<K, T> {
    fn new() -> Self {
        Self {
            buffers: BTreeMap::new(),
            failed: BTreeMap::new(),
        }
    }
}

/// Consumes one solver instance and populates a fresh entity store
pub struct SolutionImporter<'a> {
    solution: &'a dyn Solution,
    store: EntityStore,
    issues: Vec<ImportIssue>,
}

impl<'a> SolutionImporter<'a> {
    pub fn new(solution: &'a dyn Solution) -> Self {
        Self {
            solution,
            store: EntityStore::new(),
            issues: Vec::new(),
        }
    }

    pub fn import(mut self) -> Result<SolutionModel> {
        // Phase 1: entities and scalar fields from unary/binary relations
        self.import_empty_labels()?;
        self.import_transition_fields()?;
        let mut executions = self.import_execution_relations()?;
        let mut traces = self.import_trace_relations()?;

        // Phase 2: ordered sequences, now that every referenced entity exists
        let executions = self.replay_executions(&mut executions);
        let traces = self.replay_traces(&mut traces);

        let bindings = self.import_bindings();

        tracing::debug!(
            executions = executions.len(),
            traces = traces.len(),
            issues = self.issues.len(),
            "solution imported"
        );

        Ok(SolutionModel::new(
            self.store, executions, traces, bindings, self.issues,
        ))
    }

    /// Tuples of a relation the schema requires to be present
    fn required(&self, name: &str) -> Result<&'a [Tuple]> {
        self.solution
            .relation(name)
            .ok_or_else(|| Error::MissingRelation(name.to_string()))
    }

    fn import_empty_labels(&mut self) -> Result<()> {
        let rel = relations::EMPTY_LABEL;
        for tuple in self.required(rel)? {
            ensure_arity(rel, tuple, 1)?;
            let id = self.store.label(tuple.atom(0));
            self.store.label_mut(id).set_empty();
        }
        Ok(())
    }

    fn import_transition_fields(&mut self) -> Result<()> {
        use TransitionField::*;

        for (rel, field) in [
            (relations::TRANSITION_PRESTATE, Prestate),
            (relations::TRANSITION_POSTSTATE, Poststate),
            (relations::TRANSITION_TRIGGER, Trigger),
            (relations::TRANSITION_EFFECT, Effect),
        ] {
            for tuple in self.required(rel)? {
                ensure_arity(rel, tuple, 2)?;
                let tid = self.store.transition(tuple.atom(0));

                // On conflict the setter hands back the previous value;
                // resolve it to a name for the report.
                let conflict = match field {
                    Prestate => {
                        let sid = self.store.state(tuple.atom(1));
                        match self.store.transition_mut(tid).set_prestate(sid) {
                            Ok(()) => None,
                            Err(prev) => Some(self.store[prev].name().to_string()),
                        }
                    }
                    Poststate => {
                        let sid = self.store.state(tuple.atom(1));
                        match self.store.transition_mut(tid).set_poststate(sid) {
                            Ok(()) => None,
                            Err(prev) => Some(self.store[prev].name().to_string()),
                        }
                    }
                    Trigger => {
                        let lid = self.store.label(tuple.atom(1));
                        match self.store.transition_mut(tid).set_trigger(lid) {
                            Ok(()) => None,
                            Err(prev) => Some(self.store[prev].name().to_string()),
                        }
                    }
                    Effect => {
                        let lid = self.store.label(tuple.atom(1));
                        match self.store.transition_mut(tid).set_effect(lid) {
                            Ok(()) => None,
                            Err(prev) => Some(self.store[prev].name().to_string()),
                        }
                    }
                };

                if let Some(previous) = conflict {
                    return Err(Error::ConflictingField {
                        entity: self.store[tid].name().to_string(),
                        field: field.name(),
                        previous,
                        new: tuple.atom(1).to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn import_execution_relations(&mut self) -> Result<Buffered<ExecutionId, TransitionId>> {
        let mut buffered = Buffered::new();

        let rel = relations::EXECUTION_INITIAL_STATE;
        for tuple in self.required(rel)? {
            ensure_arity(rel, tuple, 2)?;
            let eid = self.store.execution(tuple.atom(0));
            let sid = self.store.state(tuple.atom(1));
            buffered.buffers.entry(eid).or_default();
            if let Err(prev) = self.store.execution_mut(eid).init_with(sid) {
                let previous = self.store[prev].name().to_string();
                buffered.failed.entry(eid).or_insert(Error::ConflictingField {
                    entity: self.store[eid].name().to_string(),
                    field: "initial state",
                    previous,
                    new: tuple.atom(1).to_string(),
                });
            }
        }

        let rel = relations::EXECUTION_TRANSITIONS;
        for tuple in self.required(rel)? {
            ensure_arity(rel, tuple, 3)?;
            let eid = self.store.execution(tuple.atom(0));
            let position = parse_position(rel, tuple)?;
            let tid = self.store.transition(tuple.atom(2));

            let buffer = buffered.buffers.entry(eid).or_default();
            if let Some(prev) = buffer.insert(position, tid)
                && prev != tid
            {
                let entity = self.store[eid].name().to_string();
                buffered
                    .failed
                    .entry(eid)
                    .or_insert_with(|| Error::dense_index(
                        entity,
                        format!("duplicate position {position}"),
                    ));
            }
        }

        Ok(buffered)
    }

    fn import_trace_relations(&mut self) -> Result<Buffered<TraceId, LabelId>> {
        let mut buffered = Buffered::new();

        let rel = relations::TRACE;
        for tuple in self.required(rel)? {
            ensure_arity(rel, tuple, 1)?;
            let tid = self.store.trace(tuple.atom(0));
            buffered.buffers.entry(tid).or_default();
        }

        let rel = relations::TRACE_CONTENT;
        for tuple in self.required(rel)? {
            ensure_arity(rel, tuple, 3)?;
            let tid = self.store.trace(tuple.atom(0));
            let position = parse_position(rel, tuple)?;
            let lid = self.store.label(tuple.atom(2));

            let buffer = buffered.buffers.entry(tid).or_default();
            if let Some(prev) = buffer.insert(position, lid)
                && prev != lid
            {
                let entity = self.store[tid].name().to_string();
                buffered
                    .failed
                    .entry(tid)
                    .or_insert_with(|| Error::dense_index(
                        entity,
                        format!("duplicate position {position}"),
                    ));
            }
        }

        Ok(buffered)
    }

    /// Replay step buffers in ascending position order, name order across
    /// executions. Broken executions are quarantined, the rest proceed.
    fn replay_executions(
        &mut self,
        buffered: &mut Buffered<ExecutionId, TransitionId>,
    ) -> Vec<ExecutionId> {
        let mut order: Vec<ExecutionId> = buffered.buffers.keys().copied().collect();
        order.sort_by(|a, b| self.store[*a].name().cmp(self.store[*b].name()));

        let mut reconstructed = Vec::new();
        for eid in order {
            let entity = self.store[eid].name().to_string();
            if let Some(error) = buffered.failed.remove(&eid) {
                self.quarantine(entity, error);
                continue;
            }
            match self.replay_execution(eid, &buffered.buffers[&eid]) {
                Ok(()) => reconstructed.push(eid),
                Err(error) => self.quarantine(entity, error),
            }
        }
        reconstructed
    }

    fn replay_execution(
        &mut self,
        eid: ExecutionId,
        buffer: &PositionBuffer<TransitionId>,
    ) -> Result<()> {
        let execution = self.store[eid].name().to_string();
        if self.store[eid].initial_state().is_none() {
            return Err(Error::UninitializedExecution(execution));
        }
        expect_dense(&execution, buffer.keys().copied())?;

        for &tid in buffer.values() {
            let transition = self.store[tid].name().to_string();
            let complete =
                self.store[tid]
                    .require_complete()
                    .map_err(|field| Error::DanglingField {
                        transition: transition.clone(),
                        field: field.name(),
                    })?;

            match self.store.execution_mut(eid).step(tid, complete) {
                Ok(()) => {}
                Err(StepError::Uninitialized) => {
                    return Err(Error::UninitializedExecution(execution));
                }
                Err(StepError::WalkInconsistency { at }) => {
                    return Err(Error::WalkInconsistency {
                        execution,
                        transition,
                        expected: self.store[complete.prestate].name().to_string(),
                        found: self.store[at].name().to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn replay_traces(&mut self, buffered: &mut Buffered<TraceId, LabelId>) -> Vec<TraceId> {
        let mut order: Vec<TraceId> = buffered.buffers.keys().copied().collect();
        order.sort_by(|a, b| self.store[*a].name().cmp(self.store[*b].name()));

        let mut reconstructed = Vec::new();
        for tid in order {
            let entity = self.store[tid].name().to_string();
            if let Some(error) = buffered.failed.remove(&tid) {
                self.quarantine(entity, error);
                continue;
            }
            let buffer = &buffered.buffers[&tid];
            match expect_dense(&entity, buffer.keys().copied()) {
                Ok(()) => {
                    for &lid in buffer.values() {
                        self.store.trace_mut(tid).push(lid);
                    }
                    reconstructed.push(tid);
                }
                Err(error) => self.quarantine(entity, error),
            }
        }
        reconstructed
    }

    fn import_bindings(&mut self) -> VariableBindingTable {
        let mut table = VariableBindingTable::new();
        for (variable, tuples) in self.solution.skolems() {
            let entities: BTreeSet<String> = tuples.iter().map(Tuple::to_string).collect();
            table.insert(variable, entities);
        }
        table
    }

    fn quarantine(&mut self, entity: String, error: Error) {
        tracing::warn!(%entity, %error, "entity quarantined during import");
        self.issues.push(ImportIssue { entity, error });
    }
}

fn ensure_arity(relation: &str, tuple: &Tuple, arity: usize) -> Result<()> {
    if tuple.arity() != arity {
        return Err(Error::malformed_relation(
            relation,
            format!("expected arity {arity}, found `{tuple}`"),
        ));
    }
    Ok(())
}

/// Position column of a ternary relation tuple
fn parse_position(relation: &str, tuple: &Tuple) -> Result<usize> {
    tuple.atom(1).parse().map_err(|_| {
        Error::malformed_relation(
            relation,
            format!("position `{}` is not a non-negative integer", tuple.atom(1)),
        )
    })
}

/// Positions must cover exactly 0..n with no gaps
fn expect_dense(entity: &str, positions: impl Iterator<Item = usize>) -> Result<()> {
    for (expected, actual) in positions.enumerate() {
        if actual != expected {
            return Err(Error::dense_index(
                entity,
                format!("expected position {expected}, found {actual}"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolutionInstance;
    use crate::solver::mock::sample_instance;

    /// Minimal instance: every required relation present but empty
    fn empty_instance() -> SolutionInstance {
        let mut instance = SolutionInstance::new();
        for rel in [
            relations::EMPTY_LABEL,
            relations::TRANSITION_PRESTATE,
            relations::TRANSITION_POSTSTATE,
            relations::TRANSITION_TRIGGER,
            relations::TRANSITION_EFFECT,
            relations::EXECUTION_INITIAL_STATE,
            relations::EXECUTION_TRANSITIONS,
            relations::TRACE,
            relations::TRACE_CONTENT,
        ] {
            instance.declare_relation(rel);
        }
        instance
    }

    /// One complete transition T between the two named states
    fn add_transition(instance: &mut SolutionInstance, t: &str, pre: &str, post: &str) {
        instance.add_tuple(relations::TRANSITION_PRESTATE, &[t, pre]);
        instance.add_tuple(relations::TRANSITION_POSTSTATE, &[t, post]);
        instance.add_tuple(relations::TRANSITION_TRIGGER, &[t, "Label$1"]);
        instance.add_tuple(relations::TRANSITION_EFFECT, &[t, "Label$2"]);
    }

    #[test]
    fn test_import_sample_instance() {
        let model = import_solution(&sample_instance()).unwrap();

        assert!(model.issues().is_empty());
        assert_eq!(model.executions().len(), 2);
        assert_eq!(model.traces().len(), 2);

        // Execution$0 walks State$0 -> State$1 -> State$2
        let e0 = model.executions()[0];
        let exec = &model.store()[e0];
        assert_eq!(exec.name(), "Execution$0");
        assert_eq!(exec.len(), 2);
        let final_state = exec.current_state().unwrap();
        assert_eq!(model.store()[final_state].name(), "State$2");

        // Execution$1 repeats the self loop before leaving
        let e1 = model.executions()[1];
        assert_eq!(model.store()[e1].len(), 3);

        // The empty label was flagged
        let trace = &model.store()[model.traces()[0]];
        let flags: Vec<bool> = trace
            .labels()
            .iter()
            .map(|&l| model.store()[l].is_empty())
            .collect();
        assert_eq!(flags, vec![false, true, false]);

        // Skolem binding
        let set = model.bindings().get("$run_e").unwrap();
        assert!(set.contains("Execution$0"));
    }

    #[test]
    fn test_missing_relation_aborts_import() {
        let mut instance = empty_instance();
        instance.relations.remove(relations::TRANSITION_TRIGGER);

        let err = import_solution(&instance).unwrap_err();
        assert!(matches!(err, Error::MissingRelation(name) if name == "Transition.trigger"));
    }

    #[test]
    fn test_order_independence() {
        // Permute tuples within each relation; the models must agree.
        let forward = sample_instance();
        let mut reversed = sample_instance();
        for tuples in reversed.relations.values_mut() {
            tuples.reverse();
        }

        let a = import_solution(&forward).unwrap();
        let b = import_solution(&reversed).unwrap();

        assert_eq!(a.executions().len(), b.executions().len());
        for (&ea, &eb) in a.executions().iter().zip(b.executions()) {
            assert_eq!(a.execution_summary(ea), b.execution_summary(eb));
        }
        for (&ta, &tb) in a.traces().iter().zip(b.traces()) {
            assert_eq!(a.trace_summary(ta), b.trace_summary(tb));
        }
    }

    #[test]
    fn test_reimport_is_idempotent() {
        let instance = sample_instance();
        let a = import_solution(&instance).unwrap();
        let b = import_solution(&instance).unwrap();

        let names = |m: &SolutionModel| -> Vec<String> {
            m.store()
                .transitions()
                .map(|(_, t)| t.name().to_string())
                .collect()
        };
        assert_eq!(names(&a), names(&b));
        assert_eq!(a.executions().len(), b.executions().len());
    }

    #[test]
    fn test_dense_positions_succeed() {
        let mut instance = empty_instance();
        add_transition(&mut instance, "Transition$0", "State$0", "State$1");
        add_transition(&mut instance, "Transition$1", "State$1", "State$2");
        add_transition(&mut instance, "Transition$2", "State$2", "State$3");
        instance.add_tuple(relations::EXECUTION_INITIAL_STATE, &["Execution$0", "State$0"]);
        instance.add_tuple(
            relations::EXECUTION_TRANSITIONS,
            &["Execution$0", "2", "Transition$2"],
        );
        instance.add_tuple(
            relations::EXECUTION_TRANSITIONS,
            &["Execution$0", "0", "Transition$0"],
        );
        instance.add_tuple(
            relations::EXECUTION_TRANSITIONS,
            &["Execution$0", "1", "Transition$1"],
        );

        let model = import_solution(&instance).unwrap();
        assert!(model.issues().is_empty());
        let exec = &model.store()[model.executions()[0]];
        let steps: Vec<&str> = exec
            .transitions()
            .iter()
            .map(|&t| model.store()[t].name())
            .collect();
        assert_eq!(steps, vec!["Transition$0", "Transition$1", "Transition$2"]);
    }

    #[test]
    fn test_position_gap_quarantines_execution() {
        let mut instance = empty_instance();
        add_transition(&mut instance, "Transition$0", "State$0", "State$1");
        add_transition(&mut instance, "Transition$1", "State$1", "State$2");
        add_transition(&mut instance, "Transition$2", "State$2", "State$3");
        // Positions {0, 1, 3}: gap at 2
        instance.add_tuple(relations::EXECUTION_INITIAL_STATE, &["Execution$0", "State$0"]);
        instance.add_tuple(
            relations::EXECUTION_TRANSITIONS,
            &["Execution$0", "0", "Transition$0"],
        );
        instance.add_tuple(
            relations::EXECUTION_TRANSITIONS,
            &["Execution$0", "1", "Transition$1"],
        );
        instance.add_tuple(
            relations::EXECUTION_TRANSITIONS,
            &["Execution$0", "3", "Transition$2"],
        );
        // A healthy sibling that must survive
        instance.add_tuple(relations::EXECUTION_INITIAL_STATE, &["Execution$1", "State$1"]);
        instance.add_tuple(
            relations::EXECUTION_TRANSITIONS,
            &["Execution$1", "0", "Transition$1"],
        );

        let model = import_solution(&instance).unwrap();
        assert_eq!(model.executions().len(), 1);
        assert_eq!(model.store()[model.executions()[0]].name(), "Execution$1");

        assert_eq!(model.issues().len(), 1);
        let issue = &model.issues()[0];
        assert_eq!(issue.entity, "Execution$0");
        assert!(matches!(issue.error, Error::DenseIndex { .. }));
    }

    #[test]
    fn test_duplicate_position_quarantines_execution() {
        let mut instance = empty_instance();
        add_transition(&mut instance, "Transition$0", "State$0", "State$1");
        add_transition(&mut instance, "Transition$1", "State$0", "State$2");
        instance.add_tuple(relations::EXECUTION_INITIAL_STATE, &["Execution$0", "State$0"]);
        instance.add_tuple(
            relations::EXECUTION_TRANSITIONS,
            &["Execution$0", "0", "Transition$0"],
        );
        instance.add_tuple(
            relations::EXECUTION_TRANSITIONS,
            &["Execution$0", "0", "Transition$1"],
        );

        let model = import_solution(&instance).unwrap();
        assert!(model.executions().is_empty());
        assert!(matches!(model.issues()[0].error, Error::DenseIndex { .. }));
    }

    #[test]
    fn test_walk_inconsistency_quarantines_execution() {
        let mut instance = empty_instance();
        add_transition(&mut instance, "Transition$0", "State$0", "State$1");
        // Starts at State$5, nowhere near the walk
        add_transition(&mut instance, "Transition$1", "State$5", "State$6");
        instance.add_tuple(relations::EXECUTION_INITIAL_STATE, &["Execution$0", "State$0"]);
        instance.add_tuple(
            relations::EXECUTION_TRANSITIONS,
            &["Execution$0", "0", "Transition$0"],
        );
        instance.add_tuple(
            relations::EXECUTION_TRANSITIONS,
            &["Execution$0", "1", "Transition$1"],
        );

        let model = import_solution(&instance).unwrap();
        assert!(model.executions().is_empty());
        match &model.issues()[0].error {
            Error::WalkInconsistency {
                execution,
                transition,
                expected,
                found,
            } => {
                assert_eq!(execution, "Execution$0");
                assert_eq!(transition, "Transition$1");
                assert_eq!(expected, "State$5");
                assert_eq!(found, "State$1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dangling_field_quarantines_execution() {
        let mut instance = empty_instance();
        // Transition$0 has no effect relation entry
        instance.add_tuple(relations::TRANSITION_PRESTATE, &["Transition$0", "State$0"]);
        instance.add_tuple(relations::TRANSITION_POSTSTATE, &["Transition$0", "State$1"]);
        instance.add_tuple(relations::TRANSITION_TRIGGER, &["Transition$0", "Label$1"]);
        instance.add_tuple(relations::EXECUTION_INITIAL_STATE, &["Execution$0", "State$0"]);
        instance.add_tuple(
            relations::EXECUTION_TRANSITIONS,
            &["Execution$0", "0", "Transition$0"],
        );

        let model = import_solution(&instance).unwrap();
        assert!(model.executions().is_empty());
        match &model.issues()[0].error {
            Error::DanglingField { transition, field } => {
                assert_eq!(transition, "Transition$0");
                assert_eq!(*field, "effect");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_uninitialized_execution_is_quarantined() {
        let mut instance = empty_instance();
        add_transition(&mut instance, "Transition$0", "State$0", "State$1");
        // Step relation mentions an execution that never got an initial state
        instance.add_tuple(
            relations::EXECUTION_TRANSITIONS,
            &["Execution$9", "0", "Transition$0"],
        );

        let model = import_solution(&instance).unwrap();
        assert!(model.executions().is_empty());
        assert!(matches!(
            model.issues()[0].error,
            Error::UninitializedExecution(_)
        ));
    }

    #[test]
    fn test_conflicting_transition_field_aborts() {
        let mut instance = empty_instance();
        instance.add_tuple(relations::TRANSITION_PRESTATE, &["Transition$0", "State$0"]);
        instance.add_tuple(relations::TRANSITION_PRESTATE, &["Transition$0", "State$1"]);

        let err = import_solution(&instance).unwrap_err();
        match err {
            Error::ConflictingField {
                entity,
                field,
                previous,
                new,
            } => {
                assert_eq!(entity, "Transition$0");
                assert_eq!(field, "prestate");
                assert_eq!(previous, "State$0");
                assert_eq!(new, "State$1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_repeated_identical_field_tuple_is_idempotent() {
        let mut instance = empty_instance();
        add_transition(&mut instance, "Transition$0", "State$0", "State$1");
        instance.add_tuple(relations::TRANSITION_PRESTATE, &["Transition$0", "State$0"]);

        assert!(import_solution(&instance).is_ok());
    }

    #[test]
    fn test_trace_gap_quarantines_trace() {
        let mut instance = empty_instance();
        instance.add_tuple(relations::TRACE, &["Trace$0"]);
        instance.add_tuple(relations::TRACE, &["Trace$1"]);
        instance.add_tuple(relations::TRACE_CONTENT, &["Trace$0", "0", "Label$1"]);
        instance.add_tuple(relations::TRACE_CONTENT, &["Trace$0", "2", "Label$2"]);
        instance.add_tuple(relations::TRACE_CONTENT, &["Trace$1", "0", "Label$1"]);

        let model = import_solution(&instance).unwrap();
        assert_eq!(model.traces().len(), 1);
        assert_eq!(model.store()[model.traces()[0]].name(), "Trace$1");
        assert_eq!(model.issues().len(), 1);
        assert_eq!(model.issues()[0].entity, "Trace$0");
    }

    #[test]
    fn test_malformed_position_aborts() {
        let mut instance = empty_instance();
        instance.add_tuple(relations::EXECUTION_INITIAL_STATE, &["Execution$0", "State$0"]);
        instance.add_tuple(
            relations::EXECUTION_TRANSITIONS,
            &["Execution$0", "first", "Transition$0"],
        );

        let err = import_solution(&instance).unwrap_err();
        assert!(matches!(err, Error::MalformedRelation { .. }));
    }

    #[test]
    fn test_empty_instance_imports_empty_model() {
        let model = import_solution(&empty_instance()).unwrap();
        assert!(model.executions().is_empty());
        assert!(model.traces().is_empty());
        assert!(model.issues().is_empty());
        assert!(model.bindings().is_empty());
    }
}
