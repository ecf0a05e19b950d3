//! Graph module - Project the reconstructed model into directed graphs
//!
//! Two projections feed the rendering sink: the whole transition relation
//! (every state a transition touches, every complete transition as an edge)
//! and single executions (the walk's states, edges numbered by step so the
//! same physical transition stays distinguishable per occurrence).

use crate::error::{Error, Result};
use crate::model::{ExecutionId, SolutionModel, StateId, TransitionId};
use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use std::collections::HashMap;

pub mod dot;

/// Vertex payload: one state, with its display name resolved
#[derive(Debug, Clone)]
pub struct StateVertex {
    pub id: StateId,
    pub name: String,
}

/// Edge payload: one transition, with its `trigger/effect` label resolved
#[derive(Debug, Clone)]
pub struct TransitionEdge {
    pub id: TransitionId,
    pub name: String,
    pub label: String,
}

/// One occurrence of a transition within an execution, tagged with its
/// 1-based step position. The same physical transition may appear at
/// several positions; the ordinal gives each occurrence its own identity.
#[derive(Debug, Clone)]
pub struct NumberedTransition {
    pub ordinal: usize,
    pub edge: TransitionEdge,
}

impl NumberedTransition {
    pub fn display_label(&self) -> String {
        format!("({}) {}", self.ordinal, self.edge.label)
    }
}

/// A directed graph over states.
///
/// Wraps the graph structure together with a state-id lookup table so each
/// state is represented by exactly one vertex.
#[derive(Debug)]
pub struct SolutionGraph<E> {
    pub graph: StableGraph<StateVertex, E>,
    state_index: HashMap<StateId, NodeIndex>,
}

pub type TransitionsGraph = SolutionGraph<TransitionEdge>;
pub type ExecutionGraph = SolutionGraph<NumberedTransition>;

impl<E> SolutionGraph<E> {
    fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            state_index: HashMap::new(),
        }
    }

    fn ensure_state(&mut self, model: &SolutionModel, id: StateId) -> NodeIndex {
        if let Some(&index) = self.state_index.get(&id) {
            return index;
        }
        let index = self.graph.add_node(StateVertex {
            id,
            name: model.store()[id].name().to_string(),
        });
        self.state_index.insert(id, index);
        index
    }

    pub fn node_index(&self, id: StateId) -> Option<NodeIndex> {
        self.state_index.get(&id).copied()
    }

    pub fn contains_state(&self, id: StateId) -> bool {
        self.state_index.contains_key(&id)
    }

    /// Find all states without incoming edges
    pub fn initial_states(&self) -> Vec<&StateVertex> {
        self.graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .edges_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .filter_map(|idx| self.graph.node_weight(idx))
            .collect()
    }

    /// Find all states without outgoing edges
    pub fn terminal_states(&self) -> Vec<&StateVertex> {
        self.graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .edges_directed(idx, Direction::Outgoing)
                    .next()
                    .is_none()
            })
            .filter_map(|idx| self.graph.node_weight(idx))
            .collect()
    }

    /// Get graph statistics
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            total_states: self.graph.node_count(),
            total_transitions: self.graph.edge_count(),
            initial_states: self.initial_states().len(),
            terminal_states: self.terminal_states().len(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GraphStats {
    pub total_states: usize,
    pub total_transitions: usize,
    pub initial_states: usize,
    pub terminal_states: usize,
}

// The prestate/poststate pair, or the data-integrity error naming what is
// missing. Trigger/effect gaps only degrade the edge label.
fn endpoints(model: &SolutionModel, tid: TransitionId) -> Result<(StateId, StateId)> {
    let transition = &model.store()[tid];
    let missing = |field: &'static str| Error::DanglingField {
        transition: transition.name().to_string(),
        field,
    };
    let pre = transition.prestate().ok_or_else(|| missing("prestate"))?;
    let post = transition.poststate().ok_or_else(|| missing("poststate"))?;
    Ok((pre, post))
}

fn resolve_edge(model: &SolutionModel, tid: TransitionId) -> TransitionEdge {
    let store = model.store();
    let transition = &store[tid];
    let label_name = |id: Option<crate::model::store::LabelId>| match id {
        Some(lid) => store[lid].name(),
        None => "?",
    };
    TransitionEdge {
        id: tid,
        name: transition.name().to_string(),
        label: format!(
            "{}/{}",
            label_name(transition.trigger()),
            label_name(transition.effect())
        ),
    }
}

/// Build the whole-model graph: every state referenced as some transition's
/// prestate or poststate, whether or not any execution visits it, and every
/// transition as an edge between its endpoints.
pub fn transitions_graph(model: &SolutionModel) -> Result<TransitionsGraph> {
    let mut graph = SolutionGraph::new();
    for (tid, _) in model.store().transitions() {
        let (pre, post) = endpoints(model, tid)?;
        let from = graph.ensure_state(model, pre);
        let to = graph.ensure_state(model, post);
        graph.graph.add_edge(from, to, resolve_edge(model, tid));
    }
    tracing::debug!(
        states = graph.graph.node_count(),
        transitions = graph.graph.edge_count(),
        "built transitions graph"
    );
    Ok(graph)
}

/// Build the graph of one execution: its initial state plus every visited
/// poststate, with one numbered edge per step.
pub fn execution_graph(model: &SolutionModel, id: ExecutionId) -> Result<ExecutionGraph> {
    let execution = &model.store()[id];
    let initial = execution
        .initial_state()
        .ok_or_else(|| Error::UninitializedExecution(execution.name().to_string()))?;

    let mut graph = SolutionGraph::new();
    graph.ensure_state(model, initial);

    for (position, &tid) in execution.transitions().iter().enumerate() {
        let (pre, post) = endpoints(model, tid)?;
        let from = graph.ensure_state(model, pre);
        let to = graph.ensure_state(model, post);
        graph.graph.add_edge(
            from,
            to,
            NumberedTransition {
                ordinal: position + 1,
                edge: resolve_edge(model, tid),
            },
        );
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::import_solution;
    use crate::solver::SolutionInstance;
    use crate::solver::mock::sample_instance;
    use crate::solver::relations;

    fn declare_all(instance: &mut SolutionInstance) {
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
    }

    #[test]
    fn test_transitions_graph_from_sample() {
        let model = import_solution(&sample_instance()).unwrap();
        let graph = transitions_graph(&model).unwrap();

        // States $0..$2, transitions $0..$2 (one is a self loop)
        assert_eq!(graph.graph.node_count(), 3);
        assert_eq!(graph.graph.edge_count(), 3);

        let stats = graph.stats();
        assert_eq!(stats.total_states, 3);
        assert_eq!(stats.total_transitions, 3);
        assert_eq!(stats.initial_states, 1); // State$0 has no incoming edge
        assert_eq!(stats.terminal_states, 1); // State$2 has no outgoing edge
    }

    #[test]
    fn test_transitions_graph_includes_unvisited_states() {
        // A transition between states no execution ever visits
        let mut instance = sample_instance();
        instance.add_tuple(relations::TRANSITION_PRESTATE, &["Transition$9", "State$8"]);
        instance.add_tuple(relations::TRANSITION_POSTSTATE, &["Transition$9", "State$9"]);
        instance.add_tuple(relations::TRANSITION_TRIGGER, &["Transition$9", "Label$1"]);
        instance.add_tuple(relations::TRANSITION_EFFECT, &["Transition$9", "Label$1"]);

        let model = import_solution(&instance).unwrap();
        let graph = transitions_graph(&model).unwrap();

        assert_eq!(graph.graph.node_count(), 5);
        for name in ["State$8", "State$9"] {
            let id = model.store().find_state(name).unwrap();
            assert!(graph.contains_state(id));
        }
    }

    #[test]
    fn test_transitions_graph_rejects_missing_endpoint() {
        let mut instance = SolutionInstance::new();
        declare_all(&mut instance);
        instance.add_tuple(relations::TRANSITION_PRESTATE, &["Transition$0", "State$0"]);
        // No poststate

        let model = import_solution(&instance).unwrap();
        let err = transitions_graph(&model).unwrap_err();
        assert!(matches!(
            err,
            Error::DanglingField { field: "poststate", .. }
        ));
    }

    #[test]
    fn test_execution_graph_is_a_path() {
        // T1: A -> B, T2: B -> C stepped in order gives the path A -> B -> C
        let mut instance = SolutionInstance::new();
        declare_all(&mut instance);
        for (t, pre, post) in [("Transition$0", "A", "B"), ("Transition$1", "B", "C")] {
            instance.add_tuple(relations::TRANSITION_PRESTATE, &[t, pre]);
            instance.add_tuple(relations::TRANSITION_POSTSTATE, &[t, post]);
            instance.add_tuple(relations::TRANSITION_TRIGGER, &[t, "Label$1"]);
            instance.add_tuple(relations::TRANSITION_EFFECT, &[t, "Label$2"]);
        }
        instance.add_tuple(relations::EXECUTION_INITIAL_STATE, &["Execution$0", "A"]);
        instance.add_tuple(
            relations::EXECUTION_TRANSITIONS,
            &["Execution$0", "0", "Transition$0"],
        );
        instance.add_tuple(
            relations::EXECUTION_TRANSITIONS,
            &["Execution$0", "1", "Transition$1"],
        );

        let model = import_solution(&instance).unwrap();
        let graph = execution_graph(&model, model.executions()[0]).unwrap();

        assert_eq!(graph.graph.node_count(), 3);
        assert_eq!(graph.graph.edge_count(), 2);

        let ordinals: Vec<usize> = graph.graph.edge_weights().map(|e| e.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2]);
    }

    #[test]
    fn test_execution_graph_repeated_transition_keeps_occurrences() {
        let model = import_solution(&sample_instance()).unwrap();
        // Execution$1 takes the Transition$2 self loop twice, then Transition$1
        let graph = execution_graph(&model, model.executions()[1]).unwrap();

        // Vertices collapse to the two distinct states; edges stay per step
        assert_eq!(graph.graph.node_count(), 2);
        assert_eq!(graph.graph.edge_count(), 3);

        let mut loop_ordinals: Vec<usize> = graph
            .graph
            .edge_weights()
            .filter(|e| e.edge.name == "Transition$2")
            .map(|e| e.ordinal)
            .collect();
        loop_ordinals.sort_unstable();
        assert_eq!(loop_ordinals, vec![1, 2]);
    }

    #[test]
    fn test_numbered_transition_display() {
        let model = import_solution(&sample_instance()).unwrap();
        let graph = execution_graph(&model, model.executions()[0]).unwrap();
        let first = graph
            .graph
            .edge_weights()
            .find(|e| e.ordinal == 1)
            .unwrap();
        assert_eq!(first.display_label(), "(1) Label$1/Label$0");
    }
}
