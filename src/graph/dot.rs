//! DOT (Graphviz) rendering of reconstructed entities
//!
//! Pure formatting over already-built data: the whole-model transitions
//! graph, one execution unrolled into a numbered path (a revisited state
//! gets one node per visit), and one trace as a chain of label boxes.

use crate::error::Result;
use crate::graph::TransitionsGraph;
use crate::model::{ExecutionId, SolutionModel, TraceId};
use std::path::Path;

/// DOT-safe identifier: atom names carry `$`, which Graphviz rejects
pub fn dot_id(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Render the whole-model transitions graph
pub fn transitions_dot(graph: &TransitionsGraph) -> String {
    let mut dot = String::from("digraph Transitions {\n");
    dot.push_str("  rankdir=LR;\n");

    for vertex in graph.graph.node_weights() {
        dot.push_str(&format!(
            "  {} [label=\"{}\"];\n",
            dot_id(&vertex.name),
            vertex.name
        ));
    }

    for edge_idx in graph.graph.edge_indices() {
        if let Some((from_idx, to_idx)) = graph.graph.edge_endpoints(edge_idx)
            && let (Some(from), Some(to), Some(edge)) = (
                graph.graph.node_weight(from_idx),
                graph.graph.node_weight(to_idx),
                graph.graph.edge_weight(edge_idx),
            )
        {
            dot.push_str(&format!(
                "  {} -> {} [label=\"{}\"];\n",
                dot_id(&from.name),
                dot_id(&to.name),
                edge.label
            ));
        }
    }

    dot.push_str("}\n");
    dot
}

/// Render one execution as an unrolled path: one node per step, so a state
/// visited twice appears twice
pub fn execution_dot(model: &SolutionModel, id: ExecutionId) -> Result<String> {
    let store = model.store();
    let execution = &store[id];
    let mut dot = format!("digraph {} {{\n", dot_id(execution.name()));

    let initial = execution
        .initial_state()
        .ok_or_else(|| crate::error::Error::UninitializedExecution(execution.name().to_string()))?;
    dot.push_str(&format!(
        "  step0 [label=\"{}\"];\n",
        store[initial].name()
    ));

    for (position, &tid) in execution.transitions().iter().enumerate() {
        let transition = &store[tid];
        let step = position + 1;
        let post = transition
            .poststate()
            .map(|s| store[s].name())
            .unwrap_or("?");
        let trigger = transition
            .trigger()
            .map(|l| store[l].name())
            .unwrap_or("?");
        let effect = transition.effect().map(|l| store[l].name()).unwrap_or("?");

        dot.push_str(&format!("  step{step} [label=\"{post}\"];\n"));
        dot.push_str(&format!(
            "  step{} -> step{step} [label=\"{trigger}/{effect}\"];\n",
            step - 1
        ));
    }

    dot.push_str("}\n");
    Ok(dot)
}

/// Render one trace as a chain of label boxes. The full sequence is kept;
/// empty-label filtering is a listing concern, not an export one.
pub fn trace_dot(model: &SolutionModel, id: TraceId) -> String {
    let store = model.store();
    let trace = &store[id];
    let mut dot = format!("digraph {} {{\n", dot_id(trace.name()));

    for (position, &lid) in trace.labels().iter().enumerate() {
        let step = position + 1;
        dot.push_str(&format!(
            "  label{step} [shape=box, label=\"{}\"];\n",
            store[lid].name()
        ));
        if position > 0 {
            dot.push_str(&format!("  label{} -> label{step};\n", step - 1));
        }
    }

    dot.push_str("}\n");
    dot
}

/// Write a rendered DOT document to disk.
///
/// Export failures are recoverable: the caller keeps the in-memory model
/// and decides whether to log or retry.
pub fn write_dot(path: &Path, dot: &str) -> Result<()> {
    std::fs::write(path, dot)?;
    tracing::info!(path = %path.display(), "wrote DOT file");
    Ok(())
}
