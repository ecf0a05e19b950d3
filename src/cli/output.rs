//! Output formatting module
//!
//! This module handles formatting a reconstructed model for the table and
//! JSON output formats.

use crate::{
    Result,
    model::{LabelId, SolutionModel, StateId},
};
use serde_json::json;

/// Output the model as a text table
pub fn output_table(w: &mut impl std::io::Write, model: &SolutionModel) -> Result<()> {
    let store = model.store();
    let state_name = |id: Option<StateId>| id.map(|s| store[s].name()).unwrap_or("?");
    let label_name = |id: Option<LabelId>| id.map(|l| store[l].name()).unwrap_or("?");

    writeln!(w, "LTS Model Visualization - Reconstruction Results")?;
    writeln!(w, "{}", "=".repeat(80))?;
    writeln!(w)?;

    writeln!(w, "Summary:")?;
    writeln!(w, "  States:      {}", store.states().count())?;
    writeln!(w, "  Labels:      {}", store.labels().count())?;
    writeln!(w, "  Transitions: {}", store.transitions().count())?;
    writeln!(w, "  Executions:  {}", model.executions().len())?;
    writeln!(w, "  Traces:      {}", model.traces().len())?;
    writeln!(w)?;

    if store.transitions().count() > 0 {
        writeln!(w, "Transitions:")?;
        writeln!(w, "{:-<80}", "")?;
        writeln!(
            w,
            "{:<16} {:<14} {:<14} {:<14} {:<14}",
            "Name", "From", "To", "Trigger", "Effect"
        )?;
        writeln!(w, "{:-<80}", "")?;
        for (_, transition) in store.transitions() {
            writeln!(
                w,
                "{:<16} {:<14} {:<14} {:<14} {:<14}",
                transition.name(),
                state_name(transition.prestate()),
                state_name(transition.poststate()),
                label_name(transition.trigger()),
                label_name(transition.effect()),
            )?;
        }
        writeln!(w)?;
    }

    if !model.executions().is_empty() {
        writeln!(w, "Executions:")?;
        writeln!(w, "{:-<80}", "")?;
        for &id in model.executions() {
            writeln!(w, "  {}", model.execution_summary(id))?;
        }
        writeln!(w)?;
    }

    if !model.traces().is_empty() {
        writeln!(w, "Traces:")?;
        writeln!(w, "{:-<80}", "")?;
        for &id in model.traces() {
            writeln!(w, "  {}", model.trace_summary(id))?;
        }
        writeln!(w)?;
    }

    if !model.bindings().is_empty() {
        writeln!(w, "Variables mapping:")?;
        for (variable, entities) in model.bindings().iter() {
            let list: Vec<&str> = entities.iter().map(String::as_str).collect();
            writeln!(w, "  - {} -> {{{}}}", variable, list.join(", "))?;
        }
        writeln!(w)?;
    }

    if !model.issues().is_empty() {
        writeln!(w, "Import issues:")?;
        for issue in model.issues() {
            writeln!(w, "  ! {}: {}", issue.entity, issue.error)?;
        }
        writeln!(w)?;
    }

    Ok(())
}

/// Output the model as JSON
pub fn output_json(w: &mut impl std::io::Write, model: &SolutionModel) -> Result<()> {
    let store = model.store();
    let state_name = |id: Option<StateId>| id.map(|s| store[s].name()).unwrap_or("?");
    let label_name = |id: Option<LabelId>| id.map(|l| store[l].name()).unwrap_or("?");

    let output = json!({
        "summary": {
            "states": store.states().count(),
            "labels": store.labels().count(),
            "transitions": store.transitions().count(),
            "executions": model.executions().len(),
            "traces": model.traces().len(),
        },
        "transitions": store.transitions().map(|(_, t)| {
            json!({
                "name": t.name(),
                "prestate": state_name(t.prestate()),
                "poststate": state_name(t.poststate()),
                "trigger": label_name(t.trigger()),
                "effect": label_name(t.effect()),
            })
        }).collect::<Vec<_>>(),
        "executions": model.executions().iter().map(|&id| {
            let execution = &store[id];
            json!({
                "name": execution.name(),
                "initial_state": state_name(execution.initial_state()),
                "final_state": state_name(execution.current_state()),
                "transitions": execution.transitions().iter()
                    .map(|&t| store[t].name())
                    .collect::<Vec<_>>(),
            })
        }).collect::<Vec<_>>(),
        "traces": model.traces().iter().map(|&id| {
            let trace = &store[id];
            json!({
                "name": trace.name(),
                "labels": trace.labels().iter()
                    .map(|&l| store[l].name())
                    .collect::<Vec<_>>(),
                "display": model.trace_summary(id),
            })
        }).collect::<Vec<_>>(),
        "variables": model.bindings().iter().map(|(variable, entities)| {
            json!({ "variable": variable, "entities": entities })
        }).collect::<Vec<_>>(),
        "issues": model.issues().iter().map(|issue| {
            json!({ "entity": issue.entity, "error": issue.error.to_string() })
        }).collect::<Vec<_>>(),
    });

    serde_json::to_writer_pretty(&mut *w, &output)?;
    writeln!(w)?; // Add trailing newline
    Ok(())
}
