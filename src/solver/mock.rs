//! Mock solution for testing and development
//!
//! Provides a small hand-written solved instance: a three-state machine with
//! a self loop, two executions (one of which repeats a transition), and two
//! traces. Used by unit tests and by the CLI `--source mock` path.

use super::relations;
use super::solution::{SolutionInstance, Tuple};

/// Build the sample solved instance
pub fn sample_instance() -> SolutionInstance {
    let mut instance = SolutionInstance::new();

    instance.add_tuple(relations::EMPTY_LABEL, &["Label$0"]);

    instance.add_tuple(relations::TRANSITION_PRESTATE, &["Transition$0", "State$0"]);
    instance.add_tuple(relations::TRANSITION_PRESTATE, &["Transition$1", "State$1"]);
    instance.add_tuple(relations::TRANSITION_PRESTATE, &["Transition$2", "State$1"]);

    instance.add_tuple(relations::TRANSITION_POSTSTATE, &["Transition$0", "State$1"]);
    instance.add_tuple(relations::TRANSITION_POSTSTATE, &["Transition$1", "State$2"]);
    instance.add_tuple(relations::TRANSITION_POSTSTATE, &["Transition$2", "State$1"]);

    instance.add_tuple(relations::TRANSITION_TRIGGER, &["Transition$0", "Label$1"]);
    instance.add_tuple(relations::TRANSITION_TRIGGER, &["Transition$1", "Label$2"]);
    instance.add_tuple(relations::TRANSITION_TRIGGER, &["Transition$2", "Label$0"]);

    instance.add_tuple(relations::TRANSITION_EFFECT, &["Transition$0", "Label$0"]);
    instance.add_tuple(relations::TRANSITION_EFFECT, &["Transition$1", "Label$1"]);
    instance.add_tuple(relations::TRANSITION_EFFECT, &["Transition$2", "Label$0"]);

    instance.add_tuple(
        relations::EXECUTION_INITIAL_STATE,
        &["Execution$0", "State$0"],
    );
    instance.add_tuple(
        relations::EXECUTION_INITIAL_STATE,
        &["Execution$1", "State$1"],
    );

    // Step tuples deliberately out of index order: the importer must not care.
    instance.add_tuple(
        relations::EXECUTION_TRANSITIONS,
        &["Execution$0", "1", "Transition$1"],
    );
    instance.add_tuple(
        relations::EXECUTION_TRANSITIONS,
        &["Execution$0", "0", "Transition$0"],
    );
    instance.add_tuple(
        relations::EXECUTION_TRANSITIONS,
        &["Execution$1", "2", "Transition$1"],
    );
    instance.add_tuple(
        relations::EXECUTION_TRANSITIONS,
        &["Execution$1", "0", "Transition$2"],
    );
    instance.add_tuple(
        relations::EXECUTION_TRANSITIONS,
        &["Execution$1", "1", "Transition$2"],
    );

    instance.add_tuple(relations::TRACE, &["Trace$0"]);
    instance.add_tuple(relations::TRACE, &["Trace$1"]);

    instance.add_tuple(relations::TRACE_CONTENT, &["Trace$0", "0", "Label$1"]);
    instance.add_tuple(relations::TRACE_CONTENT, &["Trace$0", "2", "Label$2"]);
    instance.add_tuple(relations::TRACE_CONTENT, &["Trace$0", "1", "Label$0"]);

    instance.add_skolem("$run_e", vec![Tuple::new(["Execution$0"])]);

    instance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Solution;

    #[test]
    fn test_sample_instance_shape() {
        let instance = sample_instance();

        for relation in [
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
            assert!(
                instance.relation(relation).is_some(),
                "missing relation {relation}"
            );
        }

        assert_eq!(instance.skolems().len(), 1);
    }
}
