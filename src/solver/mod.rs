//! Solver module - Abstraction over the constraint solver's output
//!
//! The solver itself is an external collaborator. This module only defines
//! the shape of what it hands back for one satisfying instance: named
//! relations over atoms, plus the bindings of solver-introduced skolem
//! variables. Reconstruction consumes solutions exclusively through the
//! [`Solution`] trait, so the importer never depends on where the tuples
//! came from (a JSON dump, the mock instance, or a live solver bridge).

pub mod mock;
pub mod solution;

pub use solution::{SolutionInstance, SolutionSet, Tuple};

/// Relation names read from a solved instance.
///
/// These are a compatibility contract with the solver-side specification
/// schema; renaming a signature or field there breaks reconstruction here.
pub mod relations {
    /// Unary set of labels flagged as the distinguished empty label
    pub const EMPTY_LABEL: &str = "EmptyLabel";
    /// Binary: transition -> source state
    pub const TRANSITION_PRESTATE: &str = "Transition.preState";
    /// Binary: transition -> destination state
    pub const TRANSITION_POSTSTATE: &str = "Transition.postState";
    /// Binary: transition -> triggering label
    pub const TRANSITION_TRIGGER: &str = "Transition.trigger";
    /// Binary: transition -> effect label
    pub const TRANSITION_EFFECT: &str = "Transition.effect";
    /// Binary: execution -> initial state
    pub const EXECUTION_INITIAL_STATE: &str = "Execution.initialState";
    /// Ternary: execution, position, transition
    pub const EXECUTION_TRANSITIONS: &str = "Execution.transitions";
    /// Unary set of trace names
    pub const TRACE: &str = "Trace";
    /// Ternary: trace, position, label
    pub const TRACE_CONTENT: &str = "Trace.content";
}

/// One satisfying instance returned by the solver
///
/// Implementations expose the instance's named relations as unordered tuple
/// streams. Tuple order within a relation carries no meaning; ordered
/// sequences are encoded through explicit position columns.
pub trait Solution {
    /// Tuples of the named relation, or `None` if the relation is absent
    fn relation(&self, name: &str) -> Option<&[Tuple]>;

    /// Skolem variables introduced by the solver, with their bound tuple sets
    fn skolems(&self) -> Vec<(&str, &[Tuple])>;
}
