//! Execution representation and stepping

use crate::model::store::{StateId, TransitionId};
use crate::model::transition::CompleteTransition;

/// Why a step was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// No initial state has been set
    Uninitialized,
    /// The transition's prestate is not the execution's current state;
    /// carries the state the execution is actually at.
    WalkInconsistency { at: StateId },
}

/// One linear execution: an initial state and an ordered walk of
/// transitions through the transition relation.
#[derive(Debug, Clone)]
pub struct Execution {
    name: String,
    initial: Option<StateId>,
    current: Option<StateId>,
    steps: Vec<TransitionId>,
}

impl Execution {
    pub fn new(name: String) -> Self {
        Self {
            name,
            initial: None,
            current: None,
            steps: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compact name for listings: `Execution$3` becomes `E3`
    pub fn short_name(&self) -> String {
        self.name.replace("Execution$", "E")
    }

    /// Set the initial state; `Err` carries a conflicting previous value.
    /// Before any step is taken the initial state doubles as the current one.
    pub fn init_with(&mut self, state: StateId) -> Result<(), StateId> {
        match self.initial {
            None => {
                self.initial = Some(state);
                self.current = Some(state);
                Ok(())
            }
            Some(previous) if previous == state => Ok(()),
            Some(previous) => Err(previous),
        }
    }

    pub fn initial_state(&self) -> Option<StateId> {
        self.initial
    }

    /// The state reached after the steps taken so far
    pub fn current_state(&self) -> Option<StateId> {
        self.current
    }

    /// Append one transition to the walk.
    ///
    /// Precondition: the transition's prestate equals the current state.
    /// A violation is reported, not silently dropped.
    pub fn step(
        &mut self,
        transition: TransitionId,
        complete: CompleteTransition,
    ) -> Result<(), StepError> {
        let at = self.current.ok_or(StepError::Uninitialized)?;
        if complete.prestate != at {
            return Err(StepError::WalkInconsistency { at });
        }
        self.steps.push(transition);
        self.current = Some(complete.poststate);
        Ok(())
    }

    /// The ordered transition sequence
    pub fn transitions(&self) -> &[TransitionId] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
