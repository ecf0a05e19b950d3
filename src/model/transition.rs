//! Transition representation

use crate::model::store::{LabelId, StateId};

/// The four fields populated from the transition relations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionField {
    Prestate,
    Poststate,
    Trigger,
    Effect,
}

impl TransitionField {
    pub fn name(self) -> &'static str {
        match self {
            TransitionField::Prestate => "prestate",
            TransitionField::Poststate => "poststate",
            TransitionField::Trigger => "trigger",
            TransitionField::Effect => "effect",
        }
    }
}

/// A transition of the system. Identity is the atom name; the four fields
/// are each set exactly once during import, one per relation.
#[derive(Debug, Clone)]
pub struct Transition {
    name: String,
    prestate: Option<StateId>,
    poststate: Option<StateId>,
    trigger: Option<LabelId>,
    effect: Option<LabelId>,
}

/// All four fields of a transition, present. Produced by
/// [`Transition::require_complete`] before a transition may be stepped or
/// materialized as a graph edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompleteTransition {
    pub prestate: StateId,
    pub poststate: StateId,
    pub trigger: LabelId,
    pub effect: LabelId,
}

// Write-once slot: re-setting the same value is a no-op, a different value
// hands back the previous one for the conflict report.
fn set_once<T: Copy + PartialEq>(slot: &mut Option<T>, value: T) -> Result<(), T> {
    match *slot {
        None => {
            *slot = Some(value);
            Ok(())
        }
        Some(previous) if previous == value => Ok(()),
        Some(previous) => Err(previous),
    }
}

impl Transition {
    pub fn new(name: String) -> Self {
        Self {
            name,
            prestate: None,
            poststate: None,
            trigger: None,
            effect: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compact name for listings: `Transition$3` becomes `T3`
    pub fn short_name(&self) -> String {
        self.name.replace("Transition$", "T")
    }

    pub fn prestate(&self) -> Option<StateId> {
        self.prestate
    }

    pub fn poststate(&self) -> Option<StateId> {
        self.poststate
    }

    pub fn trigger(&self) -> Option<LabelId> {
        self.trigger
    }

    pub fn effect(&self) -> Option<LabelId> {
        self.effect
    }

    /// Set the prestate; `Err` carries the conflicting previous value.
    pub fn set_prestate(&mut self, state: StateId) -> Result<(), StateId> {
        set_once(&mut self.prestate, state)
    }

    pub fn set_poststate(&mut self, state: StateId) -> Result<(), StateId> {
        set_once(&mut self.poststate, state)
    }

    pub fn set_trigger(&mut self, label: LabelId) -> Result<(), LabelId> {
        set_once(&mut self.trigger, label)
    }

    pub fn set_effect(&mut self, label: LabelId) -> Result<(), LabelId> {
        set_once(&mut self.effect, label)
    }

    /// All four fields, or the first missing one
    pub fn require_complete(&self) -> Result<CompleteTransition, TransitionField> {
        Ok(CompleteTransition {
            prestate: self.prestate.ok_or(TransitionField::Prestate)?,
            poststate: self.poststate.ok_or(TransitionField::Poststate)?,
            trigger: self.trigger.ok_or(TransitionField::Trigger)?,
            effect: self.effect.ok_or(TransitionField::Effect)?,
        })
    }
}
