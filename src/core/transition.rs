//! Directed, event-keyed edges between states.

use super::action::{run_labeled, Action};
use super::event::Event;
use super::state::StateRef;
use std::fmt;

/// A declared edge from one state to another, keyed by the event that
/// triggers it.
///
/// A transition carries its own ordered action list, run between the source
/// state's exit hooks and the destination state's enter hooks. Endpoint
/// states are held by shared handle; dispatch matches the source by pointer
/// identity, so a transition only fires for the exact state allocation it
/// was declared with.
///
/// For a well-formed machine at most one transition exists per
/// `(from, trigger)` pair. The engine does not reject duplicates; the first
/// declared entry wins and later ones are unreachable.
///
/// Construct transitions through
/// [`TransitionBuilder`](crate::builder::TransitionBuilder).
pub struct Transition<E: Event> {
    trigger: E,
    from: StateRef<E>,
    to: StateRef<E>,
    actions: Vec<Action>,
    description: Option<String>,
}

impl<E: Event> Transition<E> {
    pub(crate) fn new(
        trigger: E,
        from: StateRef<E>,
        to: StateRef<E>,
        actions: Vec<Action>,
        description: Option<String>,
    ) -> Self {
        Self {
            trigger,
            from,
            to,
            actions,
            description,
        }
    }

    /// The event that triggers this transition.
    pub fn trigger(&self) -> &E {
        &self.trigger
    }

    /// The source state.
    pub fn from(&self) -> &StateRef<E> {
        &self.from
    }

    /// The destination state.
    pub fn to(&self) -> &StateRef<E> {
        &self.to
    }

    /// Optional human-readable description of the edge.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Run the transition-scoped actions in declaration order, returning
    /// their labeled descriptions. Independent of the endpoint states'
    /// hooks.
    pub fn on_trigger(&self) -> Vec<String> {
        run_labeled(&self.actions, "on_transition")
    }
}

impl<E: Event> fmt::Debug for Transition<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("trigger", &self.trigger)
            .field("from", &self.from.name())
            .field("to", &self.to.name())
            .field("actions", &self.actions.len())
            .field("description", &self.description)
            .finish()
    }
}
