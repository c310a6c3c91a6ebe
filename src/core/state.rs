//! Named states owning enter/exit/event hook lists.

use super::action::{run_labeled, Action};
use super::event::Event;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a state.
///
/// States are shared between the engine's current-state pointer and every
/// transition that starts or ends at them. Dispatch compares handles by
/// pointer identity, so the same allocation must be reused everywhere a
/// state appears within one machine.
pub type StateRef<E> = Arc<State<E>>;

/// A named node in a state machine, owning three hook lists: actions to run
/// on entry, actions to run on exit, and per-event actions for events that
/// are acknowledged in this state without causing a transition (for example
/// a heartbeat while streaming).
///
/// A state is immutable after construction; only the engine's current-state
/// pointer ever changes. The name is the dispatch key for diagnostics and
/// history: it must be unique within a machine, but the engine does not
/// detect duplicates.
///
/// Construct states through [`StateBuilder`](crate::builder::StateBuilder).
pub struct State<E: Event> {
    name: String,
    description: Option<String>,
    on_enter: Vec<Action>,
    on_exit: Vec<Action>,
    on_event: HashMap<E, Vec<Action>>,
}

impl<E: Event> State<E> {
    pub(crate) fn new(
        name: String,
        description: Option<String>,
        on_enter: Vec<Action>,
        on_exit: Vec<Action>,
        on_event: HashMap<E, Vec<Action>>,
    ) -> Self {
        Self {
            name,
            description,
            on_enter,
            on_exit,
            on_event,
        }
    }

    /// The state's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Optional human-readable description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Run the hooks registered for `event` in this state, in declaration
    /// order, returning their labeled descriptions.
    ///
    /// Receiving an event with no registered hook is normal: the result is
    /// simply empty, not an error.
    pub fn on_event(&self, event: &E) -> Vec<String> {
        match self.on_event.get(event) {
            Some(actions) => run_labeled(actions, "on_event"),
            None => Vec::new(),
        }
    }

    /// Run the on-enter hooks in declaration order.
    pub fn on_enter(&self) -> Vec<String> {
        run_labeled(&self.on_enter, "on_enter_state")
    }

    /// Run the on-exit hooks in declaration order.
    pub fn on_exit(&self) -> Vec<String> {
        run_labeled(&self.on_exit, "on_exit_state")
    }
}

impl<E: Event> fmt::Debug for State<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("on_enter", &self.on_enter.len())
            .field("on_exit", &self.on_exit.len())
            .field("on_event", &self.on_event.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Ping,
        Pong,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Ping => "Ping",
                Self::Pong => "Pong",
            }
        }
    }

    fn sample_state() -> State<TestEvent> {
        let mut on_event: HashMap<TestEvent, Vec<Action>> = HashMap::new();
        on_event.insert(
            TestEvent::Ping,
            vec![
                Box::new(|| "ping one".to_string()),
                Box::new(|| "ping two".to_string()),
            ],
        );
        State::new(
            "active".to_string(),
            Some("The machine is active.".to_string()),
            vec![Box::new(|| "entered".to_string())],
            vec![Box::new(|| "left".to_string())],
            on_event,
        )
    }

    #[test]
    fn on_event_runs_registered_hooks_in_order() {
        let state = sample_state();
        let effects = state.on_event(&TestEvent::Ping);

        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0], "on_event       > ping one");
        assert_eq!(effects[1], "on_event       > ping two");
    }

    #[test]
    fn on_event_without_hook_is_empty_not_an_error() {
        let state = sample_state();
        assert!(state.on_event(&TestEvent::Pong).is_empty());
    }

    #[test]
    fn enter_and_exit_hooks_are_labeled() {
        let state = sample_state();

        assert_eq!(state.on_enter(), vec!["on_enter_state > entered"]);
        assert_eq!(state.on_exit(), vec!["on_exit_state  > left"]);
    }

    #[test]
    fn name_and_description_are_exposed() {
        let state = sample_state();
        assert_eq!(state.name(), "active");
        assert_eq!(state.description(), Some("The machine is active."));
    }

    #[test]
    fn state_identity_is_pointer_identity() {
        let a: StateRef<TestEvent> = Arc::new(sample_state());
        let b: StateRef<TestEvent> = Arc::new(sample_state());

        assert!(Arc::ptr_eq(&a, &Arc::clone(&a)));
        // Same name, different allocation: distinct states.
        assert!(!Arc::ptr_eq(&a, &b));
    }
}
