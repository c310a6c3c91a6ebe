//! Builder for constructing states.

use crate::core::{Action, Event, State, StateRef};
use std::collections::HashMap;
use std::sync::Arc;

/// Builder for constructing states with a fluent API.
///
/// The name is fixed at creation, so `build` cannot fail. Hook lists run in
/// the order they were added; repeated `on_event` calls for the same event
/// accumulate.
///
/// # Example
///
/// ```rust
/// use machina::builder::StateBuilder;
/// use machina::event_enum;
///
/// event_enum! {
///     pub enum SensorEvent {
///         Streaming,
///     }
/// }
///
/// let measuring = StateBuilder::<SensorEvent>::new("measuring")
///     .description("Sensor is measuring.")
///     .on_enter(|| "Starting measurement.".to_string())
///     .on_exit(|| "Stopping measurement.".to_string())
///     .on_event(SensorEvent::Streaming, || "Processing measurement...".to_string())
///     .build();
///
/// assert_eq!(measuring.name(), "measuring");
/// ```
pub struct StateBuilder<E: Event> {
    name: String,
    description: Option<String>,
    on_enter: Vec<Action>,
    on_exit: Vec<Action>,
    on_event: HashMap<E, Vec<Action>>,
}

impl<E: Event> StateBuilder<E> {
    /// Create a builder for a state with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            on_enter: Vec::new(),
            on_exit: Vec::new(),
            on_event: HashMap::new(),
        }
    }

    /// Set the human-readable description (optional).
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append an action to run when the machine enters this state.
    pub fn on_enter<F>(mut self, action: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.on_enter.push(Box::new(action));
        self
    }

    /// Append an action to run when the machine leaves this state.
    pub fn on_exit<F>(mut self, action: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.on_exit.push(Box::new(action));
        self
    }

    /// Append an action to run when `event` is received while in this
    /// state, whether or not a transition also fires for it.
    pub fn on_event<F>(mut self, event: E, action: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.on_event.entry(event).or_default().push(Box::new(action));
        self
    }

    /// Build the state and wrap it in the shared handle the engine and
    /// transitions use.
    pub fn build(self) -> StateRef<E> {
        Arc::new(State::new(
            self.name,
            self.description,
            self.on_enter,
            self.on_exit,
            self.on_event,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Tick,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            "Tick"
        }
    }

    #[test]
    fn minimal_state_builds() {
        let state = StateBuilder::<TestEvent>::new("idle").build();

        assert_eq!(state.name(), "idle");
        assert_eq!(state.description(), None);
        assert!(state.on_enter().is_empty());
        assert!(state.on_exit().is_empty());
    }

    #[test]
    fn hooks_accumulate_in_call_order() {
        let state = StateBuilder::new("busy")
            .on_enter(|| "a".to_string())
            .on_enter(|| "b".to_string())
            .on_event(TestEvent::Tick, || "one".to_string())
            .on_event(TestEvent::Tick, || "two".to_string())
            .build();

        assert_eq!(
            state.on_enter(),
            vec!["on_enter_state > a", "on_enter_state > b"]
        );
        assert_eq!(
            state.on_event(&TestEvent::Tick),
            vec!["on_event       > one", "on_event       > two"]
        );
    }

    #[test]
    fn description_is_carried_through() {
        let state = StateBuilder::<TestEvent>::new("idle")
            .description("Nothing to do.")
            .build();

        assert_eq!(state.description(), Some("Nothing to do."));
    }
}
