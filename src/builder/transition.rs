//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, Event, StateRef, Transition};

/// Builder for constructing transitions with a fluent API.
///
/// Trigger, source and target are required; `build` reports whichever is
/// missing. Actions accumulate and run in the order they were added.
///
/// # Example
///
/// ```rust
/// use machina::builder::{StateBuilder, TransitionBuilder};
/// use machina::event_enum;
///
/// event_enum! {
///     pub enum SensorEvent {
///         ConnectOk,
///     }
/// }
///
/// let disconnected = StateBuilder::new("disconnected").build();
/// let ready = StateBuilder::new("ready").build();
///
/// let transition = TransitionBuilder::new()
///     .on(SensorEvent::ConnectOk)
///     .from(disconnected)
///     .to(ready)
///     .action(|| "Ready.".to_string())
///     .describe("Connected")
///     .build()
///     .unwrap();
///
/// assert_eq!(transition.description(), Some("Connected"));
/// ```
pub struct TransitionBuilder<E: Event> {
    trigger: Option<E>,
    from: Option<StateRef<E>>,
    to: Option<StateRef<E>>,
    actions: Vec<Action>,
    description: Option<String>,
}

impl<E: Event> TransitionBuilder<E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            trigger: None,
            from: None,
            to: None,
            actions: Vec::new(),
            description: None,
        }
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: E) -> Self {
        self.trigger = Some(event);
        self
    }

    /// Set the source state (required).
    pub fn from(mut self, state: StateRef<E>) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: StateRef<E>) -> Self {
        self.to = Some(state);
        self
    }

    /// Append a transition-scoped action (optional).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.actions.push(Box::new(action));
        self
    }

    /// Set the human-readable description (optional).
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<E>, BuildError> {
        let trigger = self.trigger.ok_or(BuildError::MissingTrigger)?;
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition::new(
            trigger,
            from,
            to,
            self.actions,
            self.description,
        ))
    }
}

impl<E: Event> Default for TransitionBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StateBuilder;
    use serde::{Deserialize, Serialize};
    use std::sync::Arc;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Go,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            "Go"
        }
    }

    #[test]
    fn builder_validates_missing_trigger() {
        let result = TransitionBuilder::<TestEvent>::new()
            .from(StateBuilder::new("a").build())
            .to(StateBuilder::new("b").build())
            .build();

        assert!(matches!(result, Err(BuildError::MissingTrigger)));
    }

    #[test]
    fn builder_validates_missing_from_state() {
        let result = TransitionBuilder::new()
            .on(TestEvent::Go)
            .to(StateBuilder::new("b").build())
            .build();

        assert!(matches!(result, Err(BuildError::MissingFromState)));
    }

    #[test]
    fn builder_validates_missing_to_state() {
        let result = TransitionBuilder::new()
            .on(TestEvent::Go)
            .from(StateBuilder::new("a").build())
            .build();

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn fluent_api_builds_transition() {
        let from = StateBuilder::new("a").build();
        let to = StateBuilder::new("b").build();

        let transition = TransitionBuilder::new()
            .on(TestEvent::Go)
            .from(Arc::clone(&from))
            .to(Arc::clone(&to))
            .action(|| "moving".to_string())
            .describe("a to b")
            .build()
            .unwrap();

        assert_eq!(transition.trigger(), &TestEvent::Go);
        assert!(Arc::ptr_eq(transition.from(), &from));
        assert!(Arc::ptr_eq(transition.to(), &to));
        assert_eq!(transition.on_trigger(), vec!["on_transition  > moving"]);
    }

    #[test]
    fn actions_accumulate_in_call_order() {
        let transition = TransitionBuilder::new()
            .on(TestEvent::Go)
            .from(StateBuilder::new("a").build())
            .to(StateBuilder::new("b").build())
            .action(|| "first".to_string())
            .action(|| "second".to_string())
            .build()
            .unwrap();

        assert_eq!(
            transition.on_trigger(),
            vec!["on_transition  > first", "on_transition  > second"]
        );
    }
}
