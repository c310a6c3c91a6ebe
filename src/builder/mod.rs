//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and macros for declaring states and
//! transitions with minimal boilerplate while keeping the core types
//! immutable after construction.

pub mod error;
pub mod macros;
pub mod state;
pub mod transition;

pub use error::BuildError;
pub use state::StateBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Event, StateRef, Transition};

/// Create an unconditional, action-less transition.
///
/// # Example
///
/// ```
/// use machina::builder::{transition, StateBuilder};
/// use machina::event_enum;
///
/// event_enum! {
///     pub enum LightEvent {
///         Advance,
///     }
/// }
///
/// let red = StateBuilder::new("red").build();
/// let green = StateBuilder::new("green").build();
///
/// let edge = transition(LightEvent::Advance, red, green);
/// assert_eq!(edge.from().name(), "red");
/// assert_eq!(edge.to().name(), "green");
/// ```
pub fn transition<E: Event>(event: E, from: StateRef<E>, to: StateRef<E>) -> Transition<E> {
    Transition::new(event, from, to, Vec::new(), None)
}
