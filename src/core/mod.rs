//! Core state machine types and the dispatch engine.
//!
//! This module contains the engine's data model and algorithm:
//! - Events via the `Event` trait
//! - Side-effect hooks via `Action`
//! - `State` and `Transition`, the nodes and edges of the machine
//! - `StateMachine`, which dispatches events against the transition table
//! - `StateHistory`, an in-memory record of the transitions taken
//!
//! The engine performs no I/O itself: every side effect enters through the
//! action closures a definition supplies, and every outcome leaves as a
//! structured return value for the driver to render.

mod action;
mod event;
mod history;
mod machine;
mod state;
mod transition;

pub use action::Action;
pub use event::Event;
pub use history::{EventRecord, StateHistory};
pub use machine::{MachineDef, StateMachine};
pub use state::{State, StateRef};
pub use transition::Transition;
