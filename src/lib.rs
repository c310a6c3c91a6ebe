//! Machina: a hook-driven finite state machine engine.
//!
//! Machina separates the dispatch engine from everything around it. A
//! machine definition declares states, a closed event catalog, the legal
//! transitions per event, and side-effect hooks; the engine dispatches
//! events against that table, runs the hooks in a fixed order, and reports
//! each outcome as structured data. The engine never prints or logs —
//! rendering results is the driver's job.
//!
//! # Core Concepts
//!
//! - **Event**: a finite, comparable token offered to the machine
//! - **State**: a named node owning on-enter, on-exit and per-event hooks
//! - **Transition**: a directed edge keyed by its triggering event, with
//!   its own action list
//! - **StateMachine**: owns the current state and the table, and exposes
//!   `handle_event`
//!
//! On a matched event the hook phases run in a fixed order and their
//! descriptions are concatenated the same way:
//! `on_event`, `on_exit`, `on_transition`, `on_enter`. An event with no
//! matching transition is not an error: the state is unchanged and the
//! returned transition is `None`.
//!
//! # Example
//!
//! ```rust
//! use machina::builder::{StateBuilder, TransitionBuilder};
//! use machina::core::{MachineDef, StateMachine, StateRef, Transition};
//! use machina::event_enum;
//!
//! event_enum! {
//!     pub enum PumpEvent {
//!         Start,
//!         Stop,
//!     }
//! }
//!
//! struct PumpDef {
//!     idle: StateRef<PumpEvent>,
//!     running: StateRef<PumpEvent>,
//! }
//!
//! impl PumpDef {
//!     fn new() -> Self {
//!         Self {
//!             idle: StateBuilder::new("idle").build(),
//!             running: StateBuilder::new("running")
//!                 .on_enter(|| "Pump spinning up.".to_string())
//!                 .build(),
//!         }
//!     }
//! }
//!
//! impl MachineDef for PumpDef {
//!     type Event = PumpEvent;
//!
//!     fn name(&self) -> &str {
//!         "Pump"
//!     }
//!
//!     fn initial_state(&self) -> StateRef<PumpEvent> {
//!         self.idle.clone()
//!     }
//!
//!     fn transitions(&self) -> Vec<Transition<PumpEvent>> {
//!         vec![
//!             TransitionBuilder::new()
//!                 .on(PumpEvent::Start)
//!                 .from(self.idle.clone())
//!                 .to(self.running.clone())
//!                 .describe("Start pumping")
//!                 .build()
//!                 .unwrap(),
//!             TransitionBuilder::new()
//!                 .on(PumpEvent::Stop)
//!                 .from(self.running.clone())
//!                 .to(self.idle.clone())
//!                 .build()
//!                 .unwrap(),
//!         ]
//!     }
//! }
//!
//! let mut pump = StateMachine::new(&PumpDef::new());
//! let (effects, transition) = pump.handle_event(PumpEvent::Start);
//!
//! assert_eq!(transition.unwrap().description(), Some("Start pumping"));
//! assert_eq!(effects, vec!["on_enter_state > Pump spinning up."]);
//! assert_eq!(pump.state().name(), "running");
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateBuilder, TransitionBuilder};
pub use crate::core::{
    Action, Event, MachineDef, State, StateHistory, StateMachine, StateRef, Transition,
};
