//! The event-dispatch engine.

use super::event::Event;
use super::history::{EventRecord, StateHistory};
use super::state::StateRef;
use super::transition::Transition;
use chrono::Utc;
use std::sync::Arc;

/// Construction contract for machine definitions.
///
/// A definition supplies the initial state and the complete, ordered
/// transition table. [`StateMachine::new`] calls both factories exactly
/// once; the machine is ready to accept events from the moment it returns.
///
/// Every `StateRef` a definition hands out must be the shared allocation it
/// used when declaring transitions — dispatch matches states by pointer
/// identity, not by name.
///
/// # Example
///
/// ```rust
/// use machina::builder::{StateBuilder, TransitionBuilder};
/// use machina::core::{MachineDef, StateMachine, StateRef, Transition};
/// use machina::event_enum;
///
/// event_enum! {
///     pub enum DoorEvent {
///         Open,
///         Close,
///     }
/// }
///
/// struct DoorDef {
///     open: StateRef<DoorEvent>,
///     closed: StateRef<DoorEvent>,
/// }
///
/// impl DoorDef {
///     fn new() -> Self {
///         Self {
///             open: StateBuilder::new("open").build(),
///             closed: StateBuilder::new("closed").build(),
///         }
///     }
/// }
///
/// impl MachineDef for DoorDef {
///     type Event = DoorEvent;
///
///     fn name(&self) -> &str {
///         "Door"
///     }
///
///     fn initial_state(&self) -> StateRef<DoorEvent> {
///         self.closed.clone()
///     }
///
///     fn transitions(&self) -> Vec<Transition<DoorEvent>> {
///         vec![
///             TransitionBuilder::new()
///                 .on(DoorEvent::Open)
///                 .from(self.closed.clone())
///                 .to(self.open.clone())
///                 .build()
///                 .unwrap(),
///             TransitionBuilder::new()
///                 .on(DoorEvent::Close)
///                 .from(self.open.clone())
///                 .to(self.closed.clone())
///                 .build()
///                 .unwrap(),
///         ]
///     }
/// }
///
/// let mut machine = StateMachine::new(&DoorDef::new());
/// let (_, transition) = machine.handle_event(DoorEvent::Open);
/// assert!(transition.is_some());
/// assert_eq!(machine.state().name(), "open");
/// ```
pub trait MachineDef {
    /// The machine's closed event catalog.
    type Event: Event;

    /// Diagnostic name for the machine.
    fn name(&self) -> &str;

    /// The state the machine starts in.
    fn initial_state(&self) -> StateRef<Self::Event>;

    /// The complete transition table, in declaration order. Order matters:
    /// when duplicate `(from, trigger)` entries exist, the first one wins.
    fn transitions(&self) -> Vec<Transition<Self::Event>>;
}

/// The dispatch engine: owns the current state and the transition table,
/// and drives hook execution for each event offered to it.
///
/// A machine is single-owner and synchronous: `handle_event` takes
/// `&mut self`, runs every hook to completion on the caller's thread, and
/// imposes no timeout on actions. Concurrent producers must serialize their
/// events before calling in.
pub struct StateMachine<E: Event> {
    name: String,
    current: StateRef<E>,
    transitions: Vec<Transition<E>>,
    history: StateHistory<E>,
}

impl<E: Event> StateMachine<E> {
    /// Build a machine from a definition, invoking its two factories
    /// exactly once.
    pub fn new<D>(def: &D) -> Self
    where
        D: MachineDef<Event = E>,
    {
        Self {
            name: def.name().to_string(),
            current: def.initial_state(),
            transitions: def.transitions(),
            history: StateHistory::new(),
        }
    }

    /// The machine's diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current state.
    pub fn state(&self) -> &StateRef<E> {
        &self.current
    }

    /// The transitions taken so far.
    pub fn history(&self) -> &StateHistory<E> {
        &self.history
    }

    /// Offer an event to the machine.
    ///
    /// Returns the ordered effect list produced by the hooks that ran, plus
    /// the transition that matched, if any:
    ///
    /// 1. The current state's `on_event` hooks for this event always run
    ///    first — they represent things that happen while staying put, and
    ///    are not skipped when a transition also fires.
    /// 2. The table is scanned in declaration order for the first entry
    ///    whose source is the current state and whose trigger equals the
    ///    event.
    /// 3. No match: the state is unchanged and the transition is `None`.
    ///    This is the normal "invalid event for this state" outcome, not an
    ///    error.
    /// 4. On a match the remaining phases run in strict order — the old
    ///    state's `on_exit`, the transition's `on_trigger`, the state swap,
    ///    the new state's `on_enter` — and their effects are concatenated
    ///    after the head in exactly that order.
    pub fn handle_event(&mut self, event: E) -> (Vec<String>, Option<&Transition<E>>) {
        let mut effects = self.current.on_event(&event);

        let Some(index) = self.find_transition(&event) else {
            return (effects, None);
        };

        effects.extend(self.current.on_exit());
        let transition = &self.transitions[index];
        effects.extend(transition.on_trigger());
        self.history.record(EventRecord {
            event,
            from: transition.from().name().to_string(),
            to: transition.to().name().to_string(),
            timestamp: Utc::now(),
        });
        self.current = Arc::clone(transition.to());
        effects.extend(self.current.on_enter());

        (effects, Some(transition))
    }

    /// First transition matching `(current state, event)`, by declaration
    /// order. Linear scan; the table is small and set once.
    fn find_transition(&self, event: &E) -> Option<usize> {
        self.transitions
            .iter()
            .position(|t| Arc::ptr_eq(t.from(), &self.current) && t.trigger() == event)
    }
}
