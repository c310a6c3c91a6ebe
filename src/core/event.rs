//! Core Event trait for machine stimuli.
//!
//! Events are the external stimuli offered to a state machine. Each machine
//! defines its own closed catalog of events, typically as a plain enum.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine events.
///
/// Events are finite, comparable tokens. A machine's event catalog is closed:
/// every event it can receive is a variant of one enum, so dispatch tables
/// can be checked exhaustively at compile time.
///
/// # Required Traits
///
/// - `Clone`: events must be cloneable for history tracking
/// - `Eq` + `Hash`: events key the per-state hook maps
/// - `Debug`: events must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: events must be serializable so history
///   records containing them can be serialized
///
/// The [`event_enum!`](crate::event_enum) macro generates this implementation
/// for simple enums.
///
/// # Example
///
/// ```rust
/// use machina::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorEvent {
///     Open,
///     Close,
///     Lock,
/// }
///
/// impl Event for DoorEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Close => "Close",
///             Self::Lock => "Lock",
///         }
///     }
/// }
///
/// assert_eq!(DoorEvent::Lock.name(), "Lock");
/// ```
pub trait Event:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Connect,
        Disconnect,
        Poll,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Connect => "Connect",
                Self::Disconnect => "Disconnect",
                Self::Poll => "Poll",
            }
        }
    }

    #[test]
    fn event_name_returns_correct_value() {
        assert_eq!(TestEvent::Connect.name(), "Connect");
        assert_eq!(TestEvent::Disconnect.name(), "Disconnect");
        assert_eq!(TestEvent::Poll.name(), "Poll");
    }

    #[test]
    fn event_is_comparable() {
        assert_eq!(TestEvent::Connect, TestEvent::Connect);
        assert_ne!(TestEvent::Connect, TestEvent::Poll);
    }

    #[test]
    fn event_serializes_correctly() {
        let event = TestEvent::Poll;
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: TestEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
