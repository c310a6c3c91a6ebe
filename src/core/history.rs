//! In-memory record of the transitions a machine has taken.

use super::event::Event;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single completed transition.
///
/// Endpoint states are recorded by name; the hook closures they own are not
/// serializable and do not belong in a diagnostic record.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct EventRecord<E: Event> {
    /// The event that triggered the transition
    pub event: E,
    /// Name of the state transitioned from
    pub from: String,
    /// Name of the state transitioned to
    pub to: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of the transitions one machine has taken.
///
/// Only successful transitions are recorded; rejected events leave no trace
/// here. The history lives and dies with the machine instance — it is a
/// diagnostic aid, not persistence.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<E: Event> {
    records: Vec<EventRecord<E>>,
}

impl<E: Event> Default for StateHistory<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> StateHistory<E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, record: EventRecord<E>) {
        self.records.push(record);
    }

    /// All recorded transitions, in order.
    pub fn records(&self) -> &[EventRecord<E>] {
        &self.records
    }

    /// The sequence of state names traversed: the first record's `from`,
    /// then each record's `to`. Empty when nothing has been recorded.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Elapsed time between the first and last recorded transition, or
    /// `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
