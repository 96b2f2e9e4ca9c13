//! In-memory event collection with write-through persistence.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use super::AgendaEvent;
use crate::error::CoreError;
use crate::storage::{load_snapshot, save_snapshot, SnapshotStore};

/// Storage key of the event snapshot.
pub const EVENTS_KEY: &str = "bloom_events";

/// Event collection backed by a snapshot store.
pub struct EventStore<S: SnapshotStore> {
    storage: S,
    events: Vec<AgendaEvent>,
}

impl<S: SnapshotStore> EventStore<S> {
    pub fn load(storage: S) -> Result<Self, CoreError> {
        let events = load_snapshot(&storage, EVENTS_KEY)?;
        Ok(Self { storage, events })
    }

    pub fn events(&self) -> &[AgendaEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events on `date`, earliest first.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&AgendaEvent> {
        let mut events: Vec<&AgendaEvent> =
            self.events.iter().filter(|e| e.date == date).collect();
        events.sort_by_key(|e| e.time);
        events
    }

    /// Appends a new event. No deduplication by content.
    pub fn add_event(
        &mut self,
        title: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<AgendaEvent, CoreError> {
        let event = AgendaEvent {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            date,
            time,
        };

        let mut next = self.events.clone();
        next.push(event.clone());
        self.commit(next)?;
        tracing::debug!(id = %event.id, %date, "event added");
        Ok(event)
    }

    /// Removes the event with `id`; `None` when nothing matched.
    pub fn delete_event(&mut self, id: &str) -> Result<Option<AgendaEvent>, CoreError> {
        let Some(index) = self.events.iter().position(|e| e.id == id) else {
            return Ok(None);
        };

        let mut next = self.events.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        tracing::debug!(id, "event deleted");
        Ok(Some(removed))
    }

    fn commit(&mut self, next: Vec<AgendaEvent>) -> Result<(), CoreError> {
        save_snapshot(&self.storage, EVENTS_KEY, &next)?;
        self.events = next;
        Ok(())
    }
}
