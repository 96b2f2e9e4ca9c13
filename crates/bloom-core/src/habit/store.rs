//! In-memory habit collection with write-through persistence.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::{Habit, HabitCategory, HabitColor};
use crate::error::CoreError;
use crate::storage::{load_snapshot, save_snapshot, SnapshotStore};

/// Storage key of the habit snapshot.
pub const HABITS_KEY: &str = "bloom_habits";

/// Habit collection backed by a snapshot store.
///
/// Every successful mutation rewrites the full snapshot before the
/// in-memory collection changes, so a failed write leaves both sides as
/// they were.
pub struct HabitStore<S: SnapshotStore> {
    storage: S,
    habits: Vec<Habit>,
}

impl<S: SnapshotStore> HabitStore<S> {
    /// Reads the stored snapshot; an absent snapshot yields an empty store.
    pub fn load(storage: S) -> Result<Self, CoreError> {
        let habits = load_snapshot(&storage, HABITS_KEY)?;
        Ok(Self { storage, habits })
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Appends a new habit with no completions.
    ///
    /// The name is stored as given; blank names are filtered out before
    /// reaching the store.
    pub fn add_habit(
        &mut self,
        name: impl Into<String>,
        category: HabitCategory,
        color: HabitColor,
        created_at: DateTime<Utc>,
    ) -> Result<Habit, CoreError> {
        let habit = Habit {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            category,
            color,
            completed_dates: Default::default(),
            created_at,
        };

        let mut next = self.habits.clone();
        next.push(habit.clone());
        self.commit(next)?;
        tracing::debug!(id = %habit.id, "habit added");
        Ok(habit)
    }

    /// Removes the habit with `id`. Returns the removed habit, or `None`
    /// when no habit matched (nothing is written in that case).
    pub fn delete_habit(&mut self, id: &str) -> Result<Option<Habit>, CoreError> {
        let Some(index) = self.habits.iter().position(|h| h.id == id) else {
            return Ok(None);
        };

        let mut next = self.habits.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        tracing::debug!(id, "habit deleted");
        Ok(Some(removed))
    }

    /// Flips completion of `date` for the habit with `id`.
    ///
    /// Returns `Some(true)` when the date is now completed, `Some(false)`
    /// when it was cleared and `None` for an unknown id.
    pub fn toggle_completion(
        &mut self,
        id: &str,
        date: NaiveDate,
    ) -> Result<Option<bool>, CoreError> {
        let Some(index) = self.habits.iter().position(|h| h.id == id) else {
            return Ok(None);
        };

        let mut next = self.habits.clone();
        let completed = next[index].toggle(date);
        self.commit(next)?;
        tracing::debug!(id, %date, completed, "habit completion toggled");
        Ok(Some(completed))
    }

    fn commit(&mut self, next: Vec<Habit>) -> Result<(), CoreError> {
        save_snapshot(&self.storage, HABITS_KEY, &next)?;
        self.habits = next;
        Ok(())
    }
}
