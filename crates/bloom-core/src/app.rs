//! Application state: both stores plus the clock, passed around by
//! reference instead of living in globals.
//!
//! This is also the input boundary. Blank names and titles are dropped here
//! without touching the stores.

use chrono::{NaiveDate, NaiveTime};

use crate::agenda::{AgendaEvent, EventStore};
use crate::calendar::{day_detail, month_view, DayDetail, MonthCursor, MonthView};
use crate::clock::Clock;
use crate::error::{CoreError, ValidationError};
use crate::habit::{daily_checklist, DailyChecklist, Habit, HabitCategory, HabitColor, HabitStore};
use crate::stats::{self, DailyCount, HabitFrequency, StatsSummary};
use crate::storage::SnapshotStore;

pub struct AppState<S: SnapshotStore, C: Clock> {
    habits: HabitStore<S>,
    events: EventStore<S>,
    clock: C,
}

impl<S: SnapshotStore + Clone, C: Clock> AppState<S, C> {
    /// Loads both collections from `storage`.
    pub fn load(storage: S, clock: C) -> Result<Self, CoreError> {
        Ok(Self {
            habits: HabitStore::load(storage.clone())?,
            events: EventStore::load(storage)?,
            clock,
        })
    }
}

impl<S: SnapshotStore, C: Clock> AppState<S, C> {
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn habits(&self) -> &[Habit] {
        self.habits.habits()
    }

    pub fn events(&self) -> &[AgendaEvent] {
        self.events.events()
    }

    pub fn habit_names(&self) -> Vec<&str> {
        self.habits().iter().map(|h| h.name.as_str()).collect()
    }

    /// Creates a habit. A blank name is ignored and yields `None`.
    pub fn add_habit(
        &mut self,
        name: &str,
        category: HabitCategory,
        color: HabitColor,
    ) -> Result<Option<Habit>, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            tracing::debug!("ignoring habit with blank name");
            return Ok(None);
        }
        let now = self.clock.now();
        self.habits.add_habit(name, category, color, now).map(Some)
    }

    /// Toggles completion on `date`, today when not given.
    pub fn toggle_habit(
        &mut self,
        id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Option<bool>, CoreError> {
        let date = date.unwrap_or_else(|| self.clock.today());
        self.habits.toggle_completion(id, date)
    }

    /// Deletes a habit after `confirm` approves it.
    ///
    /// Returns `None` for an unknown id or a declined confirmation; the
    /// confirmation is not asked for an unknown id.
    pub fn delete_habit(
        &mut self,
        id: &str,
        confirm: impl FnOnce(&Habit) -> bool,
    ) -> Result<Option<Habit>, CoreError> {
        if !self.habits.get(id).is_some_and(confirm) {
            return Ok(None);
        }
        self.habits.delete_habit(id)
    }

    /// Schedules an event. A blank title is ignored and yields `None`.
    pub fn add_event(
        &mut self,
        title: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Option<AgendaEvent>, CoreError> {
        let title = title.trim();
        if title.is_empty() {
            tracing::debug!("ignoring event with blank title");
            return Ok(None);
        }
        self.events.add_event(title, date, time).map(Some)
    }

    pub fn delete_event(&mut self, id: &str) -> Result<Option<AgendaEvent>, CoreError> {
        self.events.delete_event(id)
    }

    /// Events on `date`, earliest first.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&AgendaEvent> {
        self.events.events_on(date)
    }

    pub fn daily_checklist(&self) -> DailyChecklist {
        daily_checklist(self.habits(), self.today())
    }

    /// Month grid for `cursor`, or the current month.
    pub fn month_view(&self, cursor: Option<MonthCursor>) -> Result<MonthView, ValidationError> {
        let today = self.today();
        let cursor = cursor.unwrap_or_else(|| MonthCursor::containing(today));
        month_view(cursor, self.habits(), self.events(), today)
    }

    pub fn day_detail(&self, date: NaiveDate) -> DayDetail {
        day_detail(date, self.habits(), self.events())
    }

    pub fn stats_summary(&self) -> StatsSummary {
        stats::summary(self.habits(), self.today())
    }

    pub fn daily_completions(&self, days: u32) -> Vec<DailyCount> {
        stats::daily_completions(self.habits(), self.today(), days)
    }

    pub fn habit_frequency(&self) -> Vec<HabitFrequency> {
        stats::habit_frequency(self.habits())
    }
}
