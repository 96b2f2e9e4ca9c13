//! Month view annotated with habit activity and agenda events.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::{first_of_month, month_grid, CalendarCell};
use crate::agenda::AgendaEvent;
use crate::error::ValidationError;
use crate::habit::Habit;

/// A (year, zero-based month) position with wrap-around navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCursor {
    pub year: i32,
    pub month0: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month0: u32) -> Result<Self, ValidationError> {
        first_of_month(year, month0)?;
        Ok(Self { year, month0 })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn previous(self) -> Self {
        if self.month0 == 0 {
            Self {
                year: self.year - 1,
                month0: 11,
            }
        } else {
            Self {
                month0: self.month0 - 1,
                ..self
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month0 == 11 {
            Self {
                year: self.year + 1,
                month0: 0,
            }
        } else {
            Self {
                month0: self.month0 + 1,
                ..self
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub is_today: bool,
    /// At least one habit was completed on this date.
    pub has_activity: bool,
    pub event_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub year: i32,
    pub month0: u32,
    /// `None` for leading placeholders.
    pub cells: Vec<Option<DayCell>>,
}

/// Builds the annotated grid for one month.
pub fn month_view(
    cursor: MonthCursor,
    habits: &[Habit],
    events: &[AgendaEvent],
    today: NaiveDate,
) -> Result<MonthView, ValidationError> {
    let first = first_of_month(cursor.year, cursor.month0)?;
    let mut event_counts: HashMap<NaiveDate, usize> = HashMap::new();
    for event in events {
        *event_counts.entry(event.date).or_default() += 1;
    }

    let cells = month_grid(cursor.year, cursor.month0)?
        .into_iter()
        .map(|cell| match cell {
            CalendarCell::Blank => None,
            CalendarCell::Day(day) => first.with_day(day).map(|date| DayCell {
                date,
                day,
                is_today: date == today,
                has_activity: habits.iter().any(|h| h.is_completed_on(date)),
                event_count: event_counts.get(&date).copied().unwrap_or(0),
            }),
        })
        .collect();

    Ok(MonthView {
        year: cursor.year,
        month0: cursor.month0,
        cells,
    })
}

/// What happened on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayDetail {
    pub date: NaiveDate,
    pub completed_habits: Vec<Habit>,
    /// Ordered by time of day.
    pub events: Vec<AgendaEvent>,
}

pub fn day_detail(date: NaiveDate, habits: &[Habit], events: &[AgendaEvent]) -> DayDetail {
    let mut day_events: Vec<AgendaEvent> =
        events.iter().filter(|e| e.date == date).cloned().collect();
    day_events.sort_by_key(|e| e.time);

    DayDetail {
        date,
        completed_habits: habits
            .iter()
            .filter(|h| h.is_completed_on(date))
            .cloned()
            .collect(),
        events: day_events,
    }
}
