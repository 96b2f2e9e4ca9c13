//! Habit statistics for the stats view.
//!
//! Everything here is a pure projection over the habit collection; nothing
//! is cached or persisted.

mod series;

pub use series::{daily_completions, DailyCount, MAX_WINDOW_DAYS};

use chrono::NaiveDate;
use serde::Serialize;

use crate::habit::{Habit, HabitColor};

/// Labels longer than this many characters are truncated.
const SHORT_LABEL_CHARS: usize = 10;

/// Headline numbers across all habits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub active_habits: usize,
    /// Completed dates summed over every habit.
    pub total_completions: usize,
    /// Highest current streak, 0 without habits.
    pub best_streak: u32,
}

pub fn summary(habits: &[Habit], today: NaiveDate) -> StatsSummary {
    StatsSummary {
        active_habits: habits.len(),
        total_completions: habits.iter().map(|h| h.completed_dates.len()).sum(),
        best_streak: habits.iter().map(|h| h.streak(today)).max().unwrap_or(0),
    }
}

/// All-time completion count of one habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitFrequency {
    pub id: String,
    pub name: String,
    pub short_label: String,
    pub total: usize,
    pub color: HabitColor,
}

/// Per-habit completion totals in collection order.
pub fn habit_frequency(habits: &[Habit]) -> Vec<HabitFrequency> {
    habits
        .iter()
        .map(|h| HabitFrequency {
            id: h.id.clone(),
            name: h.name.clone(),
            short_label: short_label(&h.name),
            total: h.completed_dates.len(),
            color: h.color,
        })
        .collect()
}

fn short_label(name: &str) -> String {
    if name.chars().count() > SHORT_LABEL_CHARS {
        let head: String = name.chars().take(SHORT_LABEL_CHARS).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}
