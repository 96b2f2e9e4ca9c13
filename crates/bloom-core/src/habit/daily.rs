//! Today's checklist: every habit with its completion state and streak.

use chrono::NaiveDate;
use serde::Serialize;

use super::Habit;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyEntry {
    pub habit: Habit,
    pub completed_today: bool,
    pub current_streak: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyChecklist {
    pub date: NaiveDate,
    pub completed: usize,
    pub total: usize,
    pub entries: Vec<DailyEntry>,
}

/// Builds the checklist for `today`.
///
/// Habits still open today come first; within each group the collection
/// order is kept.
pub fn daily_checklist(habits: &[Habit], today: NaiveDate) -> DailyChecklist {
    let mut entries: Vec<DailyEntry> = habits
        .iter()
        .map(|habit| DailyEntry {
            completed_today: habit.is_completed_on(today),
            current_streak: habit.streak(today),
            habit: habit.clone(),
        })
        .collect();
    entries.sort_by_key(|entry| entry.completed_today);

    DailyChecklist {
        date: today,
        completed: entries.iter().filter(|e| e.completed_today).count(),
        total: entries.len(),
        entries,
    }
}
