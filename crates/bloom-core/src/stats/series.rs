//! Completions per day over a trailing window.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::habit::Habit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    /// Habits completed on `date`.
    pub completions: usize,
}

/// Longest window the daily series covers, about ten years.
pub const MAX_WINDOW_DAYS: u32 = 3660;

/// One entry per day for the `days` days ending at `today`, oldest first.
///
/// Windows longer than [`MAX_WINDOW_DAYS`] are cut to that length.
pub fn daily_completions(habits: &[Habit], today: NaiveDate, days: u32) -> Vec<DailyCount> {
    (0..u64::from(days.min(MAX_WINDOW_DAYS)))
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(|date| DailyCount {
            date,
            completions: habits.iter().filter(|h| h.is_completed_on(date)).count(),
        })
        .collect()
}
