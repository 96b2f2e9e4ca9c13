//! Consecutive-day streak calculation.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};

/// Number of consecutive completed days ending at `today`, or at yesterday
/// when `today` has not been completed yet.
///
/// An unfinished today never breaks a streak; the first missing day walking
/// backwards does. Input order and duplicates are irrelevant.
pub fn calculate_streak<'a>(
    dates: impl IntoIterator<Item = &'a NaiveDate>,
    today: NaiveDate,
) -> u32 {
    let dates: HashSet<NaiveDate> = dates.into_iter().copied().collect();
    let start = if dates.contains(&today) {
        today
    } else {
        match today.checked_sub_days(Days::new(1)) {
            Some(yesterday) => yesterday,
            None => return 0,
        }
    };

    let mut streak = 0;
    let mut cursor = Some(start);
    while let Some(day) = cursor {
        if !dates.contains(&day) {
            break;
        }
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}
