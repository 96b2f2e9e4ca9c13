//! Habit types, the habit store and streak arithmetic.
//!
//! A habit is tracked purely by the set of calendar dates on which it was
//! completed. The set is a `BTreeSet`, so a date can appear at most once and
//! snapshot order is deterministic.

mod daily;
mod store;
mod streak;

pub use daily::{daily_checklist, DailyChecklist, DailyEntry};
pub use store::{HabitStore, HABITS_KEY};
pub use streak::calculate_streak;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Closed palette of habit categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HabitCategory {
    #[default]
    Health,
    Work,
    Studies,
    Spiritual,
    Leisure,
}

impl HabitCategory {
    pub const ALL: [HabitCategory; 5] = [
        HabitCategory::Health,
        HabitCategory::Work,
        HabitCategory::Studies,
        HabitCategory::Spiritual,
        HabitCategory::Leisure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HabitCategory::Health => "health",
            HabitCategory::Work => "work",
            HabitCategory::Studies => "studies",
            HabitCategory::Spiritual => "spiritual",
            HabitCategory::Leisure => "leisure",
        }
    }
}

impl fmt::Display for HabitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HabitCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        HabitCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "category".into(),
                message: format!(
                    "'{s}' is not one of health, work, studies, spiritual, leisure"
                ),
            })
    }
}

/// Display color token. Serialized as its hex code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HabitColor {
    #[default]
    #[serde(rename = "#ec4899")]
    Pink,
    #[serde(rename = "#8b5cf6")]
    Violet,
    #[serde(rename = "#10b981")]
    Emerald,
    #[serde(rename = "#f59e0b")]
    Amber,
    #[serde(rename = "#3b82f6")]
    Blue,
}

impl HabitColor {
    pub const ALL: [HabitColor; 5] = [
        HabitColor::Pink,
        HabitColor::Violet,
        HabitColor::Emerald,
        HabitColor::Amber,
        HabitColor::Blue,
    ];

    pub fn hex(&self) -> &'static str {
        match self {
            HabitColor::Pink => "#ec4899",
            HabitColor::Violet => "#8b5cf6",
            HabitColor::Emerald => "#10b981",
            HabitColor::Amber => "#f59e0b",
            HabitColor::Blue => "#3b82f6",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HabitColor::Pink => "pink",
            HabitColor::Violet => "violet",
            HabitColor::Emerald => "emerald",
            HabitColor::Amber => "amber",
            HabitColor::Blue => "blue",
        }
    }
}

impl fmt::Display for HabitColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// Accepts either the palette name (`violet`) or the hex code (`#8b5cf6`).
impl FromStr for HabitColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        HabitColor::ALL
            .into_iter()
            .find(|c| c.name() == wanted || c.hex() == wanted)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "color".into(),
                message: format!("'{s}' is not in the color palette"),
            })
    }
}

/// A recurring activity tracked by daily completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub category: HabitCategory,
    pub color: HabitColor,
    #[serde(default)]
    pub completed_dates: BTreeSet<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Habit {
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }

    /// Flips membership of `date`. Returns whether the date is now present.
    pub fn toggle(&mut self, date: NaiveDate) -> bool {
        if self.completed_dates.remove(&date) {
            false
        } else {
            self.completed_dates.insert(date);
            true
        }
    }

    /// Current streak relative to `today`.
    pub fn streak(&self, today: NaiveDate) -> u32 {
        calculate_streak(&self.completed_dates, today)
    }
}
