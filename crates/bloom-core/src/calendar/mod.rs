//! Month grids for the calendar view.
//!
//! Months are zero-based (`0` = January) and weeks start on Sunday, so the
//! leading placeholder count of a grid equals the weekday index of the 1st.

mod month;

pub use month::{day_detail, month_view, DayCell, DayDetail, MonthCursor, MonthView};

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::error::ValidationError;

/// One slot in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "day")]
pub enum CalendarCell {
    /// Padding before the 1st of the month.
    Blank,
    /// Day of month, 1-based.
    Day(u32),
}

/// First day of a zero-based month.
///
/// # Errors
/// Fails for a month index above 11 or a year chrono cannot represent.
pub fn first_of_month(year: i32, month0: u32) -> Result<NaiveDate, ValidationError> {
    if month0 > 11 {
        return Err(ValidationError::InvalidMonth(month0));
    }
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or(ValidationError::InvalidYear(year))
}

/// Number of days in a zero-based month, leap years included.
pub fn days_in_month(year: i32, month0: u32) -> Result<u32, ValidationError> {
    let first = first_of_month(year, month0)?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or(ValidationError::InvalidYear(year))?;
    Ok(last.day())
}

/// Grid cells for a month: blanks up to the weekday of the 1st, then one
/// cell per day. No trailing padding.
pub fn month_grid(year: i32, month0: u32) -> Result<Vec<CalendarCell>, ValidationError> {
    let first = first_of_month(year, month0)?;
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(year, month0)?;

    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.extend(std::iter::repeat(CalendarCell::Blank).take(leading));
    cells.extend((1..=days).map(CalendarCell::Day));
    Ok(cells)
}
