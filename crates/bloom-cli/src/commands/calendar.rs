//! Calendar and day views for CLI.

use bloom_core::MonthCursor;
use chrono::{Datelike, NaiveDate};
use clap::Args;

use super::{open_app, print_json};

#[derive(Args)]
pub struct CalendarArgs {
    /// Year, defaults to the current one
    #[arg(long)]
    year: Option<i32>,
    /// Month 1-12, defaults to the current one
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,
}

#[derive(Args)]
pub struct DayArgs {
    /// Date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
}

pub fn run_month(args: CalendarArgs) -> Result<(), Box<dyn std::error::Error>> {
    let app = open_app()?;
    let today = app.today();
    let year = args.year.unwrap_or(today.year());
    let month0 = args.month.map_or(today.month0(), |m| m - 1);

    let cursor = MonthCursor::new(year, month0)?;
    let view = app.month_view(Some(cursor))?;
    print_json(&serde_json::json!({
        "view": view,
        "previous": cursor.previous(),
        "next": cursor.next(),
    }))
}

pub fn run_day(args: DayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let app = open_app()?;
    let date = args.date.unwrap_or_else(|| app.today());
    print_json(&app.day_detail(date))
}
