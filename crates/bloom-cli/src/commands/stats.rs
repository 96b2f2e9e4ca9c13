use bloom_core::stats::MAX_WINDOW_DAYS;
use bloom_core::Config;
use clap::Subcommand;

use super::{open_app, print_json};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Active habits, total completions and best streak
    Summary,
    /// Completions per day, oldest first
    Daily {
        /// Number of days ending today (default: calendar.stats_window_days)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WINDOW_DAYS)))]
        days: Option<u32>,
    },
    /// All-time completions per habit
    Frequency,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let app = open_app()?;

    match action {
        StatsAction::Summary => print_json(&app.stats_summary())?,
        StatsAction::Daily { days } => {
            let days = match days {
                Some(days) => days,
                None => Config::load()?.calendar.stats_window_days,
            };
            print_json(&app.daily_completions(days))?;
        }
        StatsAction::Frequency => print_json(&app.habit_frequency())?,
    }
    Ok(())
}
