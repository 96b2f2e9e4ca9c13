pub mod calendar;
pub mod config;
pub mod event;
pub mod habit;
pub mod motivate;
pub mod stats;

use std::error::Error;
use std::rc::Rc;

use bloom_core::{AppState, Database, SystemClock};
use serde::Serialize;

pub type App = AppState<Rc<Database>, SystemClock>;

/// Opens the database in the data directory and loads both collections.
pub fn open_app() -> Result<App, Box<dyn Error>> {
    let db = Rc::new(Database::open()?);
    Ok(AppState::load(db, SystemClock)?)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Clap parser for `HH:MM` times.
pub fn parse_time_arg(value: &str) -> Result<chrono::NaiveTime, String> {
    bloom_core::agenda::parse_time(value).ok_or_else(|| format!("'{value}' is not a HH:MM time"))
}
