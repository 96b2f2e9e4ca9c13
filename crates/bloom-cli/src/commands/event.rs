//! Agenda event commands for CLI.

use chrono::{NaiveDate, NaiveTime};
use clap::Subcommand;

use super::{open_app, parse_time_arg, print_json};

#[derive(Subcommand)]
pub enum EventAction {
    /// Schedule an event
    Add {
        /// Event title
        title: String,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Time of day (HH:MM)
        #[arg(long, default_value = "09:00", value_parser = parse_time_arg)]
        time: NaiveTime,
    },
    /// List events, optionally for one date
    List {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Delete an event
    Delete {
        /// Event ID
        id: String,
    },
}

pub fn run(action: EventAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = open_app()?;

    match action {
        EventAction::Add { title, date, time } => match app.add_event(&title, date, time)? {
            Some(event) => {
                eprintln!("Event created: {}", event.id);
                print_json(&event)?;
            }
            None => eprintln!("nothing to do: event title is empty"),
        },
        EventAction::List { date } => match date {
            Some(date) => print_json(&app.events_on(date))?,
            None => {
                let mut events = app.events().to_vec();
                events.sort_by_key(|e| (e.date, e.time));
                print_json(&events)?;
            }
        },
        EventAction::Delete { id } => match app.delete_event(&id)? {
            Some(event) => println!("Event deleted: {}", event.id),
            None => println!("Event not found: {id}"),
        },
    }
    Ok(())
}
