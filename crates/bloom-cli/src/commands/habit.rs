//! Habit management commands for CLI.

use std::io::{BufRead, Write};

use bloom_core::{Habit, HabitCategory, HabitColor};
use chrono::NaiveDate;
use clap::Subcommand;

use super::{open_app, print_json};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Add {
        /// Habit name
        name: String,
        /// Category: health, work, studies, spiritual or leisure
        #[arg(long, default_value = "health")]
        category: HabitCategory,
        /// Palette color name (pink, violet, emerald, amber, blue) or hex code
        #[arg(long, default_value = "pink")]
        color: HabitColor,
    },
    /// List habits
    List {
        /// Print the full collection as JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle completion of a habit on a date
    Toggle {
        /// Habit ID
        id: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Delete a habit
    Delete {
        /// Habit ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Today's checklist
    Today {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = open_app()?;

    match action {
        HabitAction::Add {
            name,
            category,
            color,
        } => match app.add_habit(&name, category, color)? {
            Some(habit) => {
                eprintln!("Habit created: {}", habit.id);
                print_json(&habit)?;
            }
            None => eprintln!("nothing to do: habit name is empty"),
        },
        HabitAction::List { json } => {
            if json {
                print_json(app.habits())?;
            } else {
                let today = app.today();
                for habit in app.habits() {
                    println!(
                        "{}  {}  [{}]  streak {}",
                        habit.id,
                        habit.name,
                        habit.category,
                        habit.streak(today)
                    );
                }
            }
        }
        HabitAction::Toggle { id, date } => match app.toggle_habit(&id, date)? {
            Some(true) => println!("completed"),
            Some(false) => println!("cleared"),
            None => println!("Habit not found: {id}"),
        },
        HabitAction::Delete { id, yes } => {
            let removed = app.delete_habit(&id, |habit| yes || confirm_delete(habit))?;
            match removed {
                Some(habit) => println!("Habit deleted: {}", habit.id),
                None if app.habits().iter().any(|h| h.id == id) => println!("cancelled"),
                None => println!("Habit not found: {id}"),
            }
        }
        HabitAction::Today { json } => {
            let checklist = app.daily_checklist();
            if json {
                print_json(&checklist)?;
            } else {
                println!(
                    "{}: {}/{} done",
                    checklist.date, checklist.completed, checklist.total
                );
                for entry in &checklist.entries {
                    let mark = if entry.completed_today { "x" } else { " " };
                    println!(
                        "[{mark}] {}  streak {}  ({})",
                        entry.habit.name, entry.current_streak, entry.habit.id
                    );
                }
            }
        }
    }
    Ok(())
}

/// Asks on stderr and reads a y/N answer from stdin. Anything but `y`/`yes`
/// declines, including end of input.
fn confirm_delete(habit: &Habit) -> bool {
    eprint!("Delete habit '{}'? [y/N] ", habit.name);
    let _ = std::io::stderr().flush();

    let mut answer = String::new();
    match std::io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
