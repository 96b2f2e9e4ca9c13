//! # Bloom Core Library
//!
//! This library provides the core logic for Bloom, a personal habit tracker
//! with a small agenda. All operations are available through the standalone
//! `bloom` CLI, which is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Habits**: habits tracked by the set of dates they were completed on,
//!   with streaks computed relative to "today"
//! - **Agenda**: one-off titled events on a date and time
//! - **Storage**: SQLite key-value snapshots and TOML configuration
//! - **Calendar**: Sunday-first month grids annotated with activity
//! - **Motivation**: short phrases from a Gemini-compatible service
//!
//! ## Key Components
//!
//! - [`AppState`]: both stores and the clock behind one owned value
//! - [`HabitStore`] / [`EventStore`]: write-through collections
//! - [`Database`]: snapshot persistence
//! - [`Config`]: application configuration management
//! - [`MotivationProvider`]: never-failing quote lookup

pub mod agenda;
pub mod app;
pub mod calendar;
pub mod clock;
pub mod error;
pub mod habit;
pub mod motivation;
pub mod stats;
pub mod storage;

pub use agenda::{AgendaEvent, EventStore};
pub use app::AppState;
pub use calendar::{month_grid, CalendarCell, MonthCursor};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, CoreError, DatabaseError, MotivationError, ValidationError};
pub use habit::{calculate_streak, Habit, HabitCategory, HabitColor, HabitStore};
pub use motivation::{GeminiClient, MotivationProvider, QuoteBoard, TextGenerator};
pub use storage::{Config, Database, SnapshotStore};
