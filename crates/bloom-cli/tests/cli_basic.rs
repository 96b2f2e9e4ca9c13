//! Basic CLI E2E tests.
//!
//! Tests invoke the built `bloom` binary against a throwaway data directory
//! and verify outputs.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use serde_json::Value;
use tempfile::TempDir;

/// Run a CLI command with `data_dir` as the data directory.
fn run_cli(data_dir: &Path, args: &[&str]) -> (i32, String, String) {
    run_cli_with_input(data_dir, args, "")
}

fn run_cli_with_input(data_dir: &Path, args: &[&str], input: &str) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bloom"))
        .args(args)
        .env("BLOOM_DATA_DIR", data_dir)
        .env_remove("BLOOM_API_KEY")
        .env_remove("GEMINI_API_KEY")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    if let Some(mut stdin) = child.stdin.take() {
        let _ = stdin.write_all(input.as_bytes());
    }
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (output.status.code().unwrap_or(-1), stdout, stderr)
}

fn run_json(data_dir: &Path, args: &[&str]) -> Value {
    let (code, stdout, stderr) = run_cli(data_dir, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

fn add_habit(data_dir: &Path, name: &str) -> String {
    let habit = run_json(data_dir, &["habit", "add", name, "--category", "studies"]);
    habit["id"].as_str().unwrap().to_string()
}

#[test]
fn test_habit_add_and_list() {
    let dir = TempDir::new().unwrap();
    let habit = run_json(
        dir.path(),
        &["habit", "add", "Ler 10 páginas", "--color", "violet"],
    );
    assert_eq!(habit["name"], "Ler 10 páginas");
    assert_eq!(habit["category"], "health");
    assert_eq!(habit["color"], "#8b5cf6");
    assert_eq!(habit["completedDates"], Value::Array(vec![]));

    let list = run_json(dir.path(), &["habit", "list", "--json"]);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["id"], habit["id"]);
}

#[test]
fn test_blank_habit_name_is_ignored() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, stderr) = run_cli(dir.path(), &["habit", "add", "   "]);
    assert_eq!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("nothing to do"));

    let list = run_json(dir.path(), &["habit", "list", "--json"]);
    assert!(list.as_array().unwrap().is_empty());
}

#[test]
fn test_unknown_category_is_rejected() {
    let dir = TempDir::new().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["habit", "add", "Nadar", "--category", "sports"]);
    assert_ne!(code, 0);
}

#[test]
fn test_habit_toggle_twice() {
    let dir = TempDir::new().unwrap();
    let id = add_habit(dir.path(), "Estudar");

    let (code, stdout, _) = run_cli(dir.path(), &["habit", "toggle", &id, "--date", "2024-02-29"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "completed");

    let list = run_json(dir.path(), &["habit", "list", "--json"]);
    assert_eq!(list[0]["completedDates"][0], "2024-02-29");

    let (_, stdout, _) = run_cli(dir.path(), &["habit", "toggle", &id, "--date", "2024-02-29"]);
    assert_eq!(stdout.trim(), "cleared");
    let list = run_json(dir.path(), &["habit", "list", "--json"]);
    assert!(list[0]["completedDates"].as_array().unwrap().is_empty());
}

#[test]
fn test_habit_today_counts_completion() {
    let dir = TempDir::new().unwrap();
    let id = add_habit(dir.path(), "Meditar");
    add_habit(dir.path(), "Correr");

    run_cli(dir.path(), &["habit", "toggle", &id]);
    let today = run_json(dir.path(), &["habit", "today", "--json"]);
    assert_eq!(today["completed"], 1);
    assert_eq!(today["total"], 2);
    // Open habits come first.
    assert_eq!(today["entries"][0]["habit"]["name"], "Correr");
    assert_eq!(today["entries"][1]["current_streak"], 1);
}

#[test]
fn test_habit_delete_asks_for_confirmation() {
    let dir = TempDir::new().unwrap();
    let id = add_habit(dir.path(), "Yoga");

    let (code, stdout, stderr) = run_cli_with_input(dir.path(), &["habit", "delete", &id], "n\n");
    assert_eq!(code, 0);
    assert!(stderr.contains("Delete habit 'Yoga'?"));
    assert_eq!(stdout.trim(), "cancelled");
    assert_eq!(run_json(dir.path(), &["habit", "list", "--json"]).as_array().unwrap().len(), 1);

    let (_, stdout, _) = run_cli_with_input(dir.path(), &["habit", "delete", &id], "y\n");
    assert!(stdout.contains("Habit deleted"));
    assert!(run_json(dir.path(), &["habit", "list", "--json"]).as_array().unwrap().is_empty());
}

#[test]
fn test_habit_delete_unknown_id() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["habit", "delete", "missing", "--yes"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Habit not found"));
}

#[test]
fn test_event_add_list_delete() {
    let dir = TempDir::new().unwrap();
    let late = run_json(
        dir.path(),
        &["event", "add", "Jantar", "--date", "2024-05-02", "--time", "20:00"],
    );
    let early = run_json(dir.path(), &["event", "add", "Consulta", "--date", "2024-05-02"]);
    assert_eq!(early["time"], "09:00");

    let day = run_json(dir.path(), &["event", "list", "--date", "2024-05-02"]);
    assert_eq!(day[0]["title"], "Consulta");
    assert_eq!(day[1]["title"], "Jantar");

    let (_, stdout, _) = run_cli(dir.path(), &["event", "delete", late["id"].as_str().unwrap()]);
    assert!(stdout.contains("Event deleted"));
    let all = run_json(dir.path(), &["event", "list"]);
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[test]
fn test_event_rejects_bad_time() {
    let dir = TempDir::new().unwrap();
    let (code, _, _) = run_cli(
        dir.path(),
        &["event", "add", "Aula", "--date", "2024-05-02", "--time", "9h"],
    );
    assert_ne!(code, 0);
}

#[test]
fn test_calendar_leap_february() {
    let dir = TempDir::new().unwrap();
    let id = add_habit(dir.path(), "Ler");
    run_cli(dir.path(), &["habit", "toggle", &id, "--date", "2024-02-10"]);
    run_json(dir.path(), &["event", "add", "Aniversário", "--date", "2024-02-14"]);

    let out = run_json(dir.path(), &["calendar", "--year", "2024", "--month", "2"]);
    let cells = out["view"]["cells"].as_array().unwrap();
    let blanks = cells.iter().take_while(|c| c.is_null()).count();
    assert_eq!(blanks, 4);
    assert_eq!(cells.len(), 4 + 29);
    assert_eq!(cells[blanks + 9]["has_activity"], true);
    assert_eq!(cells[blanks + 13]["event_count"], 1);
    assert_eq!(out["previous"]["month0"], 0);
    assert_eq!(out["next"]["month0"], 2);
}

#[test]
fn test_calendar_rejects_month_13() {
    let dir = TempDir::new().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["calendar", "--month", "13"]);
    assert_ne!(code, 0);
}

#[test]
fn test_day_detail() {
    let dir = TempDir::new().unwrap();
    let id = add_habit(dir.path(), "Orar");
    run_cli(dir.path(), &["habit", "toggle", &id, "--date", "2024-03-01"]);
    run_json(dir.path(), &["event", "add", "Missa", "--date", "2024-03-01", "--time", "18:30"]);

    let detail = run_json(dir.path(), &["day", "--date", "2024-03-01"]);
    assert_eq!(detail["completed_habits"][0]["name"], "Orar");
    assert_eq!(detail["events"][0]["time"], "18:30");
}

#[test]
fn test_stats_commands() {
    let dir = TempDir::new().unwrap();
    let id = add_habit(dir.path(), "Beber água todos os dias");
    run_cli(dir.path(), &["habit", "toggle", &id]);

    let summary = run_json(dir.path(), &["stats", "summary"]);
    assert_eq!(summary["active_habits"], 1);
    assert_eq!(summary["total_completions"], 1);
    assert_eq!(summary["best_streak"], 1);

    let daily = run_json(dir.path(), &["stats", "daily", "--days", "7"]);
    let daily = daily.as_array().unwrap();
    assert_eq!(daily.len(), 7);
    assert_eq!(daily[6]["completions"], 1);

    let default_window = run_json(dir.path(), &["stats", "daily"]);
    assert_eq!(default_window.as_array().unwrap().len(), 30);

    let freq = run_json(dir.path(), &["stats", "frequency"]);
    assert_eq!(freq[0]["short_label"], "Beber água...");
    assert_eq!(freq[0]["total"], 1);
}

#[test]
fn test_stats_window_is_bounded() {
    let dir = TempDir::new().unwrap();
    for days in ["0", "3661", "4294967295"] {
        let (code, stdout, _) = run_cli(dir.path(), &["stats", "daily", "--days", days]);
        assert_ne!(code, 0, "--days {days} accepted");
        assert!(stdout.is_empty());
    }
    let longest = run_json(dir.path(), &["stats", "daily", "--days", "3660"]);
    assert_eq!(longest.as_array().unwrap().len(), 3660);

    let (code, _, stderr) = run_cli(
        dir.path(),
        &["config", "set", "calendar.stats_window_days", "100000"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("calendar.stats_window_days"));
    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "calendar.stats_window_days"]);
    assert_eq!(stdout.trim(), "30");
}

#[test]
fn test_motivate_without_habits_is_onboarding() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["motivate"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Adicione seu primeiro hábito!"));
}

#[test]
fn test_motivate_without_api_key_falls_back() {
    let dir = TempDir::new().unwrap();
    add_habit(dir.path(), "Ler");
    let (code, stdout, _) = run_cli(dir.path(), &["motivate"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "Cada pequeno passo é uma vitória. Continue firme!");
}

#[test]
fn test_config_get_set_reset() {
    let dir = TempDir::new().unwrap();
    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "motivation.max_words"]);
    assert_eq!(stdout.trim(), "20");

    let (code, _, _) = run_cli(dir.path(), &["config", "set", "calendar.stats_window_days", "7"]);
    assert_eq!(code, 0);
    let list = run_json(dir.path(), &["config", "list"]);
    assert_eq!(list["calendar"]["stats_window_days"], 7);

    let (code, stdout, stderr) = run_cli(dir.path(), &["config", "get", "nope"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("error:"));
    assert!(stderr.contains("unknown config key: nope"));

    run_cli(dir.path(), &["config", "reset"]);
    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "calendar.stats_window_days"]);
    assert_eq!(stdout.trim(), "30");
}

#[test]
fn test_unreadable_database_is_an_error() {
    let dir = TempDir::new().unwrap();
    add_habit(dir.path(), "Ler");
    std::fs::write(dir.path().join("bloom.db"), b"definitely not sqlite").unwrap();

    let (code, stdout, stderr) = run_cli(dir.path(), &["habit", "list", "--json"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("error:"));
}
