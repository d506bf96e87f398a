//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use todo_printer::{GroupedTodos, Painter, RenderConfig, ScreenPrinter, Todo};

/// Create a date from year, month and day
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Format a date the way the data layer stores due dates
pub fn due_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn days_after(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap()
}

pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap()
}

/// Create a test todo with a due date relative to `today`
pub fn todo_due_in(id: u32, subject: &str, today: NaiveDate, days: u64) -> Todo {
    Todo::new(id, subject).with_due(due_string(days_after(today, days)))
}

/// Render groups into a string with the given painter and default config
pub fn render_with(
    groups: &GroupedTodos,
    include_notes: bool,
    now: NaiveDate,
    painter: Painter,
) -> String {
    let mut printer = ScreenPrinter::new(Vec::new(), painter, &RenderConfig::default());
    printer.print(groups, include_notes, now).unwrap();
    String::from_utf8(printer.into_inner()).unwrap()
}

/// Render groups without colors
pub fn render_plain(groups: &GroupedTodos, include_notes: bool, now: NaiveDate) -> String {
    render_with(groups, include_notes, now, Painter::plain())
}

/// Non-empty lines of a rendering
pub fn lines(output: &str) -> Vec<&str> {
    output.lines().filter(|line| !line.trim().is_empty()).collect()
}
