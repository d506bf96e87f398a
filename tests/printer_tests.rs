//! Grouped rendering tests
mod common;

use common::*;
use todo_printer::{
    Color, GroupedTodos, Painter, RenderConfig, RenderError, ScreenPrinter, Style, Todo,
    mark_completed,
};

#[test]
fn test_group_headers_are_sorted() {
    let today = date(2025, 6, 2);
    let mut groups = GroupedTodos::new();
    groups.insert("zeta", Todo::new(1, "last"));
    groups.insert("alpha", Todo::new(2, "first"));
    groups.insert("mid", Todo::new(3, "middle"));

    let output = render_plain(&groups, false, today);
    let alpha = output.find(" alpha\n").unwrap();
    let mid = output.find(" mid\n").unwrap();
    let zeta = output.find(" zeta\n").unwrap();
    assert!(alpha < mid && mid < zeta);
}

#[test]
fn test_todo_order_within_group_is_kept() {
    let today = date(2025, 6, 2);
    let mut groups = GroupedTodos::new();
    groups.insert("inbox", Todo::new(9, "nine"));
    groups.insert("inbox", Todo::new(2, "two"));
    groups.insert("inbox", Todo::new(5, "five"));

    let output = render_plain(&groups, false, today);
    let nine = output.find("nine").unwrap();
    let two = output.find("two").unwrap();
    let five = output.find("five").unwrap();
    assert!(nine < two && two < five);
}

#[test]
fn test_columns_are_aligned_across_groups() {
    let today = date(2025, 6, 2);
    let mut groups = GroupedTodos::new();
    groups.insert("a", todo_due_in(1, "short", today, 1));
    groups.insert("b", Todo::new(100, "long id"));

    let output = render_plain(&groups, false, today);
    assert_eq!(
        output,
        "\n a\n 1   [x] tomorrow  short\n\n b\n 100 [x]           long id\n"
    );
}

#[test]
fn test_empty_collection_renders_nothing() {
    let output = render_plain(&GroupedTodos::new(), true, date(2025, 6, 2));
    assert!(output.is_empty());
}

#[test]
fn test_empty_group_renders_header_only() {
    let mut groups = GroupedTodos::new();
    groups.groups.insert("empty".to_string(), Vec::new());
    let output = render_plain(&groups, false, date(2025, 6, 2));
    assert_eq!(output, "\n empty\n");
}

#[test]
fn test_completion_marker_ignores_priority_and_due() {
    let today = date(2025, 6, 2);
    let mut groups = GroupedTodos::new();
    groups.insert(
        "g",
        todo_due_in(1, "done", today, 0)
            .with_completed(true)
            .with_priority(true),
    );
    groups.insert("g", Todo::new(2, "open"));

    let output = render_plain(&groups, false, today);
    let rows = lines(&output);
    assert!(rows[1].contains("[v]"));
    assert!(rows[2].contains("[x]"));

    let painter = Painter::new(true);
    let colored = render_with(&groups, false, today, painter);
    assert!(colored.contains(&mark_completed(true, &painter)));
    assert!(colored.contains(&mark_completed(false, &painter)));
}

#[test]
fn test_notes_printed_only_when_requested() {
    let today = date(2025, 6, 2);
    let mut groups = GroupedTodos::new();
    groups.insert(
        "inbox",
        Todo::new(1, "call")
            .with_note(3, "third")
            .with_note(1, "first"),
    );

    let without = render_plain(&groups, false, today);
    assert_eq!(lines(&without).len(), 2);

    let with = render_plain(&groups, true, today);
    let rows = lines(&with);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[2], "   1 first");
    assert_eq!(rows[3], "   3 third");
}

#[test]
fn test_priority_todo_end_to_end() {
    let today = date(2025, 6, 2);
    let mut groups = GroupedTodos::new();
    groups.insert(
        "inbox",
        Todo::new(1, "+proj @ctx plain")
            .with_due(due_string(today))
            .with_priority(true),
    );

    let plain = render_plain(&groups, false, today);
    let rows = lines(&plain);
    assert_eq!(rows, vec![" inbox", " 1 [x] today  +proj @ctx plain"]);

    let painter = Painter::new(true);
    let colored = render_with(&groups, false, today, painter);
    let emphasized = |text: &str, color: Color| painter.paint(text, Style::for_priority(color, true));
    assert!(colored.contains(&emphasized("1", Color::White)));
    assert!(colored.contains(&emphasized("today", Color::BrightRed)));
    assert!(colored.contains(&emphasized("+proj", Color::BrightBlue)));
    assert!(colored.contains(&emphasized("@ctx", Color::BrightWhite)));
    assert!(colored.contains(&emphasized("plain", Color::White)));
    assert!(colored.contains(&mark_completed(false, &painter)));
    assert!(colored.contains(&painter.paint("inbox", Style::plain(Color::BrightBlue))));
}

#[test]
fn test_non_priority_fields_have_no_emphasis() {
    let today = date(2025, 6, 2);
    let mut groups = GroupedTodos::new();
    groups.insert("g", todo_due_in(4, "+proj word", today, 1));

    let painter = Painter::new(true);
    let colored = render_with(&groups, false, today, painter);
    let emphasized = |text: &str, color: Color| painter.paint(text, Style::for_priority(color, true));
    assert!(!colored.contains(&emphasized("4", Color::White)));
    assert!(!colored.contains(&emphasized("tomorrow", Color::Yellow)));
    assert!(colored.contains(&painter.paint("tomorrow", Style::plain(Color::Yellow))));
    assert!(colored.contains(&painter.paint("+proj", Style::plain(Color::BrightBlue))));
}

#[test]
fn test_corrupt_due_date_aborts_render() {
    let today = date(2025, 6, 2);
    let mut groups = GroupedTodos::new();
    groups.insert("a", Todo::new(1, "ok"));
    groups.insert("b", Todo::new(2, "bad").with_due("June 2nd"));

    let mut printer = ScreenPrinter::new(Vec::new(), Painter::plain(), &RenderConfig::default());
    let err = printer.print(&groups, false, today).unwrap_err();
    assert!(matches!(err, RenderError::CorruptDueDate { .. }));
    assert_eq!(err.exit_code(), 65);
    assert!(printer.into_inner().is_empty());
}

#[test]
fn test_separate_renders_do_not_share_widths() {
    let today = date(2025, 6, 2);
    let mut wide = GroupedTodos::new();
    wide.insert("g", Todo::new(12345, "wide"));
    let mut narrow = GroupedTodos::new();
    narrow.insert("g", Todo::new(1, "narrow"));

    let mut printer = ScreenPrinter::new(Vec::new(), Painter::plain(), &RenderConfig::default());
    printer.print(&wide, false, today).unwrap();
    printer.print(&narrow, false, today).unwrap();
    let output = String::from_utf8(printer.into_inner()).unwrap();
    assert!(output.ends_with("\n g\n 1 [x]    narrow\n"));
}
