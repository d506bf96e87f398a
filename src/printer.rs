//! Grouped, column-aligned todo rendering
//!
//! Output shape (colors omitted):
//!
//! ```text
//!
//!  inbox
//!  1   [x] today      +proj @ctx plain
//!  12  [v] Mon Jan 6  call back
//!    1 first note
//! ```
//!
//! The id, marker and due columns are aligned; the subject and note text
//! trail unpadded. A note id shares the id column.
//!
//! Headers sit outside the columns. Every row of one render shares the same
//! column widths because the sink is flushed once, after the last group.

use crate::columns::{Cell, ColumnWriter};
use crate::config::RenderConfig;
use crate::due::DueClassifier;
use crate::error::Result;
use crate::style::{ACCENT, Color, Painter, Style};
use crate::subject::style_subject;
use crate::todo::{GroupedTodos, Todo, local_date_today};
use chrono::{NaiveDate, Weekday};
use is_terminal::IsTerminal;
use std::io::{self, Stdout, Write};

/// Completion glyph: `[v]` when done, `[x]` otherwise; priority never applies
pub fn mark_completed(completed: bool, painter: &Painter) -> String {
    let (glyph, color) = if completed {
        ("v", Color::BrightGreen)
    } else {
        ("x", Color::BrightRed)
    };
    format!("[{}]", painter.paint(glyph, Style::plain(color)))
}

/// Renders grouped todos to a writer
pub struct ScreenPrinter<W: Write> {
    out: W,
    painter: Painter,
    week_start: Weekday,
    padding: usize,
}

impl ScreenPrinter<Stdout> {
    /// Printer for standard output, resolving `auto` color against the terminal
    pub fn stdout(config: &RenderConfig) -> Self {
        let stdout = io::stdout();
        let color = config.color.resolve(stdout.is_terminal());
        Self::new(stdout, Painter::new(color), config)
    }
}

impl<W: Write> ScreenPrinter<W> {
    pub fn new(out: W, painter: Painter, config: &RenderConfig) -> Self {
        Self {
            out,
            painter,
            week_start: config.week_start,
            padding: config.padding,
        }
    }

    /// Render against the local calendar day, captured once for the whole call
    pub fn print_today(&mut self, groups: &GroupedTodos, include_notes: bool) -> Result<()> {
        self.print(groups, include_notes, local_date_today())
    }

    /// Render every group in ascending key order
    ///
    /// Nothing reaches the writer unless every todo renders; a corrupt due
    /// date aborts the call with [`RenderError::CorruptDueDate`] and leaves
    /// the writer untouched.
    ///
    /// [`RenderError::CorruptDueDate`]: crate::error::RenderError::CorruptDueDate
    pub fn print(
        &mut self,
        groups: &GroupedTodos,
        include_notes: bool,
        now: NaiveDate,
    ) -> Result<()> {
        let classifier = DueClassifier::with_week_start(now, self.week_start);
        let mut writer = ColumnWriter::new(&mut self.out, self.padding);

        for key in groups.sorted_keys() {
            writer.write_raw("");
            writer.write_raw(format!(" {}", self.painter.paint(key, Style::plain(ACCENT))));

            for todo in &groups.groups[key] {
                let (cells, subject) = todo_row(todo, &classifier, &self.painter)?;
                writer.write_row(cells, subject);

                if include_notes {
                    for (note_id, note) in &todo.notes {
                        let id = note_id.to_string();
                        let cell = Cell::new(
                            format!("   {}", self.painter.paint(&id, Style::plain(ACCENT))),
                            &format!("   {}", id),
                        );
                        writer.write_row(vec![cell], note.as_str());
                    }
                }
            }
        }

        tracing::debug!(
            groups = groups.groups.len(),
            todos = groups.len(),
            include_notes,
            %now,
            "rendering todos"
        );
        writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Aligned id, marker and due cells plus the trailing styled subject
fn todo_row(
    todo: &Todo,
    classifier: &DueClassifier,
    painter: &Painter,
) -> Result<(Vec<Cell>, String)> {
    let due = classifier.classify(todo.due_str())?;

    let id = todo.id.to_string();
    let id_cell = Cell::new(
        format!(
            " {}",
            painter.paint(&id, Style::for_priority(Color::White, todo.is_priority))
        ),
        &format!(" {}", id),
    );
    let marker_cell = Cell::new(mark_completed(todo.completed, painter), "[x]");
    let due_cell = Cell::new(
        painter.paint(
            &due.text,
            Style::for_priority(due.bucket.color(), todo.is_priority),
        ),
        &due.text,
    );
    let subject = format!(
        " {}",
        style_subject(&todo.subject, todo.is_priority, painter)
    );

    Ok((vec![id_cell, marker_cell, due_cell], subject))
}
