//! Todo Printer Library
//!
//! This library renders todo lists to a terminal as grouped, column-aligned,
//! color-coded text. Todos arrive already loaded and grouped; the library only
//! decides how each field looks and lays the rows out.
//!
//! # Architecture
//!
//! The library is split into two layers:
//! - **Classification**: `due` buckets due dates by urgency, `subject` splits
//!   subjects into plain words, `+project` tags and `@context` tags
//! - **Rendering**: `printer` assembles styled rows per group and hands them to
//!   the `columns` sink, which aligns every row of a render in one flush
//!
//! Styles are plain values (`style`), built per field from the semantic color
//! and the todo's priority flag.
//!
//! # Example
//!
//! ```
//! use todo_printer::{GroupedTodos, Painter, RenderConfig, ScreenPrinter, Todo};
//! use chrono::NaiveDate;
//!
//! # fn main() -> todo_printer::Result<()> {
//! let mut groups = GroupedTodos::new();
//! groups.insert("inbox", Todo::new(1, "+work call @phone").with_due("2025-01-15"));
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let mut printer = ScreenPrinter::new(Vec::new(), Painter::plain(), &RenderConfig::default());
//! printer.print(&groups, false, today)?;
//!
//! let output = String::from_utf8(printer.into_inner()).unwrap();
//! assert!(output.contains("today"));
//! # Ok(())
//! # }
//! ```

pub mod columns;
pub mod config;
pub mod due;
pub mod error;
pub mod grouping;
pub mod printer;
pub mod style;
pub mod subject;
pub mod todo;

// Re-export commonly used types
pub use config::{ColorChoice, RenderConfig};
pub use due::{DueClassifier, DueDisplay, UrgencyBucket, classify};
pub use error::{RenderError, Result};
pub use grouping::{GroupBy, regroup};
pub use printer::{ScreenPrinter, mark_completed};
pub use style::{Color, Painter, Style};
pub use subject::{SubjectToken, TokenKind, style_subject, tokenize};
pub use todo::{GroupedTodos, Todo, local_date_today};
