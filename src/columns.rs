//! Column-aligning output sink
//!
//! Rows are buffered until [`ColumnWriter::flush`], which sizes each column to
//! its widest cell across every buffered row. Widths come from the unpainted
//! text, so escape sequences never shift the layout.

use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// One aligned field: painted text plus the display width of its plain text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub width: usize,
}

impl Cell {
    pub fn new(painted: String, plain: &str) -> Self {
        Self {
            text: painted,
            width: plain.width(),
        }
    }

    /// Cell whose text carries no styling
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = text.width();
        Self { text, width }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    /// Aligned cells followed by an unaligned trailing field
    Row { cells: Vec<Cell>, trailing: String },
    /// Written as-is, outside the column layout
    Raw(String),
}

/// Buffers rows and writes them with shared column widths
#[derive(Debug)]
pub struct ColumnWriter<W: Write> {
    out: W,
    padding: usize,
    lines: Vec<Line>,
}

impl<W: Write> ColumnWriter<W> {
    /// `padding` is the number of spaces after the widest cell of a column
    pub fn new(out: W, padding: usize) -> Self {
        Self {
            out,
            padding,
            lines: Vec::new(),
        }
    }

    pub fn write_row(&mut self, cells: Vec<Cell>, trailing: impl Into<String>) {
        self.lines.push(Line::Row {
            cells,
            trailing: trailing.into(),
        });
    }

    pub fn write_raw(&mut self, line: impl Into<String>) {
        self.lines.push(Line::Raw(line.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for line in &self.lines {
            if let Line::Row { cells, .. } = line {
                for (column, cell) in cells.iter().enumerate() {
                    match widths.get_mut(column) {
                        Some(width) => *width = (*width).max(cell.width),
                        None => widths.push(cell.width),
                    }
                }
            }
        }
        widths
    }

    /// Write every buffered line and empty the buffer
    pub fn flush(&mut self) -> io::Result<()> {
        let widths = self.column_widths();
        for line in self.lines.drain(..) {
            match line {
                Line::Raw(text) => writeln!(self.out, "{}", text)?,
                Line::Row { cells, trailing } => {
                    for (cell, width) in cells.iter().zip(&widths) {
                        let pad = width - cell.width + self.padding;
                        write!(self.out, "{}{:pad$}", cell.text, "", pad = pad)?;
                    }
                    writeln!(self.out, "{}", trailing)?;
                }
            }
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
