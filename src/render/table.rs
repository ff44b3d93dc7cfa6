//! Text tables.
//!
//! [`TablePrinter`] renders each row set as its own table with columns sized
//! to the content. [`TableStream`] writes rows one by one into a table with
//! fixed column widths, wrapping long values, so batch output appears as
//! lookups complete.

use std::io::{self, Write};

use unicode_segmentation::UnicodeSegmentation;

use super::style::{style_row, style_row_folded, Cell, LookupOptions};
use crate::config::STREAM_COLUMN_WIDTHS;
use crate::dns::DisplayRow;
use crate::sink::RowSink;

/// Corner and junction characters of one horizontal rule.
struct Rule {
    left: char,
    join: char,
    right: char,
}

const TOP: Rule = Rule {
    left: '┌',
    join: '┬',
    right: '┐',
};
const MIDDLE: Rule = Rule {
    left: '├',
    join: '┼',
    right: '┤',
};
const BOTTOM: Rule = Rule {
    left: '└',
    join: '┴',
    right: '┘',
};
const FILL: char = '─';
const SIDE: char = '│';

fn rule(widths: &[usize], kind: &Rule) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|width| FILL.to_string().repeat(width + 2))
        .collect();
    format!(
        "{}{}{}",
        kind.left,
        segments.join(&kind.join.to_string()),
        kind.right
    )
}

/// Number of columns `text` occupies, counted in grapheme clusters.
pub(crate) fn display_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Splits `text` into chunks of at most `width` grapheme clusters.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() || width == 0 {
        return vec![text.to_string()];
    }
    text.graphemes(true)
        .collect::<Vec<&str>>()
        .chunks(width)
        .map(|chunk| chunk.concat())
        .collect()
}

/// Renders the physical lines of one row.
fn row_lines(cells: &[Cell], widths: &[usize], border: bool, colorize: bool) -> Vec<String> {
    let wrapped: Vec<Vec<String>> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            cells
                .get(i)
                .map(|cell| wrap(&cell.text, *width))
                .unwrap_or_else(|| vec![String::new()])
        })
        .collect();
    let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

    (0..height)
        .map(|line| {
            let parts: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, width)| {
                    let fragment = wrapped[i].get(line).map(String::as_str).unwrap_or("");
                    let padding = width.saturating_sub(display_len(fragment));
                    let painted = cells
                        .get(i)
                        .map(|cell| cell.paint(fragment, colorize))
                        .unwrap_or_default();
                    format!(" {}{} ", painted, " ".repeat(padding))
                })
                .collect();
            if border {
                format!("{SIDE}{}{SIDE}", parts.join(&SIDE.to_string()))
            } else {
                parts.concat().trim_end().to_string()
            }
        })
        .collect()
}

/// Prints each row set as a table sized to its content.
pub struct TablePrinter<W: Write> {
    out: W,
    options: LookupOptions,
    border: bool,
}

impl<W: Write> TablePrinter<W> {
    /// A borderless printer.
    pub fn new(out: W, options: LookupOptions) -> Self {
        Self {
            out,
            options,
            border: false,
        }
    }

    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RowSink for TablePrinter<W> {
    fn accept(&mut self, rows: Vec<DisplayRow>) -> io::Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let styled: Vec<Vec<Cell>> = rows.iter().map(style_row).collect();
        let columns = styled.iter().map(Vec::len).max().unwrap_or(0);
        let widths: Vec<usize> = (0..columns)
            .map(|i| {
                styled
                    .iter()
                    .filter_map(|cells| cells.get(i))
                    .map(|cell| display_len(&cell.text))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = Vec::new();
        if self.border {
            lines.push(rule(&widths, &TOP));
        }
        for (i, cells) in styled.iter().enumerate() {
            if self.border && i > 0 {
                lines.push(rule(&widths, &MIDDLE));
            }
            lines.extend(row_lines(cells, &widths, self.border, self.options.colorize));
        }
        if self.border {
            lines.push(rule(&widths, &BOTTOM));
        }

        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Streams rows into a bordered table with fixed column widths.
///
/// The top border is written with the first row and every later row is
/// preceded by a separator; call [`TableStream::finish`] to close the table.
pub struct TableStream<W: Write> {
    out: W,
    options: LookupOptions,
    widths: Vec<usize>,
    rows_written: usize,
}

impl<W: Write> TableStream<W> {
    /// A stream with the default label, type, and value widths.
    pub fn new(out: W, options: LookupOptions) -> Self {
        Self::with_widths(out, options, STREAM_COLUMN_WIDTHS)
    }

    pub fn with_widths(out: W, options: LookupOptions, widths: [usize; 3]) -> Self {
        Self {
            out,
            options,
            widths: widths.to_vec(),
            rows_written: 0,
        }
    }

    /// Number of rows written so far.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Writes one row immediately.
    pub fn write_row(&mut self, row: &DisplayRow) -> io::Result<()> {
        let separator = if self.rows_written == 0 { &TOP } else { &MIDDLE };
        writeln!(self.out, "{}", rule(&self.widths, separator))?;
        for line in row_lines(
            &style_row_folded(row),
            &self.widths,
            true,
            self.options.colorize,
        ) {
            writeln!(self.out, "{line}")?;
        }
        self.rows_written += 1;
        self.out.flush()
    }

    /// Writes the bottom border if any row was written.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.rows_written > 0 {
            writeln!(self.out, "{}", rule(&self.widths, &BOTTOM))?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RowSink for TableStream<W> {
    fn accept(&mut self, rows: Vec<DisplayRow>) -> io::Result<()> {
        for row in &rows {
            self.write_row(row)?;
        }
        Ok(())
    }
}
