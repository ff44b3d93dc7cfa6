//! Row styling.
//!
//! Rows leave the normalizer uncolored; this module decides per cell which
//! color to paint, based on the row kind and record type.

use colored::{Color, Colorize};

use crate::dns::{DisplayRow, RecordType, RowKind, RowValue};

/// Presentation options for rendering sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupOptions {
    /// Paint labels and values (default: true)
    pub colorize: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self { colorize: true }
    }
}

/// A plain cell with an optional color.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub color: Option<Color>,
}

impl Cell {
    fn new(text: impl Into<String>, color: Option<Color>) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    /// Paints `fragment` (part of this cell's text) with the cell color.
    pub fn paint(&self, fragment: &str, colorize: bool) -> String {
        match self.color {
            Some(color) if colorize && !fragment.is_empty() => fragment.color(color).to_string(),
            _ => fragment.to_string(),
        }
    }
}

fn label_color(row: &DisplayRow) -> Color {
    match (row.kind, row.record_type) {
        (RowKind::Error, _) => Color::Red,
        (RowKind::Record, RecordType::PTR) => Color::Blue,
        (RowKind::Record, _) => Color::Green,
    }
}

fn value_color(row: &DisplayRow) -> Color {
    match (row.kind, row.record_type) {
        (RowKind::Error, _) => Color::Red,
        (RowKind::Record, RecordType::PTR) => Color::Green,
        (RowKind::Record, _) => Color::Blue,
    }
}

/// Cells for a whole-set table: label, type, value (MX: priority, exchange).
pub fn style_row(row: &DisplayRow) -> Vec<Cell> {
    let mut cells = vec![
        Cell::new(row.label.clone(), Some(label_color(row))),
        Cell::new(row.record_type.as_str(), None),
    ];
    match &row.value {
        RowValue::Text(text) => cells.push(Cell::new(text.clone(), Some(value_color(row)))),
        RowValue::Mx { priority, exchange } => {
            cells.push(Cell::new(priority.to_string(), Some(Color::Yellow)));
            cells.push(Cell::new(exchange.clone(), Some(Color::Blue)));
        }
    }
    cells
}

/// Cells for the fixed three-column stream, MX values folded into one column.
pub fn style_row_folded(row: &DisplayRow) -> Vec<Cell> {
    vec![
        Cell::new(row.label.clone(), Some(label_color(row))),
        Cell::new(row.record_type.as_str(), None),
        Cell::new(row.value_text(), Some(value_color(row))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_colorize() {
        assert!(LookupOptions::default().colorize);
    }

    #[test]
    fn test_record_row_colors() {
        let row = DisplayRow::record(
            "example.com",
            RecordType::A,
            RowValue::Text("192.0.2.1".to_string()),
        );
        let cells = style_row(&row);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].color, Some(Color::Green));
        assert_eq!(cells[1].color, None);
        assert_eq!(cells[2].color, Some(Color::Blue));
    }

    #[test]
    fn test_ptr_row_colors() {
        let row = DisplayRow::record(
            "192.0.2.1",
            RecordType::PTR,
            RowValue::Text("host.example.com".to_string()),
        );
        let cells = style_row(&row);
        assert_eq!(cells[0].color, Some(Color::Blue));
        assert_eq!(cells[2].color, Some(Color::Green));
    }

    #[test]
    fn test_error_row_colors() {
        let row = DisplayRow::error("missing.example", RecordType::A, "ENOTFOUND");
        let cells = style_row(&row);
        assert_eq!(cells[0].color, Some(Color::Red));
        assert_eq!(cells[1].color, None);
        assert_eq!(cells[2].color, Some(Color::Red));
    }

    #[test]
    fn test_mx_row_cells() {
        let row = DisplayRow::record(
            "",
            RecordType::MX,
            RowValue::Mx {
                priority: 10,
                exchange: "mx.example.com".to_string(),
            },
        );
        let cells = style_row(&row);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[2].text, "10");
        assert_eq!(cells[2].color, Some(Color::Yellow));
        assert_eq!(cells[3].text, "mx.example.com");

        let folded = style_row_folded(&row);
        assert_eq!(folded.len(), 3);
        assert_eq!(folded[2].text, "10 mx.example.com");
    }

    #[test]
    fn test_paint_without_colors_is_plain() {
        let cell = Cell::new("example.com", Some(Color::Green));
        assert_eq!(cell.paint("example", false), "example");
        assert_eq!(Cell::new("A", None).paint("A", true), "A");
    }
}
