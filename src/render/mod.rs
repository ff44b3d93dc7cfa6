//! Table rendering for lookup rows.

mod style;
mod table;

pub use style::{style_row, style_row_folded, Cell, LookupOptions};
pub use table::{TablePrinter, TableStream};
