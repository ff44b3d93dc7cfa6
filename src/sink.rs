//! Row sinks.
//!
//! A lookup delivers each row set to a [`RowSink`] exactly once. Sinks decide
//! what happens next: collect the rows, hand them to a callback, render them
//! (see [`crate::render`]), or drop them.

use std::io;

use crate::dns::DisplayRow;

/// Receives the row set of each completed lookup.
pub trait RowSink {
    fn accept(&mut self, rows: Vec<DisplayRow>) -> io::Result<()>;
}

impl<S: RowSink + ?Sized> RowSink for &mut S {
    fn accept(&mut self, rows: Vec<DisplayRow>) -> io::Result<()> {
        (**self).accept(rows)
    }
}

/// Keeps every row set in delivery order.
#[derive(Debug, Default)]
pub struct Collector {
    sets: Vec<Vec<DisplayRow>>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row sets in the order they were delivered.
    pub fn sets(&self) -> &[Vec<DisplayRow>] {
        &self.sets
    }

    /// All rows, flattened.
    pub fn into_rows(self) -> Vec<DisplayRow> {
        self.sets.into_iter().flatten().collect()
    }
}

impl RowSink for Collector {
    fn accept(&mut self, rows: Vec<DisplayRow>) -> io::Result<()> {
        self.sets.push(rows);
        Ok(())
    }
}

/// Hands each row set to a closure.
///
/// ```
/// use checkdns::{FnSink, RowSink};
///
/// let mut seen = 0;
/// let mut sink = FnSink(|rows: Vec<checkdns::DisplayRow>| seen += rows.len());
/// sink.accept(Vec::new()).unwrap();
/// ```
pub struct FnSink<F>(pub F);

impl<F> RowSink for FnSink<F>
where
    F: FnMut(Vec<DisplayRow>),
{
    fn accept(&mut self, rows: Vec<DisplayRow>) -> io::Result<()> {
        (self.0)(rows);
        Ok(())
    }
}

/// Runs lookups without producing output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl RowSink for Discard {
    fn accept(&mut self, _rows: Vec<DisplayRow>) -> io::Result<()> {
        Ok(())
    }
}
