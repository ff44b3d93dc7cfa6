//! Batch statistics.
//!
//! Counts targets per outcome while a batch runs and logs the totals at the
//! end, grouped by error code.

use std::collections::BTreeMap;

use log::info;

use crate::dns::DisplayRow;

/// Outcome counts for one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Targets looked up
    pub targets: usize,
    /// Targets that produced record rows (or no rows at all)
    pub resolved: usize,
    /// Targets that produced an error row
    pub failed: usize,
    /// Failed targets per error code
    pub failures_by_code: BTreeMap<String, usize>,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the row set of one target.
    pub fn record(&mut self, rows: &[DisplayRow]) {
        self.targets += 1;
        match rows.iter().find(|row| row.is_error()) {
            Some(row) => {
                self.failed += 1;
                *self
                    .failures_by_code
                    .entry(row.value_text())
                    .or_insert(0) += 1;
            }
            None => self.resolved += 1,
        }
    }

    /// Logs the totals and the per-code failure counts.
    pub fn log_summary(&self) {
        info!(
            "Looked up {} target{} ({} resolved, {} failed)",
            self.targets,
            if self.targets == 1 { "" } else { "s" },
            self.resolved,
            self.failed
        );

        if self.failed > 0 {
            info!("Error Counts ({} total):", self.failed);
            for (code, count) in &self.failures_by_code {
                info!("   {}: {}", code, count);
            }
        }
    }
}
