//! Row reconciliation configuration.

/// Default minimum number of station rows on the form.
pub const DEFAULT_MIN_ROWS: usize = 2;

/// Configuration for the row reconciler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowConfig {
    /// Rows that must exist after every reconciliation.
    pub min_rows: usize,
}

impl RowConfig {
    /// Set the minimum row count.
    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows = min_rows;
        self
    }
}

impl Default for RowConfig {
    fn default() -> Self {
        Self {
            min_rows: DEFAULT_MIN_ROWS,
        }
    }
}
