//! Row reconciliation.
//!
//! Runs after every edit to a station field and decides which blank rows
//! survive and whether new blanks are needed:
//!
//! 1. The focused row is kept if it is empty, even transiently.
//! 2. Otherwise only the last empty row is kept, as the next blank slot.
//! 3. Further empties are salvaged from the end while the form would drop
//!    below the minimum row count.
//! 4. All other empty rows are deleted.
//! 5. A filled last row gets a blank appended after it.
//! 6. Blanks are appended until the minimum is met.
//!
//! Two refinements make a second pass a no-op: a trailing blank that is
//! about to be deleted is reused instead of recreated, and an unfocused
//! blank that would end up in front of a filled row is dropped in favour of
//! the trailing one.

use tracing::debug;

use crate::domain::{RowId, RowIdsExhausted};

use super::config::RowConfig;
use super::row_set::RowSet;

/// Result of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// The new row set, in display order
    pub rows: RowSet,
    /// Rows created by this pass, in append order
    pub added: Vec<RowId>,
    /// Rows deleted by this pass, in their former display order
    pub removed: Vec<RowId>,
}

impl Reconciliation {
    /// Whether the pass changed the structure of the row set.
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Reconciler bound to a configuration.
#[derive(Debug, Clone, Default)]
pub struct RowReconciler {
    config: RowConfig,
}

impl RowReconciler {
    pub fn new(config: RowConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RowConfig {
        &self.config
    }

    /// Reconcile `rows` given the row that currently holds focus.
    pub fn reconcile(
        &self,
        rows: &RowSet,
        focused: Option<RowId>,
    ) -> Result<Reconciliation, RowIdsExhausted> {
        reconcile(rows, focused, self.config.min_rows)
    }
}

/// Compute the reconciled row set.
///
/// `focused` may name a row that no longer exists; it is then ignored.
/// Fails only when a blank row is needed and `rows` has no ids left.
pub fn reconcile(
    rows: &RowSet,
    focused: Option<RowId>,
    min_rows: usize,
) -> Result<Reconciliation, RowIdsExhausted> {
    let current = rows.rows();

    let empty: Vec<usize> = (0..current.len())
        .filter(|&i| !current[i].is_filled())
        .collect();
    let last_filled = (0..current.len()).rev().find(|&i| current[i].is_filled());
    let filled_count = current.len() - empty.len();

    let focused_empty =
        focused.and_then(|id| empty.iter().copied().find(|&i| current[i].id == id));

    let mut keep: Vec<usize> = match (focused_empty, empty.last()) {
        (Some(i), _) => vec![i],
        (None, Some(&last)) => vec![last],
        (None, None) => Vec::new(),
    };

    if needs_trailing(last_filled, &keep) {
        match current.len().checked_sub(1) {
            Some(last) if !current[last].is_filled() && !keep.contains(&last) => keep.push(last),
            _ if focused_empty.is_none() => keep.clear(),
            _ => {}
        }
    }

    let mut salvage: Vec<usize> = empty.iter().copied().filter(|i| !keep.contains(i)).collect();
    while projected_len(filled_count, last_filled, &keep, min_rows) < min_rows {
        match salvage.pop() {
            Some(i) => keep.push(i),
            None => break,
        }
    }

    let removed: Vec<RowId> = empty
        .iter()
        .filter(|&&i| !keep.contains(&i))
        .map(|&i| current[i].id)
        .collect();

    let mut next = rows.clone();
    next.retain(|i, row| row.is_filled() || keep.contains(&i));

    let mut added = Vec::new();
    match next.rows().last() {
        None => {
            for _ in 0..min_rows {
                added.push(next.push_blank()?);
            }
        }
        Some(last) if last.is_filled() => added.push(next.push_blank()?),
        Some(_) => {}
    }
    while next.len() < min_rows {
        added.push(next.push_blank()?);
    }

    debug!(
        before = current.len(),
        after = next.len(),
        added = added.len(),
        removed = removed.len(),
        "reconciled station rows"
    );

    Ok(Reconciliation {
        rows: next,
        added,
        removed,
    })
}

/// Whether the surviving rows would end without a blank.
fn needs_trailing(last_filled: Option<usize>, keep: &[usize]) -> bool {
    match (last_filled, keep.iter().max()) {
        (None, None) => true,
        (Some(f), Some(&k)) => f > k,
        (Some(_), None) => true,
        (None, Some(_)) => false,
    }
}

/// Row count after steps 4 to 6, given the current keep set.
fn projected_len(
    filled_count: usize,
    last_filled: Option<usize>,
    keep: &[usize],
    min_rows: usize,
) -> usize {
    let survivors = filled_count + keep.len();
    let appended = if survivors == 0 {
        min_rows
    } else if needs_trailing(last_filled, keep) {
        1
    } else {
        0
    };
    survivors + appended
}
