//! Ordered station rows with an id allocator.

use crate::domain::{RowId, RowIdsExhausted, StationRow};

/// The station rows of one form, in display order.
///
/// Owns id allocation so that every blank row it creates gets an id that
/// has never been used in this set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSet {
    rows: Vec<StationRow>,
    /// `None` once `u64::MAX` has been handed out
    next_id: Option<u64>,
}

impl Default for RowSet {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: Some(0),
        }
    }
}

impl RowSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set of `count` blank rows.
    pub fn with_blank_rows(count: usize) -> Self {
        let count = count as u64;
        Self {
            rows: (0..count).map(|i| StationRow::blank(RowId(i))).collect(),
            next_id: Some(count),
        }
    }

    /// Rebuild a set from a client snapshot.
    ///
    /// New ids continue after the highest id present. A snapshot holding
    /// `u64::MAX` is accepted but cannot grow.
    pub fn from_rows(rows: Vec<StationRow>) -> Self {
        let next_id = match rows.iter().map(|r| r.id.0).max() {
            Some(highest) => highest.checked_add(1),
            None => Some(0),
        };
        Self { rows, next_id }
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[StationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a row by id.
    pub fn get(&self, id: RowId) -> Option<&StationRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Whether a row with this id exists.
    pub fn contains(&self, id: RowId) -> bool {
        self.get(id).is_some()
    }

    /// Replace the text of a row. Returns `false` if the id is unknown.
    pub fn set_value(&mut self, id: RowId, value: impl Into<String>) -> bool {
        match self.rows.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Append a blank row and return its id.
    pub fn push_blank(&mut self) -> Result<RowId, RowIdsExhausted> {
        let id = self.next_id.ok_or(RowIdsExhausted)?;
        self.next_id = id.checked_add(1);
        self.rows.push(StationRow::blank(RowId(id)));
        Ok(RowId(id))
    }

    /// Raw row values in display order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.value.as_str())
    }

    /// Keep only rows matching the predicate, preserving order and the
    /// id allocator.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(usize, &StationRow) -> bool) {
        let mut index = 0;
        self.rows.retain(|row| {
            let kept = keep(index, row);
            index += 1;
            kept
        });
    }
}
