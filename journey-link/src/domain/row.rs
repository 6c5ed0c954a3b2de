//! Station row identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a station row.
///
/// Ids survive value edits and are never reused within a row set, so the
/// reconciler can tell which row holds focus across structural changes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub u64);

impl fmt::Debug for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RowId({})", self.0)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user-editable station field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRow {
    pub id: RowId,
    /// Raw text as typed, possibly empty or whitespace
    #[serde(default)]
    pub value: String,
}

impl StationRow {
    /// Create a row with the given text.
    pub fn new(id: RowId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }

    /// Create a blank row.
    pub fn blank(id: RowId) -> Self {
        Self::new(id, String::new())
    }

    /// The value with surrounding whitespace removed.
    pub fn label(&self) -> &str {
        trim_label(&self.value)
    }

    /// Whether the row counts as filled (non-whitespace text).
    pub fn is_filled(&self) -> bool {
        !self.label().is_empty()
    }
}

/// Strip the whitespace a browser's `String.prototype.trim` strips.
///
/// That set differs from [`str::trim`] in two characters: U+FEFF (byte
/// order mark) is stripped, U+0085 (next line) is kept. Station labels are
/// embedded in the destination URL byte for byte, so the browser's set wins.
pub fn trim_label(text: &str) -> &str {
    text.trim_matches(is_label_whitespace)
}

fn is_label_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}
