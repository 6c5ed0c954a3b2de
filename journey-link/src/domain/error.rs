//! Error types for link building and row allocation.

/// Errors that stop a link from being generated.
///
/// There is exactly one: a form without any named station. Everything else
/// (dates, times, option tokens) is passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    /// Every station row is empty or whitespace
    #[error("Please enter at least one station.")]
    NoStations,
}

/// Every row id has been handed out; no further blank row can be created.
///
/// Only reachable from a client snapshot that already carries the largest
/// possible id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Row ids exhausted; reload the form.")]
pub struct RowIdsExhausted;
