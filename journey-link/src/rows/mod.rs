//! Station row management.
//!
//! Keeps the list of station inputs so that there is always a blank row to
//! type into and no pile of redundant blanks, without ever moving or
//! dropping the row the user is editing.

mod config;
mod reconcile;
mod row_set;

pub use config::RowConfig;
pub use reconcile::{Reconciliation, RowReconciler, reconcile};
pub use row_set::RowSet;
