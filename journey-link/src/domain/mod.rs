//! Domain types for the journey link builder.
//!
//! These are the values the form collaborator hands to the core: station
//! rows with stable identities, the trip options snapshot, and the stops
//! that end up serialized into the destination URL.

mod error;
mod options;
mod row;
mod stop;

pub use error::{LinkError, RowIdsExhausted};
pub use options::FormOptions;
pub use row::{RowId, StationRow, trim_label};
pub use stop::{Stop, collect_stops};
