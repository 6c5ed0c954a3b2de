//! Deep-link construction.
//!
//! Turns the station labels and the options snapshot into the URL the
//! journey planner opens. The query layout is an external contract: names,
//! order and quoting must match what the destination parses.

mod builder;
mod config;
mod encode;
mod schema;

pub use builder::{LinkBuilder, LinkOutput, generate_link};
pub use config::{DEFAULT_HOST, FormVariant, InvalidVariant, LinkConfig};
pub use encode::{encode_component, encode_stops};
pub use schema::{FieldValue, Formatter, Inclusion, OptionField, ParamSchema, ParamSpec};
