//! Web layer for the journey link builder.
//!
//! Serves the form and exposes the row reconciler and link builder as JSON
//! endpoints for the page script. The server keeps no per-user state: every
//! request carries the full form snapshot.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
