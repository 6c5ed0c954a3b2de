//! Application state for the web layer.

use std::sync::Arc;

use crate::link::{LinkBuilder, LinkConfig};
use crate::rows::{RowConfig, RowReconciler};

/// Shared application state.
///
/// Only configuration lives here; form state travels with each request.
#[derive(Clone)]
pub struct AppState {
    /// Row reconciler
    pub reconciler: Arc<RowReconciler>,

    /// Link builder
    pub builder: Arc<LinkBuilder>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(rows: RowConfig, link: LinkConfig) -> Self {
        Self {
            reconciler: Arc::new(RowReconciler::new(rows)),
            builder: Arc::new(LinkBuilder::new(link)),
        }
    }
}
