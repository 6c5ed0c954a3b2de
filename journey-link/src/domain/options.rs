//! Trip options snapshot.

use serde::{Deserialize, Serialize};

/// Default trip-time qualifier.
pub const DEFAULT_MOMENT: &str = "departure";

/// Default language path segment.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Everything on the form except the station rows.
///
/// This is a read-only snapshot taken for one link generation. None of the
/// values are validated: dates, times and option tokens belong to the
/// destination service and are passed through as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormOptions {
    pub date: Option<String>,
    pub time: Option<String>,
    /// Departure/arrival qualifier, always emitted
    pub moment: String,
    /// Language code used as the URL path segment
    pub language: String,

    /// Selected transport modes, in form order
    pub transport_modes: Vec<String>,
    /// Selected accessibility filters, in form order
    pub accessibility_filters: Vec<String>,
    /// Selected attributes, in form order
    pub attributes: Vec<String>,

    pub walk_speed: Option<String>,
    pub occupancy: Option<String>,

    pub direct_connection: bool,
    pub economic_connection: bool,
    pub unsharp_connection: bool,
    pub show_accessibility: bool,
    pub hide_prices: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            date: None,
            time: None,
            moment: DEFAULT_MOMENT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            transport_modes: Vec::new(),
            accessibility_filters: Vec::new(),
            attributes: Vec::new(),
            walk_speed: None,
            occupancy: None,
            direct_connection: false,
            economic_connection: false,
            unsharp_connection: false,
            show_accessibility: false,
            hide_prices: false,
        }
    }
}

impl FormOptions {
    /// Options with the given moment and language and nothing else set.
    pub fn new(moment: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            moment: moment.into(),
            language: language.into(),
            ..Self::default()
        }
    }

    /// The date, if one was entered.
    pub fn date(&self) -> Option<&str> {
        non_empty(&self.date)
    }

    /// The time, if one was entered.
    pub fn time(&self) -> Option<&str> {
        non_empty(&self.time)
    }

    /// The walk speed, if one was selected.
    pub fn walk_speed(&self) -> Option<&str> {
        non_empty(&self.walk_speed)
    }

    /// The occupancy, if one was selected.
    pub fn occupancy(&self) -> Option<&str> {
        non_empty(&self.occupancy)
    }
}

/// A select left on its blank entry arrives as `Some("")`.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
