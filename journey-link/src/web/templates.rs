//! Askama templates for the web frontend.

use askama::Template;

use crate::form::FormOutcome;
use crate::link::FormVariant;
use crate::rows::RowSet;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the station form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub rows: Vec<RowView>,
    pub advanced: bool,
    pub result: LinkResultView,
    pub moments: &'static [Choice],
    pub languages: &'static [Choice],
    pub transport_modes: &'static [Choice],
    pub walk_speeds: &'static [Choice],
    pub accessibility_filters: &'static [Choice],
    pub occupancies: &'static [Choice],
    pub attributes: &'static [Choice],
}

impl IndexTemplate {
    /// The form as first shown: blank rows and the initial outcome.
    pub fn new(rows: &RowSet, variant: FormVariant, outcome: &FormOutcome) -> Self {
        Self {
            rows: rows
                .rows()
                .iter()
                .map(|r| RowView {
                    id: r.id.0,
                    value: r.value.clone(),
                })
                .collect(),
            advanced: variant == FormVariant::Advanced,
            result: LinkResultView::from_outcome(outcome),
            moments: MOMENTS,
            languages: LANGUAGES,
            transport_modes: TRANSPORT_MODES,
            walk_speeds: WALK_SPEEDS,
            accessibility_filters: ACCESSIBILITY_FILTERS,
            occupancies: OCCUPANCIES,
            attributes: ATTRIBUTES,
        }
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Link result fragment.
#[derive(Template)]
#[template(path = "link_result.html")]
pub struct LinkResultTemplate {
    pub result: LinkResultView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Station row view model.
#[derive(Debug, Clone)]
pub struct RowView {
    pub id: u64,
    pub value: String,
}

/// Outcome view model: either links or an error message.
#[derive(Debug, Clone, Default)]
pub struct LinkResultView {
    pub url: Option<String>,
    pub decoded_url: Option<String>,
    pub error: Option<String>,
}

impl LinkResultView {
    /// Create from a form outcome.
    pub fn from_outcome(outcome: &FormOutcome) -> Self {
        match outcome {
            FormOutcome::Ready(link) => Self {
                url: Some(link.url.clone()),
                decoded_url: link.decoded_url.clone(),
                error: None,
            },
            FormOutcome::Error { message } => Self {
                error: Some(message.clone()),
                ..Self::default()
            },
        }
    }
}

/// One entry of a select or checkbox group.
#[derive(Debug, Clone, Copy)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

pub const MOMENTS: &[Choice] = &[choice("departure", "Departure"), choice("arrival", "Arrival")];

pub const LANGUAGES: &[Choice] = &[
    choice("en", "English"),
    choice("de", "Deutsch"),
    choice("fr", "Français"),
    choice("it", "Italiano"),
];

pub const TRANSPORT_MODES: &[Choice] = &[
    choice("TRAIN", "Train"),
    choice("TRAM", "Tram"),
    choice("BUS", "Bus"),
    choice("SHIP", "Boat"),
    choice("CABLEWAY", "Cableway"),
];

pub const WALK_SPEEDS: &[Choice] = &[
    choice("", "Normal"),
    choice("SLOW", "Slow"),
    choice("FAST", "Fast"),
];

pub const ACCESSIBILITY_FILTERS: &[Choice] = &[
    choice("INDEPENDENT_BOARDING", "Independent boarding"),
    choice("ASSISTED_BOARDING", "Assisted boarding"),
    choice("STEP_FREE", "Step-free access"),
];

pub const OCCUPANCIES: &[Choice] = &[
    choice("", "Any occupancy"),
    choice("LOW", "Low"),
    choice("MEDIUM", "Medium"),
    choice("HIGH", "High"),
];

pub const ATTRIBUTES: &[Choice] = &[
    choice("BIKE", "Bicycle transport"),
    choice("RESTAURANT", "Restaurant"),
    choice("SLEEPER", "Sleeping car"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::LinkOutput;

    #[test]
    fn result_view_from_error() {
        let view = LinkResultView::from_outcome(&FormOutcome::Error {
            message: "Please enter at least one station.".into(),
        });
        assert_eq!(view.error.as_deref(), Some("Please enter at least one station."));
        assert!(view.url.is_none());
    }

    #[test]
    fn result_view_from_link() {
        let view = LinkResultView::from_outcome(&FormOutcome::Ready(LinkOutput {
            url: "u".into(),
            decoded_url: Some("d".into()),
        }));
        assert_eq!(view.url.as_deref(), Some("u"));
        assert_eq!(view.decoded_url.as_deref(), Some("d"));
        assert!(view.error.is_none());
    }

    #[test]
    fn index_renders_rows_and_error() {
        let rows = RowSet::with_blank_rows(2);
        let outcome = FormOutcome::Error {
            message: "Please enter at least one station.".into(),
        };
        let html = IndexTemplate::new(&rows, FormVariant::Advanced, &outcome)
            .render()
            .unwrap();
        assert_eq!(html.matches("class=\"station-input").count(), 2);
        assert!(html.contains("Please enter at least one station."));
        assert!(html.contains("name=\"transportMode\""));
    }

    #[test]
    fn minimal_index_hides_advanced_options() {
        let rows = RowSet::with_blank_rows(2);
        let outcome = FormOutcome::Error {
            message: "x".into(),
        };
        let html = IndexTemplate::new(&rows, FormVariant::Minimal, &outcome)
            .render()
            .unwrap();
        assert!(!html.contains("name=\"transportMode\""));
    }

    #[test]
    fn fragment_escapes_url() {
        let html = LinkResultTemplate {
            result: LinkResultView {
                url: Some("https://www.sbb.ch/en?stops=x&moment=\"departure\"".into()),
                ..LinkResultView::default()
            },
        }
        .render()
        .unwrap();
        assert!(html.contains("&amp;moment=&quot;departure&quot;") || html.contains("&amp;moment=&#34;departure&#34;"));
    }
}
