//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{FormOptions, RowId, StationRow};
use crate::form::{FormOutcome, FormUpdate};
use crate::link::LinkOutput;
use crate::rows::Reconciliation;

/// Request to reconcile the station rows.
#[derive(Debug, Deserialize)]
pub struct ReconcileRequest {
    /// Current rows in display order
    pub rows: Vec<StationRow>,

    /// Row holding input focus, if any
    pub focused_row: Option<RowId>,
}

/// A station row as the page should render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowResult {
    /// Row id
    pub id: RowId,

    /// Current text
    pub value: String,

    /// Whether this row held focus during reconciliation
    pub has_focus: bool,
}

/// Response for row reconciliation.
#[derive(Debug, Serialize)]
pub struct ReconcileResponse {
    /// Rows after reconciliation, in display order
    pub rows: Vec<RowResult>,

    /// Rows the page must create
    pub added: Vec<RowId>,

    /// Rows the page must remove
    pub removed: Vec<RowId>,
}

/// Request to generate a link.
#[derive(Debug, Deserialize)]
pub struct LinkRequest {
    /// Station texts in row order
    pub stations: Vec<String>,

    /// Trip options
    #[serde(default)]
    pub options: FormOptions,
}

/// Response for link generation.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    /// Encoded link
    pub url: String,

    /// Link with literal JSON stops (advanced form only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoded_url: Option<String>,
}

/// Request for a station edit: reconcile, then generate.
#[derive(Debug, Deserialize)]
pub struct FormInputRequest {
    /// Current rows in display order, including the edited value
    pub rows: Vec<StationRow>,

    /// Row holding input focus, if any
    pub focused_row: Option<RowId>,

    /// Trip options
    #[serde(default)]
    pub options: FormOptions,
}

/// Response for a station edit.
#[derive(Debug, Serialize)]
pub struct FormInputResponse {
    /// Rows after reconciliation, in display order
    pub rows: Vec<RowResult>,

    /// Rows the page must create
    pub added: Vec<RowId>,

    /// Rows the page must remove
    pub removed: Vec<RowId>,

    /// Link or error message
    pub outcome: FormOutcome,

    /// Output section rendered from `outcome`
    pub fragment: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl ReconcileResponse {
    /// Create from a reconciliation pass.
    pub fn from_reconciliation(result: &Reconciliation, focused: Option<RowId>) -> Self {
        Self {
            rows: row_results(result, focused),
            added: result.added.clone(),
            removed: result.removed.clone(),
        }
    }
}

impl LinkResponse {
    /// Create from a generated link.
    pub fn from_link(link: LinkOutput) -> Self {
        Self {
            url: link.url,
            decoded_url: link.decoded_url,
        }
    }
}

impl FormInputResponse {
    /// Create from a form update and its rendered output section.
    pub fn from_update(update: FormUpdate, focused: Option<RowId>, fragment: String) -> Self {
        Self {
            rows: row_results(&update.reconciliation, focused),
            added: update.reconciliation.added,
            removed: update.reconciliation.removed,
            outcome: update.outcome,
            fragment,
        }
    }
}

fn row_results(result: &Reconciliation, focused: Option<RowId>) -> Vec<RowResult> {
    result
        .rows
        .rows()
        .iter()
        .map(|r| RowResult {
            id: r.id,
            value: r.value.clone(),
            has_focus: Some(r.id) == focused,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::{RowSet, reconcile};

    fn rows(values: &[&str]) -> RowSet {
        RowSet::from_rows(
            values
                .iter()
                .enumerate()
                .map(|(i, v)| StationRow::new(RowId(i as u64), *v))
                .collect(),
        )
    }

    #[test]
    fn reconcile_request_parses() {
        let json = r#"{"rows":[{"id":0,"value":"Bern"},{"id":1}],"focused_row":1}"#;
        let req: ReconcileRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.rows.len(), 2);
        assert_eq!(req.rows[1].value, "");
        assert_eq!(req.focused_row, Some(RowId(1)));
    }

    #[test]
    fn link_request_defaults_options() {
        let req: LinkRequest = serde_json::from_str(r#"{"stations":["Bern"]}"#).unwrap();
        assert_eq!(req.options, FormOptions::default());
    }

    #[test]
    fn reconcile_response_marks_focus() {
        let result = reconcile(&rows(&["A", "B"]), Some(RowId(1)), 2).unwrap();
        let response = ReconcileResponse::from_reconciliation(&result, Some(RowId(1)));

        let focus: Vec<bool> = response.rows.iter().map(|r| r.has_focus).collect();
        assert_eq!(focus, [false, true, false]);
        assert_eq!(response.added, [RowId(2)]);
        assert!(response.removed.is_empty());
    }

    #[test]
    fn link_response_omits_missing_decoded() {
        let response = LinkResponse::from_link(LinkOutput {
            url: "https://www.sbb.ch/en?stops=x".into(),
            decoded_url: None,
        });
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"url":"https://www.sbb.ch/en?stops=x"}"#
        );
    }
}
