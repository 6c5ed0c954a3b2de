//! Form controller.
//!
//! Ties the row reconciler and the link builder to the input events of the
//! form: a station edit reconciles the rows and then regenerates the link,
//! an option change only regenerates the link. Every event replaces the
//! previous outcome wholesale.

use serde::Serialize;
use tracing::debug;

use crate::domain::{FormOptions, LinkError, RowId, RowIdsExhausted};
use crate::link::{LinkBuilder, LinkConfig, LinkOutput};
use crate::rows::{Reconciliation, RowConfig, RowReconciler, RowSet};

/// What the form shows below the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FormOutcome {
    /// A link is ready to be copied
    Ready(LinkOutput),
    /// No link; show the message instead
    Error { message: String },
}

impl FormOutcome {
    /// Outcome of one link generation.
    pub fn from_result(result: Result<LinkOutput, LinkError>) -> Self {
        match result {
            Ok(link) => Self::Ready(link),
            Err(e) => Self::Error {
                message: e.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The encoded link, if ready.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Ready(link) => Some(&link.url),
            Self::Error { .. } => None,
        }
    }
}

/// Result of a station edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormUpdate {
    pub reconciliation: Reconciliation,
    pub outcome: FormOutcome,
}

/// Reconcile rows and generate the link in one step.
///
/// This is the stateless form of [`FormSession::handle_station_input`], for
/// callers that hold the row snapshot themselves.
pub fn process_input(
    reconciler: &RowReconciler,
    builder: &LinkBuilder,
    rows: &RowSet,
    focused: Option<RowId>,
    options: &FormOptions,
) -> Result<FormUpdate, RowIdsExhausted> {
    let reconciliation = reconciler.reconcile(rows, focused)?;
    let outcome = FormOutcome::from_result(builder.build(reconciliation.rows.values(), options));
    Ok(FormUpdate {
        reconciliation,
        outcome,
    })
}

/// The state of one form: its rows, its options and the current outcome.
#[derive(Debug, Clone)]
pub struct FormSession {
    reconciler: RowReconciler,
    builder: LinkBuilder,
    rows: RowSet,
    options: FormOptions,
    outcome: FormOutcome,
}

impl FormSession {
    /// A fresh form: the minimum number of blank rows and default options.
    pub fn new(row_config: RowConfig, link_config: LinkConfig) -> Self {
        let reconciler = RowReconciler::new(row_config);
        let builder = LinkBuilder::new(link_config);
        let rows = RowSet::with_blank_rows(reconciler.config().min_rows);
        let options = FormOptions::default();
        let outcome = FormOutcome::from_result(builder.build(rows.values(), &options));
        Self {
            reconciler,
            builder,
            rows,
            options,
            outcome,
        }
    }

    pub fn rows(&self) -> &RowSet {
        &self.rows
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    pub fn outcome(&self) -> &FormOutcome {
        &self.outcome
    }

    /// A station field changed.
    ///
    /// Writes `value` into the row (an unknown id only triggers the
    /// reconciliation), reconciles with `focused` as the focused row and
    /// regenerates the link. On error the session is left as it was before
    /// the reconciliation, with the new value written.
    pub fn handle_station_input(
        &mut self,
        row: RowId,
        value: impl Into<String>,
        focused: Option<RowId>,
    ) -> Result<FormUpdate, RowIdsExhausted> {
        if !self.rows.set_value(row, value) {
            debug!(%row, "input for unknown station row");
        }
        let update = process_input(
            &self.reconciler,
            &self.builder,
            &self.rows,
            focused,
            &self.options,
        )?;
        self.rows = update.reconciliation.rows.clone();
        self.outcome = update.outcome.clone();
        Ok(update)
    }

    /// Any option field changed.
    pub fn handle_option_change(&mut self, options: FormOptions) -> &FormOutcome {
        self.options = options;
        self.regenerate()
    }

    /// Regenerate the link from the current rows and options.
    pub fn regenerate(&mut self) -> &FormOutcome {
        self.outcome = FormOutcome::from_result(self.builder.build(self.rows.values(), &self.options));
        &self.outcome
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new(RowConfig::default(), LinkConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(session: &FormSession) -> Vec<u64> {
        session.rows().rows().iter().map(|r| r.id.0).collect()
    }

    #[test]
    fn starts_with_two_rows_and_error() {
        let session = FormSession::default();
        assert_eq!(session.rows().len(), 2);
        assert_eq!(
            session.outcome(),
            &FormOutcome::Error {
                message: "Please enter at least one station.".into()
            }
        );
    }

    #[test]
    fn typing_grows_the_form() {
        let mut session = FormSession::default();

        let update = session.handle_station_input(RowId(0), "Zurich HB", Some(RowId(0))).unwrap();
        assert!(update.reconciliation.is_unchanged());
        assert!(update.outcome.is_ready());

        let update = session.handle_station_input(RowId(1), "B", Some(RowId(1))).unwrap();
        assert_eq!(update.reconciliation.added, [RowId(2)]);
        assert_eq!(ids(&session), [0, 1, 2]);
    }

    #[test]
    fn clearing_all_stations_shows_error_again() {
        let mut session = FormSession::default();
        session.handle_station_input(RowId(0), "Bern", Some(RowId(0))).unwrap();
        assert!(session.outcome().is_ready());

        session.handle_station_input(RowId(0), "  ", Some(RowId(0))).unwrap();
        assert!(!session.outcome().is_ready());
        assert_eq!(session.outcome().url(), None);
        assert_eq!(session.rows().len(), 2);
    }

    #[test]
    fn option_change_regenerates_without_touching_rows() {
        let mut session = FormSession::default();
        session.handle_station_input(RowId(0), "Bern", Some(RowId(0))).unwrap();
        let before = session.rows().clone();

        let outcome = session.handle_option_change(FormOptions {
            direct_connection: true,
            ..FormOptions::default()
        });
        assert!(outcome.url().is_some_and(|u| u.contains("&directConnection=true")));
        assert_eq!(session.rows(), &before);
    }

    #[test]
    fn unknown_row_still_reconciles() {
        let mut session = FormSession::default();
        let update = session.handle_station_input(RowId(99), "Ghost", None).unwrap();
        assert!(update.reconciliation.is_unchanged());
        assert!(!update.outcome.is_ready());
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let outcome = FormOutcome::Error {
            message: "Please enter at least one station.".into(),
        };
        assert_eq!(
            serde_json::to_string(&outcome).unwrap(),
            r#"{"status":"error","message":"Please enter at least one station."}"#
        );
    }
}
