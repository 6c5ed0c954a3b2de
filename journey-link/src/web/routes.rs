//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::services::ServeDir;

use crate::domain::{LinkError, RowIdsExhausted};
use crate::form::{FormOutcome, process_input};
use crate::rows::RowSet;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/rows/reconcile", post(reconcile_rows))
        .route("/api/link", post(generate_link))
        .route("/api/form/input", post(form_input))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the form in its initial state.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let rows = RowSet::with_blank_rows(state.reconciler.config().min_rows);
    let outcome = FormOutcome::from_result(
        state
            .builder
            .build(rows.values(), &Default::default()),
    );
    Html(
        IndexTemplate::new(&rows, state.builder.config().variant, &outcome)
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Parse a JSON body, logging it on failure.
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(body = %String::from_utf8_lossy(body), "rejected request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Reconcile the station rows.
async fn reconcile_rows(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ReconcileResponse>, AppError> {
    let req: ReconcileRequest = parse_json(&body)?;
    let rows = RowSet::from_rows(req.rows);
    let result = state.reconciler.reconcile(&rows, req.focused_row)?;

    Ok(Json(ReconcileResponse::from_reconciliation(
        &result,
        req.focused_row,
    )))
}

/// Generate the journey planner link.
async fn generate_link(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let req: LinkRequest = parse_json(&body)?;
    let result = state.builder.build(&req.stations, &req.options);

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let html = render_link_result(&FormOutcome::from_result(result))?;
        Ok(Html(html).into_response())
    } else {
        let link = result.map_err(AppError::from)?;
        Ok(Json(LinkResponse::from_link(link)).into_response())
    }
}

/// A station field changed: reconcile, then generate.
///
/// The response carries the rendered output fragment, so the page needs no
/// second request to show the link.
async fn form_input(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<FormInputResponse>, AppError> {
    let req: FormInputRequest = parse_json(&body)?;
    let rows = RowSet::from_rows(req.rows);
    let update = process_input(
        &state.reconciler,
        &state.builder,
        &rows,
        req.focused_row,
        &req.options,
    )?;
    let fragment = render_link_result(&update.outcome)?;

    Ok(Json(FormInputResponse::from_update(
        update,
        req.focused_row,
        fragment,
    )))
}

/// Render the output section for an outcome.
fn render_link_result(outcome: &FormOutcome) -> Result<String, AppError> {
    let template = LinkResultTemplate {
        result: LinkResultView::from_outcome(outcome),
    };
    template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl From<LinkError> for AppError {
    fn from(e: LinkError) -> Self {
        match e {
            LinkError::NoStations => AppError::Unprocessable {
                message: e.to_string(),
            },
        }
    }
}

impl From<RowIdsExhausted> for AppError {
    fn from(e: RowIdsExhausted) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Unprocessable { message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message.clone())
            }
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        if status.is_server_error() {
            tracing::error!(%status, "{message}");
        } else {
            tracing::warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
