//! Route table and request handlers.
//!
//! The JSON surface consumed by the site's pages:
//!
//! - `GET /health`
//! - `GET /projects[?tag=]`, `GET /projects/{slug}`
//! - `GET /insights[?tag=]`, `GET /insights/{slug}`
//! - `GET /tags[?category=]`
//! - `POST /contact`
//!
//! Empty catalogs render as empty lists, never as errors; only a true
//! lookup miss becomes a 404.

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use folio_catalog::filter_by_tag;
use folio_contact::{ContactOutcome, ContactSubmission};
use folio_content::{Category, Document, DocumentSummary};
use folio_core::Error;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::state::ApiState;

/// Build the API router over the given state.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/projects", get(list_projects))
        .route("/projects/{slug}", get(get_project))
        .route("/insights", get(list_insights))
        .route("/insights/{slug}", get(get_insight))
        .route("/tags", get(list_tags))
        .route("/contact", post(submit_contact))
        .with_state(state)
}

// ============================================================================
// Error mapping
// ============================================================================

/// Handler error mapped onto an HTTP status and a JSON `{ "error": ... }`.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

// ============================================================================
// Query types
// ============================================================================

#[derive(Debug, Deserialize)]
struct ListQuery {
    /// Restrict the list to summaries carrying this tag.
    tag: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TagsQuery {
    /// Restrict to one category ("projects" or "insights").
    category: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_projects(
    State(state): State<ApiState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<DocumentSummary>>, ApiError> {
    list_category(&state, Category::Project, query.tag.as_deref()).await
}

async fn list_insights(
    State(state): State<ApiState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<DocumentSummary>>, ApiError> {
    list_category(&state, Category::Insight, query.tag.as_deref()).await
}

async fn list_category(
    state: &ApiState,
    category: Category,
    tag: Option<&str>,
) -> Result<Json<Vec<DocumentSummary>>, ApiError> {
    let summaries = state.catalog.list(category).await?;
    let filtered: Vec<DocumentSummary> = filter_by_tag(&summaries, tag)
        .into_iter()
        .cloned()
        .collect();
    debug!(
        category = %category,
        total = summaries.len(),
        shown = filtered.len(),
        "list"
    );
    Ok(Json(filtered))
}

async fn get_project(
    State(state): State<ApiState>,
    Path(slug): Path<String>,
) -> Result<Json<Document>, ApiError> {
    Ok(Json(state.catalog.get_project(&slug).await?))
}

async fn get_insight(
    State(state): State<ApiState>,
    Path(slug): Path<String>,
) -> Result<Json<Document>, ApiError> {
    Ok(Json(state.catalog.get_insight(&slug).await?))
}

async fn list_tags(
    State(state): State<ApiState>,
    Query(query): Query<TagsQuery>,
) -> Result<Json<Vec<String>>, ApiError> {
    let tags = match query.category.as_deref() {
        Some(raw) => {
            let category: Category = raw.parse().map_err(ApiError::from)?;
            state.catalog.tags(category).await?
        }
        None => state.catalog.all_tags().await?,
    };
    Ok(Json(tags))
}

async fn submit_contact(
    State(state): State<ApiState>,
    Json(submission): Json<ContactSubmission>,
) -> (StatusCode, Json<ContactOutcome>) {
    let outcome = state.contact.submit(submission).await;
    let status = if outcome.success {
        StatusCode::OK
    } else if outcome.field_errors.is_some() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::BAD_GATEWAY
    };
    (status, Json(outcome))
}

// ============================================================================
// Tests
// ============================================================================
