/// Moderation REST API endpoints
///
/// One endpoint per workflow operation, all thin delegations to the
/// moderation service. Failures come back as a uniform `OperationResult`
/// body with the status code derived from the error kind, so clients have a
/// single failure-detection idiom across every endpoint.

use crate::{
    moderation::{ModerationError, ModerationService},
    publication::{OperationResult, Publication},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{delete, get, put},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// The approval workflow service
    pub service: Arc<ModerationService>,
}

/// Request body for publication updates
#[derive(Debug, Deserialize)]
pub struct UpdatePublicationRequest {
    pub title: String,
    pub content: String,
}

/// Create moderation routes
///
/// Sets up the REST endpoints for the approval workflow. Route segments keep
/// the legacy Spanish surface the existing clients speak.
pub fn create_publication_routes() -> Router<AppState> {
    Router::new()
        .route("/api/publicaciones/pendientes", get(list_pending))
        .route("/api/publicaciones/aprobar/{id}", put(approve_publication))
        .route("/api/publicaciones/rechazar/{id}", delete(reject_publication))
        .route(
            "/api/publicaciones/{id}",
            put(update_publication).delete(delete_publication),
        )
}

impl IntoResponse for ModerationError {
    /// Map the error taxonomy onto status codes: caller mistakes are 400,
    /// missing records 404, illegal transitions 409, everything internal a
    /// generic 500. The body always carries the user-facing message; storage
    /// and transport detail is logged here and goes no further.
    fn into_response(self) -> Response {
        let status = match &self {
            e if e.is_validation() => StatusCode::BAD_REQUEST,
            ModerationError::NotFound => StatusCode::NOT_FOUND,
            ModerationError::AlreadyApproved => StatusCode::CONFLICT,
            ModerationError::Storage(e) => {
                tracing::error!("Storage failure: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ModerationError::Notification(e) => {
                tracing::error!("Notification failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(OperationResult::error(self.to_string()))).into_response()
    }
}

/// List publications awaiting moderation
///
/// GET /api/publicaciones/pendientes
/// Returns the pending publications with their authors, 404 when none exist.
async fn list_pending(State(state): State<AppState>) -> Result<Response, ModerationError> {
    let pending = state.service.list_pending().await?;

    if pending.is_empty() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(OperationResult::error(
                "No se encontraron publicaciones pendientes.",
            )),
        )
            .into_response());
    }

    Ok(Json(pending).into_response())
}

/// Approve a pending publication
///
/// PUT /api/publicaciones/aprobar/:id
/// Returns: { "success": true } — or the structured failure body.
async fn approve_publication(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OperationResult>, ModerationError> {
    state.service.approve(id).await?;
    Ok(Json(OperationResult::ok()))
}

/// Reject (permanently remove) a pending publication
///
/// DELETE /api/publicaciones/rechazar/:id
async fn reject_publication(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<bool>, ModerationError> {
    state.service.reject(id).await?;
    Ok(Json(true))
}

/// Update a publication's title and content
///
/// PUT /api/publicaciones/:id
/// Body: { "title": "...", "content": "..." }
/// Returns the updated record.
async fn update_publication(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePublicationRequest>,
) -> Result<Json<Publication>, ModerationError> {
    let updated = state
        .service
        .update(id, &payload.title, &payload.content)
        .await?;
    Ok(Json(updated))
}

/// Delete a publication
///
/// DELETE /api/publicaciones/:id
async fn delete_publication(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ModerationError> {
    state.service.delete(id).await?;
    Ok(StatusCode::OK)
}
