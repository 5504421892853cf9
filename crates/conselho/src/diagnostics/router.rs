use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::insight::AnalysisClient;
use crate::store::{DocumentId, StoreError, UserId, UserStore};

use super::service::{DiagnosticsError, DiagnosticsService};

/// Router builder exposing the three assessment histories.
pub fn diagnostics_router<S, A>(service: Arc<DiagnosticsService<S, A>>) -> Router
where
    S: UserStore + 'static,
    A: AnalysisClient + 'static,
{
    Router::new()
        .route(
            "/api/v1/users/:user_id/diagnostics/strategic",
            get(strategic_history_handler::<S, A>).post(strategic_save_handler::<S, A>),
        )
        .route(
            "/api/v1/users/:user_id/diagnostics/strategic/:document_id",
            delete(strategic_delete_handler::<S, A>),
        )
        .route(
            "/api/v1/users/:user_id/diagnostics/phases",
            get(phase_history_handler::<S, A>).post(phase_save_handler::<S, A>),
        )
        .route(
            "/api/v1/users/:user_id/diagnostics/phases/:document_id",
            delete(phase_delete_handler::<S, A>),
        )
        .route(
            "/api/v1/users/:user_id/diagnostics/behavioral",
            get(behavioral_history_handler::<S, A>).post(behavioral_save_handler::<S, A>),
        )
        .route(
            "/api/v1/users/:user_id/diagnostics/behavioral/:document_id",
            delete(behavioral_delete_handler::<S, A>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct StrategicRequest {
    pub answers: BTreeMap<char, bool>,
}

#[derive(Debug, Deserialize)]
pub struct PhaseRequest {
    pub checked_items: BTreeSet<u8>,
}

#[derive(Debug, Deserialize)]
pub struct BehavioralRequest {
    pub answers: BTreeMap<u8, u8>,
}

fn error_response(error: DiagnosticsError) -> Response {
    let status = match &error {
        DiagnosticsError::Incomplete { .. } | DiagnosticsError::InvalidChoice { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        DiagnosticsError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
        DiagnosticsError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

fn join_error() -> Response {
    let payload = json!({ "error": "background task failed" });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}

// Saves call the analysis backend, which blocks on the network, so they run
// on the blocking pool.

pub(crate) async fn strategic_save_handler<S, A>(
    State(service): State<Arc<DiagnosticsService<S, A>>>,
    Path(user_id): Path<String>,
    axum::Json(request): axum::Json<StrategicRequest>,
) -> Response
where
    S: UserStore + 'static,
    A: AnalysisClient + 'static,
{
    let user = UserId::from(user_id);
    let result = tokio::task::spawn_blocking(move || {
        service.save_strategic(&user, request.answers)
    })
    .await;
    match result {
        Ok(Ok(saved)) => (StatusCode::CREATED, axum::Json(saved)).into_response(),
        Ok(Err(error)) => error_response(error),
        Err(_) => join_error(),
    }
}

pub(crate) async fn strategic_history_handler<S, A>(
    State(service): State<Arc<DiagnosticsService<S, A>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: UserStore + 'static,
    A: AnalysisClient + 'static,
{
    match service.strategic_history(&UserId::from(user_id)) {
        Ok(history) => (StatusCode::OK, axum::Json(history)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn strategic_delete_handler<S, A>(
    State(service): State<Arc<DiagnosticsService<S, A>>>,
    Path((user_id, document_id)): Path<(String, String)>,
) -> Response
where
    S: UserStore + 'static,
    A: AnalysisClient + 'static,
{
    match service.delete_strategic(&UserId::from(user_id), &DocumentId(document_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn phase_save_handler<S, A>(
    State(service): State<Arc<DiagnosticsService<S, A>>>,
    Path(user_id): Path<String>,
    axum::Json(request): axum::Json<PhaseRequest>,
) -> Response
where
    S: UserStore + 'static,
    A: AnalysisClient + 'static,
{
    let user = UserId::from(user_id);
    let result =
        tokio::task::spawn_blocking(move || service.save_phase(&user, request.checked_items))
            .await;
    match result {
        Ok(Ok(saved)) => (StatusCode::CREATED, axum::Json(saved)).into_response(),
        Ok(Err(error)) => error_response(error),
        Err(_) => join_error(),
    }
}

pub(crate) async fn phase_history_handler<S, A>(
    State(service): State<Arc<DiagnosticsService<S, A>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: UserStore + 'static,
    A: AnalysisClient + 'static,
{
    match service.phase_history(&UserId::from(user_id)) {
        Ok(history) => (StatusCode::OK, axum::Json(history)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn phase_delete_handler<S, A>(
    State(service): State<Arc<DiagnosticsService<S, A>>>,
    Path((user_id, document_id)): Path<(String, String)>,
) -> Response
where
    S: UserStore + 'static,
    A: AnalysisClient + 'static,
{
    match service.delete_phase(&UserId::from(user_id), &DocumentId(document_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn behavioral_save_handler<S, A>(
    State(service): State<Arc<DiagnosticsService<S, A>>>,
    Path(user_id): Path<String>,
    axum::Json(request): axum::Json<BehavioralRequest>,
) -> Response
where
    S: UserStore + 'static,
    A: AnalysisClient + 'static,
{
    let user = UserId::from(user_id);
    let result =
        tokio::task::spawn_blocking(move || service.save_behavioral(&user, request.answers))
            .await;
    match result {
        Ok(Ok(saved)) => (StatusCode::CREATED, axum::Json(saved)).into_response(),
        Ok(Err(error)) => error_response(error),
        Err(_) => join_error(),
    }
}

pub(crate) async fn behavioral_history_handler<S, A>(
    State(service): State<Arc<DiagnosticsService<S, A>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: UserStore + 'static,
    A: AnalysisClient + 'static,
{
    match service.behavioral_history(&UserId::from(user_id)) {
        Ok(history) => (StatusCode::OK, axum::Json(history)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn behavioral_delete_handler<S, A>(
    State(service): State<Arc<DiagnosticsService<S, A>>>,
    Path((user_id, document_id)): Path<(String, String)>,
) -> Response
where
    S: UserStore + 'static,
    A: AnalysisClient + 'static,
{
    match service.delete_behavioral(&UserId::from(user_id), &DocumentId(document_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}
