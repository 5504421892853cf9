use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json};
use chrono::{Datelike, Local};
use serde::Deserialize;
use serde_json::json;

use conselho::diagnostics::diagnostics_router;
use conselho::finance::{FinanceError, MonthlyStatement};
use conselho::insight::AnalysisError;
use conselho::people::{PeopleError, SkillRatings};
use conselho::personas::{Persona, PersonaError};
use conselho::projects::{Lane, ProjectTask, ProjectsError};
use conselho::store::{DocumentId, StoreError, UserId};
use conselho::strategy::{StrategyError, StrategyIdentity, SwotMatrix};

use crate::infra::{AppState, Services};

pub(crate) fn application_routes(services: Arc<Services>) -> axum::Router {
    let diagnostics = diagnostics_router(Arc::clone(&services.diagnostics));

    axum::Router::new()
        .route(
            "/api/v1/users/:user_id/strategy/identity",
            get(identity_get).put(identity_put),
        )
        .route(
            "/api/v1/users/:user_id/strategy/swot",
            get(swot_get).put(swot_put),
        )
        .route(
            "/api/v1/users/:user_id/strategy/swot/generate",
            post(swot_generate),
        )
        .route("/api/v1/users/:user_id/finance/dre/import", post(dre_import))
        .route("/api/v1/users/:user_id/finance/dre/:year", get(dre_year))
        .route(
            "/api/v1/users/:user_id/finance/dre/:year/:month",
            get(dre_month_get).put(dre_month_put),
        )
        .route(
            "/api/v1/users/:user_id/personas",
            get(personas_list).post(personas_create),
        )
        .route(
            "/api/v1/users/:user_id/personas/:document_id",
            axum::routing::put(personas_update).delete(personas_delete),
        )
        .route(
            "/api/v1/users/:user_id/people/employees",
            get(employees_list).post(employees_create),
        )
        .route(
            "/api/v1/users/:user_id/people/employees/:document_id",
            axum::routing::put(employees_update).delete(employees_delete),
        )
        .route(
            "/api/v1/users/:user_id/people/evaluations",
            get(evaluations_list).post(evaluations_create),
        )
        .route(
            "/api/v1/users/:user_id/projects/board",
            get(projects_board),
        )
        .route(
            "/api/v1/users/:user_id/projects/tasks",
            post(projects_add_task),
        )
        .route(
            "/api/v1/users/:user_id/projects/tasks/:document_id",
            axum::routing::delete(projects_delete_task),
        )
        .route(
            "/api/v1/users/:user_id/projects/tasks/:document_id/move",
            post(projects_move_task),
        )
        .route("/api/v1/users/:user_id/overview", get(overview))
        .with_state(services)
        .merge(diagnostics)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn json_error(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn store_status(error: &StoreError) -> StatusCode {
    match error {
        StoreError::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn strategy_response(error: StrategyError) -> Response {
    let status = match &error {
        StrategyError::Store(store) => store_status(store),
        StrategyError::Analysis(AnalysisError::Disabled) => StatusCode::SERVICE_UNAVAILABLE,
        StrategyError::Analysis(_) | StrategyError::Malformed(_) => StatusCode::BAD_GATEWAY,
    };
    json_error(status, error.to_string())
}

fn finance_response(error: FinanceError) -> Response {
    let status = match &error {
        FinanceError::Import(_) => StatusCode::BAD_REQUEST,
        FinanceError::Store(store) => store_status(store),
    };
    json_error(status, error.to_string())
}

fn persona_response(error: PersonaError) -> Response {
    let PersonaError::Store(store) = &error;
    json_error(store_status(store), error.to_string())
}

fn people_response(error: PeopleError) -> Response {
    let status = match &error {
        PeopleError::UnknownEmployee(_) => StatusCode::NOT_FOUND,
        PeopleError::RatingOutOfRange { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        PeopleError::Store(store) => store_status(store),
    };
    json_error(status, error.to_string())
}

fn projects_response(error: ProjectsError) -> Response {
    let ProjectsError::Store(store) = &error;
    json_error(store_status(store), error.to_string())
}

// --- strategy ---

async fn identity_get(
    State(services): State<Arc<Services>>,
    Path(user_id): Path<String>,
) -> Response {
    match services.identity.load(&UserId::from(user_id)) {
        Ok(identity) => (StatusCode::OK, Json(identity)).into_response(),
        Err(error) => strategy_response(error),
    }
}

async fn identity_put(
    State(services): State<Arc<Services>>,
    Path(user_id): Path<String>,
    Json(identity): Json<StrategyIdentity>,
) -> Response {
    match services.identity.save(&UserId::from(user_id), &identity) {
        Ok(()) => (StatusCode::OK, Json(identity)).into_response(),
        Err(error) => strategy_response(error),
    }
}

async fn swot_get(
    State(services): State<Arc<Services>>,
    Path(user_id): Path<String>,
) -> Response {
    match services.swot.load(&UserId::from(user_id)) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => strategy_response(error),
    }
}

async fn swot_put(
    State(services): State<Arc<Services>>,
    Path(user_id): Path<String>,
    Json(matrix): Json<SwotMatrix>,
) -> Response {
    match services.swot.save(&UserId::from(user_id), &matrix) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => strategy_response(error),
    }
}

async fn swot_generate(
    State(services): State<Arc<Services>>,
    Path(user_id): Path<String>,
) -> Response {
    let swot = Arc::clone(&services.swot);
    let user = UserId::from(user_id);
    let result = tokio::task::spawn_blocking(move || swot.generate(&user)).await;
    match result {
        Ok(Ok(report)) => (StatusCode::OK, Json(report)).into_response(),
        Ok(Err(error)) => strategy_response(error),
        Err(_) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "background task failed".to_string(),
        ),
    }
}

// --- finance ---

async fn dre_year(
    State(services): State<Arc<Services>>,
    Path((user_id, year)): Path<(String, i32)>,
) -> Response {
    match services.finance.annual_plan(&UserId::from(user_id), year) {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(error) => finance_response(error),
    }
}

async fn dre_month_get(
    State(services): State<Arc<Services>>,
    Path((user_id, year, month)): Path<(String, i32, u32)>,
) -> Response {
    if month == 0 || month > 12 {
        return json_error(StatusCode::BAD_REQUEST, format!("invalid month {month}"));
    }
    match services.finance.month(&UserId::from(user_id), year, month) {
        Ok(statement) => (StatusCode::OK, Json(statement)).into_response(),
        Err(error) => finance_response(error),
    }
}

async fn dre_month_put(
    State(services): State<Arc<Services>>,
    Path((user_id, year, month)): Path<(String, i32, u32)>,
    Json(statement): Json<MonthlyStatement>,
) -> Response {
    if month == 0 || month > 12 {
        return json_error(StatusCode::BAD_REQUEST, format!("invalid month {month}"));
    }
    match services
        .finance
        .upsert_month(&UserId::from(user_id), year, month, &statement)
    {
        Ok(()) => (StatusCode::OK, Json(statement)).into_response(),
        Err(error) => finance_response(error),
    }
}

async fn dre_import(
    State(services): State<Arc<Services>>,
    Path(user_id): Path<String>,
    body: String,
) -> Response {
    match services
        .finance
        .import_csv(&UserId::from(user_id), body.as_bytes())
    {
        Ok(applied) => (StatusCode::OK, Json(json!({ "rows_applied": applied }))).into_response(),
        Err(error) => finance_response(error),
    }
}

// --- personas ---

async fn personas_list(
    State(services): State<Arc<Services>>,
    Path(user_id): Path<String>,
) -> Response {
    match services.personas.list(&UserId::from(user_id)) {
        Ok(personas) => (StatusCode::OK, Json(personas)).into_response(),
        Err(error) => persona_response(error),
    }
}

async fn personas_create(
    State(services): State<Arc<Services>>,
    Path(user_id): Path<String>,
    Json(persona): Json<Persona>,
) -> Response {
    match services.personas.create(&UserId::from(user_id), &persona) {
        Ok(saved) => (StatusCode::CREATED, Json(saved)).into_response(),
        Err(error) => persona_response(error),
    }
}

async fn personas_update(
    State(services): State<Arc<Services>>,
    Path((user_id, document_id)): Path<(String, String)>,
    Json(persona): Json<Persona>,
) -> Response {
    match services
        .personas
        .update(&UserId::from(user_id), &DocumentId(document_id), &persona)
    {
        Ok(()) => (StatusCode::OK, Json(persona)).into_response(),
        Err(error) => persona_response(error),
    }
}

async fn personas_delete(
    State(services): State<Arc<Services>>,
    Path((user_id, document_id)): Path<(String, String)>,
) -> Response {
    match services
        .personas
        .delete(&UserId::from(user_id), &DocumentId(document_id))
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => persona_response(error),
    }
}

// --- people ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EvaluationRequest {
    pub(crate) employee_id: String,
    pub(crate) skills: SkillRatings,
    #[serde(default)]
    pub(crate) feedback: String,
}

async fn employees_list(
    State(services): State<Arc<Services>>,
    Path(user_id): Path<String>,
) -> Response {
    match services.people.employees(&UserId::from(user_id)) {
        Ok(employees) => (StatusCode::OK, Json(employees)).into_response(),
        Err(error) => people_response(error),
    }
}

async fn employees_create(
    State(services): State<Arc<Services>>,
    Path(user_id): Path<String>,
    Json(employee): Json<conselho::people::Employee>,
) -> Response {
    match services.people.add_employee(&UserId::from(user_id), &employee) {
        Ok(saved) => (StatusCode::CREATED, Json(saved)).into_response(),
        Err(error) => people_response(error),
    }
}

async fn employees_update(
    State(services): State<Arc<Services>>,
    Path((user_id, document_id)): Path<(String, String)>,
    Json(employee): Json<conselho::people::Employee>,
) -> Response {
    match services.people.update_employee(
        &UserId::from(user_id),
        &DocumentId(document_id),
        &employee,
    ) {
        Ok(()) => (StatusCode::OK, Json(employee)).into_response(),
        Err(error) => people_response(error),
    }
}

async fn employees_delete(
    State(services): State<Arc<Services>>,
    Path((user_id, document_id)): Path<(String, String)>,
) -> Response {
    match services
        .people
        .remove_employee(&UserId::from(user_id), &DocumentId(document_id))
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => people_response(error),
    }
}

async fn evaluations_list(
    State(services): State<Arc<Services>>,
    Path(user_id): Path<String>,
) -> Response {
    match services.people.evaluations(&UserId::from(user_id)) {
        Ok(evaluations) => (StatusCode::OK, Json(evaluations)).into_response(),
        Err(error) => people_response(error),
    }
}

async fn evaluations_create(
    State(services): State<Arc<Services>>,
    Path(user_id): Path<String>,
    Json(request): Json<EvaluationRequest>,
) -> Response {
    match services.people.record_evaluation(
        &UserId::from(user_id),
        &DocumentId(request.employee_id),
        request.skills,
        request.feedback,
    ) {
        Ok(saved) => (StatusCode::CREATED, Json(saved)).into_response(),
        Err(error) => people_response(error),
    }
}

// --- projects ---

#[derive(Debug, Deserialize)]
pub(crate) struct MoveTaskRequest {
    pub(crate) lane: Lane,
}

async fn projects_board(
    State(services): State<Arc<Services>>,
    Path(user_id): Path<String>,
) -> Response {
    match services.projects.board(&UserId::from(user_id)) {
        Ok(board) => (StatusCode::OK, Json(board)).into_response(),
        Err(error) => projects_response(error),
    }
}

async fn projects_add_task(
    State(services): State<Arc<Services>>,
    Path(user_id): Path<String>,
    Json(task): Json<ProjectTask>,
) -> Response {
    match services.projects.add_task(&UserId::from(user_id), &task) {
        Ok(saved) => (StatusCode::CREATED, Json(saved)).into_response(),
        Err(error) => projects_response(error),
    }
}

async fn projects_move_task(
    State(services): State<Arc<Services>>,
    Path((user_id, document_id)): Path<(String, String)>,
    Json(request): Json<MoveTaskRequest>,
) -> Response {
    match services.projects.move_task(
        &UserId::from(user_id),
        &DocumentId(document_id),
        request.lane,
    ) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => projects_response(error),
    }
}

async fn projects_delete_task(
    State(services): State<Arc<Services>>,
    Path((user_id, document_id)): Path<(String, String)>,
) -> Response {
    match services
        .projects
        .remove_task(&UserId::from(user_id), &DocumentId(document_id))
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => projects_response(error),
    }
}

// --- dashboard ---

async fn overview(
    State(services): State<Arc<Services>>,
    Path(user_id): Path<String>,
) -> Response {
    let today = Local::now().date_naive();
    match services
        .dashboard
        .overview(&UserId::from(user_id), today.year(), today.month())
    {
        Ok(overview) => (StatusCode::OK, Json(overview)).into_response(),
        Err(error) => json_error(StatusCode::INTERNAL_SERVER_ERROR, error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::ModelClient;
    use axum::body::Body;
    use axum::http::Request;
    use conselho::insight::DisabledClient;
    use conselho::store::InMemoryUserStore;
    use tower::util::ServiceExt;

    fn test_router() -> axum::Router {
        let store = Arc::new(InMemoryUserStore::default());
        let client = Arc::new(ModelClient::Disabled(DisabledClient));
        application_routes(Arc::new(Services::new(store, client)))
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn strategic_assessment_round_trip() {
        let router = test_router();

        let save = Request::builder()
            .method("POST")
            .uri("/api/v1/users/owner-1/diagnostics/strategic")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "answers": { "A": true, "C": true } }).to_string(),
            ))
            .unwrap();
        let response = router.clone().oneshot(save).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let list = Request::builder()
            .uri("/api/v1/users/owner-1/diagnostics/strategic")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(list).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.as_array().map(|items| items.len()), Some(1));
        assert_eq!(body[0]["scores"]["operational"], 1);
        assert_eq!(body[0]["ai_analysis"], "Analysis unavailable.");
    }

    #[tokio::test]
    async fn incomplete_behavioral_submission_is_unprocessable() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/users/owner-1/diagnostics/behavioral")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "answers": { "1": 1 } }).to_string()))
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn swot_generation_without_a_key_is_unavailable() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/users/owner-1/strategy/swot/generate")
            .body(Body::empty())
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn plan_import_rejects_unknown_lines() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/users/owner-1/finance/dre/import")
            .header(header::CONTENT_TYPE, "text/csv")
            .body(Body::from(
                "month,line,planned,real\n2026-01,netProfit,1,1\n",
            ))
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn overview_serves_placeholders_for_a_fresh_account() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/users/owner-1/overview")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["company_phase"], "Start your diagnostics");
        assert_eq!(body["team_health"], 0.0);
    }
}
