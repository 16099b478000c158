// HTTP request handlers

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, State},
    http::{request::Parts, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use super::examples::EXAMPLE_PROBLEMS;
use super::page::INDEX_HTML;
use super::types::{
    ClarityResponse, ExamplesResponse, HealthResponse, PendingResponse, ProblemRequest,
    SolveResponse,
};
use super::AppState;
use crate::pipeline::process_problem;

/// Header carrying the browser session id for the pending-example slot
pub const SESSION_HEADER: &str = "x-session-id";

const MAX_SESSION_ID_LEN: usize = 128;

/// Session id taken from the `x-session-id` header; 400 when absent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty() && id.len() <= MAX_SESSION_ID_LEN)
            .map(|id| SessionId(id.to_string()))
            .ok_or((StatusCode::BAD_REQUEST, "missing or invalid x-session-id header"))
    }
}

/// Build the router for the web tool
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/examples", get(list_examples))
        .route("/api/examples/pending", post(take_pending_example))
        .route("/api/examples/:index/select", post(select_example))
        .route("/api/solve", post(handle_solve))
        .route("/api/clarity", post(handle_clarity))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        provider: state.solver.provider_name().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn list_examples() -> Json<ExamplesResponse> {
    Json(ExamplesResponse {
        examples: EXAMPLE_PROBLEMS.iter().map(|s| s.to_string()).collect(),
    })
}

pub async fn select_example(
    State(state): State<Arc<AppState>>,
    SessionId(session): SessionId,
    Path(index): Path<usize>,
) -> impl IntoResponse {
    match state.pending.select(&session, index) {
        Some(problem) => {
            tracing::debug!(index, %session, "Example selected");
            (
                StatusCode::OK,
                Json(PendingResponse {
                    problem: Some(problem.to_string()),
                }),
            )
        }
        None => (StatusCode::NOT_FOUND, Json(PendingResponse { problem: None })),
    }
}

pub async fn take_pending_example(
    State(state): State<Arc<AppState>>,
    SessionId(session): SessionId,
) -> Json<PendingResponse> {
    Json(PendingResponse {
        problem: state.pending.take(&session),
    })
}

pub async fn handle_solve(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProblemRequest>,
) -> Json<SolveResponse> {
    let outcome = process_problem(&state.solver, &state.classifier, &request.problem).await;
    Json(outcome.into())
}

pub async fn handle_clarity(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProblemRequest>,
) -> Json<ClarityResponse> {
    let verdict = state.solver.validate_clarity(request.problem.trim()).await;
    Json(verdict.into())
}
