//! REST endpoints for the consulting and questioning tools.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::warn;

use crate::error::ConsultingError;

use super::tools::{ConsultingTools, ToolAnswer};

/// Shared state for consulting routes.
#[derive(Clone)]
pub struct ConsultingRouteState {
    pub tools: Arc<ConsultingTools>,
}

#[derive(Deserialize)]
struct QueryRequest {
    query: String,
}

fn reply(result: Result<ToolAnswer, ConsultingError>) -> Response {
    match result {
        Ok(answer) => (StatusCode::OK, Json(serde_json::json!(answer))).into_response(),
        Err(ConsultingError::EmptyQuery) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({"error": "Query is empty"})),
        )
            .into_response(),
        Err(ConsultingError::Service(e)) => {
            warn!(error = %e, "Consulting tool failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({"error": e.to_string(), "kind": e.kind()})),
            )
                .into_response()
        }
    }
}

/// POST /api/consult
async fn consult(
    State(state): State<ConsultingRouteState>,
    Json(body): Json<QueryRequest>,
) -> Response {
    reply(state.tools.consult(&body.query).await)
}

/// POST /api/questions
async fn break_down(
    State(state): State<ConsultingRouteState>,
    Json(body): Json<QueryRequest>,
) -> Response {
    reply(state.tools.break_down(&body.query).await)
}

/// Build the consulting REST routes.
pub fn consulting_routes(state: ConsultingRouteState) -> Router {
    Router::new()
        .route("/api/consult", post(consult))
        .route("/api/questions", post(break_down))
        .with_state(state)
}
