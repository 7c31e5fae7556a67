//! REST endpoints for the request wizard.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::llm::LlmProvider;

use super::machine::{ErrorNotice, RenderOutcome, WizardAction, WizardView};
use super::session::SessionStore;
use super::state::WizardState;

/// Shared state for wizard routes.
#[derive(Clone)]
pub struct WizardRouteState {
    pub sessions: Arc<SessionStore>,
    pub llm: Arc<dyn LlmProvider>,
}

/// Body returned by every interaction endpoint.
#[derive(Debug, Serialize)]
struct RenderReply {
    session_id: Uuid,
    state: WizardState,
    view: WizardView,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<ErrorNotice>,
}

impl RenderReply {
    fn new(session_id: Uuid, outcome: RenderOutcome) -> Self {
        let errors = outcome.error_notices();
        Self {
            session_id,
            state: outcome.state,
            view: outcome.view,
            errors,
        }
    }
}

fn parse_session_id(id: &str) -> Result<Uuid, Response> {
    Uuid::parse_str(id).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Invalid session ID"})),
        )
            .into_response()
    })
}

fn session_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": "Session not found"})),
    )
        .into_response()
}

async fn interact(
    state: &WizardRouteState,
    id: &str,
    action: Option<WizardAction>,
) -> Response {
    let session_id = match parse_session_id(id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state
        .sessions
        .interact(session_id, action, state.llm.as_ref())
        .await
    {
        Some(outcome) => {
            if !outcome.errors.is_empty() {
                warn!(session_id = %session_id, errors = outcome.errors.len(), "Interaction finished with service errors");
            }
            Json(RenderReply::new(session_id, outcome)).into_response()
        }
        None => session_not_found(),
    }
}

/// POST /api/wizard/sessions
///
/// Starts a session and returns its first render.
async fn create_session(State(state): State<WizardRouteState>) -> Response {
    let session_id = state.sessions.create().await;
    match state
        .sessions
        .interact(session_id, None, state.llm.as_ref())
        .await
    {
        Some(outcome) => (
            StatusCode::CREATED,
            Json(RenderReply::new(session_id, outcome)),
        )
            .into_response(),
        None => session_not_found(),
    }
}

/// GET /api/wizard/sessions/{id}
///
/// Re-renders the session without an action.
async fn get_session(
    State(state): State<WizardRouteState>,
    Path(id): Path<String>,
) -> Response {
    interact(&state, &id, None).await
}

/// POST /api/wizard/sessions/{id}/actions
async fn post_action(
    State(state): State<WizardRouteState>,
    Path(id): Path<String>,
    Json(action): Json<WizardAction>,
) -> Response {
    interact(&state, &id, Some(action)).await
}

/// DELETE /api/wizard/sessions/{id}
async fn delete_session(
    State(state): State<WizardRouteState>,
    Path(id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    if state.sessions.remove(session_id).await {
        (
            StatusCode::OK,
            Json(serde_json::json!({"status": "ended"})),
        )
            .into_response()
    } else {
        session_not_found()
    }
}

/// Build the wizard REST routes.
pub fn wizard_routes(state: WizardRouteState) -> Router {
    Router::new()
        .route("/api/wizard/sessions", post(create_session))
        .route(
            "/api/wizard/sessions/{id}",
            get(get_session).delete(delete_session),
        )
        .route("/api/wizard/sessions/{id}/actions", post(post_action))
        .with_state(state)
}
