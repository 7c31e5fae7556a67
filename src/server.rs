//! HTTP surface. Merges the wizard, consulting and portal routers.

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use crate::consulting::{ConsultingRouteState, ConsultingTools, consulting_routes};
use crate::llm::LlmProvider;
use crate::portal::portal_routes;
use crate::wizard::{SessionStore, WizardRouteState, wizard_routes};

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "spm-consult"
    }))
}

/// Build the full application router.
pub fn app_router(llm: Arc<dyn LlmProvider>, sessions: Arc<SessionStore>) -> Router {
    let wizard = wizard_routes(WizardRouteState {
        sessions,
        llm: Arc::clone(&llm),
    });
    let consulting = consulting_routes(ConsultingRouteState {
        tools: Arc::new(ConsultingTools::new(llm)),
    });

    Router::new()
        .route("/health", get(health))
        .merge(wizard)
        .merge(consulting)
        .merge(portal_routes())
        .layer(CorsLayer::permissive())
}
