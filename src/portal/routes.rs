//! REST endpoints for the knowledge base and the dashboard.

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use super::dashboard::{Role, WELCOME_GUIDE, dashboard};
use super::knowledge::{KnowledgeSection, all_sections};

/// GET /api/knowledge-base
async fn list_sections() -> impl IntoResponse {
    Json(all_sections())
}

/// GET /api/knowledge-base/{section}
async fn get_section(Path(name): Path<String>) -> Response {
    match KnowledgeSection::lookup(&name) {
        Some(section) => Json(section.render()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": format!("Unknown knowledge base section: {name}")})),
        )
            .into_response(),
    }
}

/// GET /api/dashboard/roles
async fn list_roles() -> impl IntoResponse {
    let roles: Vec<_> = Role::ALL
        .iter()
        .map(|r| serde_json::json!({"role": r, "label": r.to_string()}))
        .collect();
    Json(roles)
}

#[derive(Deserialize)]
struct DashboardQuery {
    #[serde(default)]
    name: String,
    custom: Option<String>,
}

/// GET /api/dashboard/roles/{role}?name=...&custom=...
async fn get_dashboard(Path(role): Path<String>, Query(query): Query<DashboardQuery>) -> Response {
    match Role::parse(&role) {
        Some(role) => Json(dashboard(&query.name, role, query.custom.as_deref())).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": format!("Unknown role: {role}")})),
        )
            .into_response(),
    }
}

/// GET /api/welcome
async fn welcome() -> impl IntoResponse {
    Json(serde_json::json!({
        "title": "Welcome to the SPM Megazord Platform!",
        "guide": WELCOME_GUIDE,
    }))
}

/// Build the portal REST routes.
pub fn portal_routes() -> Router {
    Router::new()
        .route("/api/knowledge-base", get(list_sections))
        .route("/api/knowledge-base/{section}", get(get_section))
        .route("/api/dashboard/roles", get(list_roles))
        .route("/api/dashboard/roles/{role}", get(get_dashboard))
        .route("/api/welcome", get(welcome))
}
