//! System endpoints: health check and category catalog.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Service category info.
#[derive(Debug, Serialize, ToSchema)]
struct CategoryInfo {
    value: &'static str,
    label: &'static str,
}

/// `GET /config/categories` — List known service categories.
#[utoipa::path(
    get,
    path = "/config/categories",
    tag = "System",
    summary = "List service categories",
    description = "Returns the fixed set of catalog categories used by service forms and filters.",
    responses(
        (status = 200, description = "Category catalog", body = Vec<CategoryInfo>),
    )
)]
pub async fn categories_handler() -> impl IntoResponse {
    let categories = vec![
        CategoryInfo {
            value: "decoration",
            label: "Decoration",
        },
        CategoryInfo {
            value: "catering",
            label: "Catering",
        },
        CategoryInfo {
            value: "photography",
            label: "Photography",
        },
        CategoryInfo {
            value: "entertainment",
            label: "Entertainment",
        },
        CategoryInfo {
            value: "coordination",
            label: "Coordination",
        },
        CategoryInfo {
            value: "pastry",
            label: "Pastry",
        },
        CategoryInfo {
            value: "other",
            label: "Other",
        },
    ];
    (StatusCode::OK, Json(categories))
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/categories", get(categories_handler))
}
