//! Health check HTTP route handlers
//!
//! Provides endpoints for checking the health of the API:
//! - `GET /health` - Simple liveness check (returns 200 OK)
//! - `GET /health/ready` - Readiness check (catalog loaded)
//! - `GET /health/live` - Kubernetes-style liveness probe

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::catalog::Catalog;

/// Shared application state for health check handlers
#[derive(Clone)]
pub struct HealthState {
    pub catalog: Catalog,
}

impl HealthState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

/// Readiness probe body
#[derive(Debug, Serialize)]
struct Readiness {
    status: &'static str,
    books: usize,
    authors: usize,
    version: &'static str,
}

/// Create health check router
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(simple_health))
        .route("/live", get(liveness_probe))
        .route("/ready", get(readiness_probe))
        .with_state(state)
}

/// Simple health check - always returns OK if the server is running
async fn simple_health() -> &'static str {
    "OK"
}

/// Liveness probe for Kubernetes
///
/// Returns 200 if the server process is running and can handle requests.
async fn liveness_probe() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness probe
///
/// # Response
/// - 200 OK once the catalog holds data
/// - 503 Service Unavailable if the catalog is empty
async fn readiness_probe(State(state): State<HealthState>) -> impl IntoResponse {
    let catalog = &state.catalog;
    let ready = !catalog.is_empty();

    let body = Readiness {
        status: if ready { "ready" } else { "unavailable" },
        books: catalog.books().len(),
        authors: catalog.authors().len(),
        version: env!("CARGO_PKG_VERSION"),
    };

    let status_code = if ready {
        StatusCode::OK
    } else {
        tracing::warn!("Readiness check failed: catalog is empty");
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(body))
}
