//! HTTP route handlers for the Bookshelf API
//!
//! This module contains all HTTP endpoint handlers including:
//! - GraphQL execution and the Playground
//! - Health check and readiness endpoints

pub mod graphql;
pub mod health;

pub use graphql::{graphql_router, GraphQLState};
pub use health::{health_router, HealthState};

use axum::{routing::get, Router};

/// Build the application router without transport layers
///
/// `/`, `/graphql`, `/graphql/playground` (when enabled), and the nested
/// health routes. Tracing and CORS layers are added by the binary.
pub fn app_router(graphql: GraphQLState, health: HealthState, playground: bool) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/graphql", graphql_router(graphql, playground))
        .nest("/health", health_router(health))
}

async fn root() -> &'static str {
    "Welcome to Bookshelf - GraphQL books and authors"
}
