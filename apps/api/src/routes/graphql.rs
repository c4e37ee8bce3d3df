//! GraphQL HTTP route handlers
//!
//! - `POST /graphql` - Execute a query with a fresh set of request loaders
//! - `GET /graphql/playground` - GraphQL Playground (when enabled)

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use bookshelf_dataloader::LoaderOptions;

use crate::catalog::Catalog;
use crate::graphql::{BookshelfSchema, RequestLoaders};

/// Shared state for GraphQL handlers
#[derive(Clone)]
pub struct GraphQLState {
    pub schema: BookshelfSchema,
    pub catalog: Catalog,
    pub loader_options: LoaderOptions,
}

impl GraphQLState {
    pub fn new(schema: BookshelfSchema, catalog: Catalog, loader_options: LoaderOptions) -> Self {
        Self {
            schema,
            catalog,
            loader_options,
        }
    }
}

/// Create GraphQL router
pub fn graphql_router(state: GraphQLState, playground: bool) -> Router {
    let mut router = Router::new().route("/", post(graphql_handler));
    if playground {
        router = router.route("/playground", get(graphql_playground));
    }
    router.with_state(state)
}

/// GraphQL handler that executes queries against the schema
///
/// Loaders are built here, attached as request data, and dropped with the
/// response, so no memoized value is ever shared between requests.
async fn graphql_handler(State(state): State<GraphQLState>, req: GraphQLRequest) -> GraphQLResponse {
    let loaders = RequestLoaders::new(&state.catalog, state.loader_options);
    let request = req.into_inner().data(loaders.clone());

    let response = state.schema.execute(request).await;

    let stats = loaders.stats();
    tracing::debug!(
        batches = stats.batches(),
        book_keys = stats.book.keys,
        author_keys = stats.author.keys,
        authors_by_book_keys = stats.authors_by_book.keys,
        books_by_author_keys = stats.books_by_author.keys,
        errors = response.errors.len(),
        "GraphQL request complete"
    );

    response.into()
}

/// GraphQL Playground handler for development
async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}
