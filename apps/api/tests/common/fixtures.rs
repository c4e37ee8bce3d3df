//! Test fixtures for API integration tests
//!
//! Provides an app builder that wires the real router around a chosen catalog.

#![allow(dead_code)]

use axum::Router;
use bookshelf_api::routes::{app_router, GraphQLState, HealthState};
use bookshelf_api::{Catalog, SchemaBuilder};
use bookshelf_dataloader::{LoaderOptions, Paginator};

/// Builder for an in-process Bookshelf app
pub struct TestAppBuilder {
    catalog: Catalog,
    paginator: Paginator,
    loader_options: LoaderOptions,
    playground: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            catalog: Catalog::seed(),
            paginator: Paginator::default(),
            loader_options: LoaderOptions::default(),
            playground: true,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn paginator(mut self, paginator: Paginator) -> Self {
        self.paginator = paginator;
        self
    }

    pub fn loader_options(mut self, options: LoaderOptions) -> Self {
        self.loader_options = options;
        self
    }

    pub fn playground(mut self, enabled: bool) -> Self {
        self.playground = enabled;
        self
    }

    pub fn build(self) -> Router {
        let schema = SchemaBuilder::new(self.catalog.clone())
            .paginator(self.paginator)
            .build();
        let graphql = GraphQLState::new(schema, self.catalog.clone(), self.loader_options);
        app_router(graphql, HealthState::new(self.catalog), self.playground)
    }
}

/// App over the seed catalog with default settings
pub fn seed_app() -> Router {
    TestAppBuilder::new().build()
}
