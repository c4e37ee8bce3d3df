//! GraphQL schema builder for Bookshelf
//!
//! Schema data holds only what is shared by every request: the catalog and the
//! paginator. Loaders are attached per request by the HTTP handler.

use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use bookshelf_dataloader::Paginator;

use crate::catalog::Catalog;

use super::query::Query;

/// The Bookshelf GraphQL schema type
pub type BookshelfSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Builder for constructing the GraphQL schema
pub struct SchemaBuilder {
    catalog: Catalog,
    paginator: Paginator,
}

impl SchemaBuilder {
    /// Create a new schema builder over `catalog`
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            paginator: Paginator::default(),
        }
    }

    /// Set the paginator used by every connection field
    pub fn paginator(mut self, paginator: Paginator) -> Self {
        self.paginator = paginator;
        self
    }

    pub fn build(self) -> BookshelfSchema {
        Schema::build(Query::default(), EmptyMutation, EmptySubscription)
            .data(self.catalog)
            .data(self.paginator)
            .finish()
    }
}

/// Create a new GraphQL schema with the default paginator
pub fn build_schema(catalog: Catalog) -> BookshelfSchema {
    SchemaBuilder::new(catalog).build()
}
