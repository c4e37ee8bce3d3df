//! Author queries for Bookshelf GraphQL API

use async_graphql::{Context, Object, Result, ID};
use bookshelf_dataloader::Scope;

use crate::catalog::Catalog;
use crate::error::graphql_error;
use crate::graphql::loaders::RequestLoaders;
use crate::graphql::pagination::{paginate_connection, PaginationInput};
use crate::graphql::types::{Author, AuthorConnection};

/// Author queries
#[derive(Default)]
pub struct AuthorQuery;

#[Object]
impl AuthorQuery {
    /// Get all authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let catalog = ctx.data::<Catalog>()?;
        Ok(catalog.authors().iter().cloned().map(Author::from).collect())
    }

    /// Get paginated authors with cursor-based pagination
    async fn authors_paginated(
        &self,
        ctx: &Context<'_>,
        pagination: Option<PaginationInput>,
    ) -> Result<Option<AuthorConnection>> {
        let catalog = ctx.data::<Catalog>()?;
        paginate_connection(ctx, catalog.authors(), pagination, &Scope::root()).map(Some)
    }

    /// Get a single author by ID
    async fn author(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Author>> {
        let loaders = ctx.data::<RequestLoaders>()?;
        let author = loaders.author.load_one(id.as_str()).await.map_err(graphql_error)?;
        Ok(author.map(Author::from))
    }
}
