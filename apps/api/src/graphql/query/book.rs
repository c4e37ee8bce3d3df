//! Book queries for Bookshelf GraphQL API

use async_graphql::{Context, Object, Result, ID};
use bookshelf_dataloader::Scope;

use crate::catalog::Catalog;
use crate::error::graphql_error;
use crate::graphql::loaders::RequestLoaders;
use crate::graphql::pagination::{paginate_connection, PaginationInput};
use crate::graphql::types::{Book, BookConnection};

/// Book queries
#[derive(Default)]
pub struct BookQuery;

#[Object]
impl BookQuery {
    /// Get all books
    ///
    /// Every returned book is primed into the request's book loader so later
    /// lookups by id skip the store.
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let catalog = ctx.data::<Catalog>()?;
        if let Some(loaders) = ctx.data_opt::<RequestLoaders>() {
            for book in catalog.books() {
                loaders.book.prime(book.clone());
            }
        }
        Ok(catalog.books().iter().cloned().map(Book::from).collect())
    }

    /// Get paginated books with cursor-based pagination
    async fn books_paginated(
        &self,
        ctx: &Context<'_>,
        pagination: Option<PaginationInput>,
    ) -> Result<Option<BookConnection>> {
        let catalog = ctx.data::<Catalog>()?;
        paginate_connection(ctx, catalog.books(), pagination, &Scope::root()).map(Some)
    }

    /// Get a single book by ID
    async fn book(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Book>> {
        let loaders = ctx.data::<RequestLoaders>()?;
        let book = loaders.book.load_one(id.as_str()).await.map_err(graphql_error)?;
        Ok(book.map(Book::from))
    }
}
