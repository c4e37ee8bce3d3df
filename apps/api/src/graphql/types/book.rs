//! Book GraphQL type
//!
//! This module defines the GraphQL type for books with relationship resolvers.

use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};
use bookshelf_dataloader::{Entity, Scope};

use crate::error::graphql_error;
use crate::graphql::loaders::RequestLoaders;
use crate::graphql::pagination::{paginate_connection, PaginationInput};
use crate::models::Book as BookRecord;

use super::author::Author;
use super::connection::AuthorConnection;

/// Book information exposed via GraphQL
#[derive(Clone)]
pub struct Book {
    inner: Arc<BookRecord>,
}

impl Book {
    pub fn new(book: Arc<BookRecord>) -> Self {
        Self { inner: book }
    }
}

impl From<Arc<BookRecord>> for Book {
    fn from(book: Arc<BookRecord>) -> Self {
        Self::new(book)
    }
}

#[Object]
impl Book {
    /// Unique book identifier
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    /// Book title
    async fn title(&self) -> &str {
        &self.inner.title
    }

    /// ISBN-13
    async fn isbn(&self) -> Option<&str> {
        self.inner.isbn.as_deref()
    }

    /// Year of first publication
    async fn published_year(&self) -> Option<i32> {
        self.inner.published_year
    }

    // Relationship resolvers

    /// Authors of this book (batched across every book in the response)
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let loaders = ctx.data::<RequestLoaders>()?;
        let authors = loaders
            .authors_by_book
            .load_one(&self.inner.id)
            .await
            .map_err(graphql_error)?;

        Ok(authors.into_iter().map(Author::from).collect())
    }

    /// Authors of this book as a connection scoped to this book
    async fn authors_connection(
        &self,
        ctx: &Context<'_>,
        pagination: Option<PaginationInput>,
    ) -> Result<Option<AuthorConnection>> {
        let loaders = ctx.data::<RequestLoaders>()?;
        let authors = loaders
            .authors_by_book
            .load_one(&self.inner.id)
            .await
            .map_err(graphql_error)?;

        let scope = Scope::nested(self.inner.id.clone(), BookRecord::KIND);
        paginate_connection(ctx, &authors, pagination, &scope).map(Some)
    }
}
