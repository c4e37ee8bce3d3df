//! Author GraphQL type

use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};
use bookshelf_dataloader::{Entity, Scope};

use crate::error::graphql_error;
use crate::graphql::loaders::RequestLoaders;
use crate::graphql::pagination::{paginate_connection, PaginationInput};
use crate::models::Author as AuthorRecord;

use super::book::Book;
use super::connection::BookConnection;

/// Author information exposed via GraphQL
#[derive(Clone)]
pub struct Author {
    inner: Arc<AuthorRecord>,
}

impl Author {
    pub fn new(author: Arc<AuthorRecord>) -> Self {
        Self { inner: author }
    }
}

impl From<Arc<AuthorRecord>> for Author {
    fn from(author: Arc<AuthorRecord>) -> Self {
        Self::new(author)
    }
}

#[Object]
impl Author {
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    async fn name(&self) -> &str {
        &self.inner.name
    }

    async fn bio(&self) -> Option<&str> {
        self.inner.bio.as_deref()
    }

    /// Books by this author (batched across every author in the response)
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let loaders = ctx.data::<RequestLoaders>()?;
        let books = loaders
            .books_by_author
            .load_one(&self.inner.id)
            .await
            .map_err(graphql_error)?;

        Ok(books.into_iter().map(Book::from).collect())
    }

    /// Books by this author as a connection scoped to this author
    async fn books_connection(
        &self,
        ctx: &Context<'_>,
        pagination: Option<PaginationInput>,
    ) -> Result<Option<BookConnection>> {
        let loaders = ctx.data::<RequestLoaders>()?;
        let books = loaders
            .books_by_author
            .load_one(&self.inner.id)
            .await
            .map_err(graphql_error)?;

        let scope = Scope::nested(self.inner.id.clone(), AuthorRecord::KIND);
        paginate_connection(ctx, &books, pagination, &scope).map(Some)
    }
}
