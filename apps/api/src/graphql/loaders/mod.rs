//! Request-scoped loaders for GraphQL
//!
//! This module bundles the loaders one request needs to resolve books and
//! authors without N+1 lookups. There are two types of loaders:
//! - Entity loaders: Return `Option<T>` for a single entity by ID
//! - Relation loaders: Return `Vec<T>` for related entities by parent ID
//!
//! A fresh [`RequestLoaders`] is built for every HTTP request, so memoized
//! answers never outlive the request that produced them.

use std::sync::Arc;

use bookshelf_dataloader::{EntityLoader, LoaderOptions, LoaderStats, MemoryStore, RelationLoader};

use crate::catalog::Catalog;
use crate::models::{Author, Book};

type BookStore = Arc<MemoryStore<Book>>;
type AuthorStore = Arc<MemoryStore<Author>>;

pub type BookLoader = EntityLoader<BookStore>;
pub type AuthorLoader = EntityLoader<AuthorStore>;
pub type AuthorsByBookLoader = RelationLoader<BookStore, AuthorStore>;
pub type BooksByAuthorLoader = RelationLoader<AuthorStore, BookStore>;

/// Container for the loaders of one request
#[derive(Clone)]
pub struct RequestLoaders {
    pub book: BookLoader,
    pub author: AuthorLoader,
    pub authors_by_book: AuthorsByBookLoader,
    pub books_by_author: BooksByAuthorLoader,
}

impl RequestLoaders {
    pub fn new(catalog: &Catalog, options: LoaderOptions) -> Self {
        Self {
            book: EntityLoader::new("book", catalog.book_store(), options),
            author: EntityLoader::new("author", catalog.author_store(), options),
            authors_by_book: RelationLoader::new(
                "authors_by_book",
                catalog.book_store(),
                catalog.author_store(),
                options,
            ),
            books_by_author: RelationLoader::new(
                "books_by_author",
                catalog.author_store(),
                catalog.book_store(),
                options,
            ),
        }
    }

    /// Bulk calls issued so far, per loader
    pub fn stats(&self) -> RequestLoaderStats {
        RequestLoaderStats {
            book: self.book.stats(),
            author: self.author.stats(),
            authors_by_book: self.authors_by_book.stats(),
            books_by_author: self.books_by_author.stats(),
        }
    }
}

/// Snapshot of [`LoaderStats`] for every loader of a request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestLoaderStats {
    pub book: LoaderStats,
    pub author: LoaderStats,
    pub authors_by_book: LoaderStats,
    pub books_by_author: LoaderStats,
}

impl RequestLoaderStats {
    /// Total bulk calls across all loaders
    pub fn batches(&self) -> u64 {
        self.book.batches
            + self.author.batches
            + self.authors_by_book.batches
            + self.books_by_author.batches
    }
}
