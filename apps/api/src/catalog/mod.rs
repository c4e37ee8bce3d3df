//! In-memory book and author catalog
//!
//! The catalog owns one ordered store per entity kind. Stores are immutable
//! after construction and shared by every request; loaders read through them.

mod seed;

use std::sync::Arc;

use bookshelf_dataloader::{EntityStore, MemoryStore};

use crate::models::{Author, Book};

/// Book and author stores
#[derive(Clone)]
pub struct Catalog {
    books: Arc<MemoryStore<Book>>,
    authors: Arc<MemoryStore<Author>>,
}

impl Catalog {
    pub fn new(books: Vec<Book>, authors: Vec<Author>) -> Self {
        Self {
            books: Arc::new(MemoryStore::new(books)),
            authors: Arc::new(MemoryStore::new(authors)),
        }
    }

    /// Catalog loaded with the seed dataset
    pub fn seed() -> Self {
        let catalog = Self::new(seed::books(), seed::authors());
        tracing::debug!(
            books = catalog.books.len(),
            authors = catalog.authors.len(),
            "Seed catalog loaded"
        );
        catalog
    }

    /// All books in catalog order
    pub fn books(&self) -> &[Arc<Book>] {
        self.books.all()
    }

    /// All authors in catalog order
    pub fn authors(&self) -> &[Arc<Author>] {
        self.authors.all()
    }

    pub fn get_book_by_id(&self, id: &str) -> Option<Arc<Book>> {
        self.books.get(id)
    }

    pub fn get_author_by_id(&self, id: &str) -> Option<Arc<Author>> {
        self.authors.get(id)
    }

    pub fn book_store(&self) -> Arc<MemoryStore<Book>> {
        Arc::clone(&self.books)
    }

    pub fn author_store(&self) -> Arc<MemoryStore<Author>> {
        Arc::clone(&self.authors)
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty() && self.authors.is_empty()
    }
}
