//! Per-request data access for the Bookshelf GraphQL API
//!
//! This crate provides the two pieces that keep graph-shaped queries cheap:
//!
//! - Loaders that deduplicate and batch point lookups into a single bulk call
//!   and memoize the answers for the rest of the request
//!   ([`BatchLoader`], [`EntityLoader`], [`RelationLoader`])
//! - Cursor pagination over ordered sequences that can be nested at any depth
//!   ([`Paginator`], [`Cursor`])
//!
//! Loaders are request-scoped: construct a fresh set for every request and drop
//! them with it. Nothing in this crate holds process-wide mutable state.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use bookshelf_dataloader::{paginate, EntityLoader, LoaderOptions, MemoryStore, PaginationArgs, Scope};
//! # use bookshelf_dataloader::{Entity, Node};
//! # struct Book { id: String, author_ids: Vec<String> }
//! # impl Node for Book { fn id(&self) -> &str { &self.id } }
//! # impl Entity for Book { const KIND: &'static str = "Book"; fn related_ids(&self) -> &[String] { &self.author_ids } }
//!
//! # async fn example(books: Vec<Book>) -> bookshelf_dataloader::Result<()> {
//! let store = Arc::new(MemoryStore::new(books));
//! let loader = EntityLoader::new("book", Arc::clone(&store), LoaderOptions::default());
//!
//! // Both lookups are answered by one bulk call
//! let (a, b) = tokio::join!(loader.load_one("book-1"), loader.load_one("book-2"));
//! assert!(a?.is_some() && b?.is_some());
//!
//! let page = paginate(store.all(), &PaginationArgs::forward(5), &Scope::root())?;
//! println!("next page after {:?}", page.page_info.end_cursor);
//! # Ok(())
//! # }
//! ```

mod batch;
mod cursor;
mod entity;
mod error;
mod pagination;
mod relation;

pub use batch::{BatchFn, BatchLoader, BatchResult, LoaderOptions, LoaderStats, DEFAULT_MAX_BATCH_SIZE};
pub use cursor::{decode_cursor, encode_cursor, Cursor, MAX_CURSOR_TOKEN_LEN};
pub use entity::{Entity, EntityStore, MemoryStore, Node};
pub use error::{Error, Result};
pub use pagination::{paginate, Edge, Page, PageInfo, PaginationArgs, Paginator, Scope, DEFAULT_PAGE_SIZE};
pub use relation::{EntityLoader, PointLookup, RelationLoader, RelationLookup};
