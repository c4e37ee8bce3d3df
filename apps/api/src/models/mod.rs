//! Catalog records for Bookshelf
//!
//! Plain records as held by the in-memory catalog. Each side of the
//! book/author relation lists the ids of the other side, in display order.

pub mod author;
pub mod book;

pub use author::Author;
pub use book::Book;
