//! GraphQL type definitions
//!
//! Types wrap catalog records and resolve relationships through the
//! request's loaders.

mod author;
mod book;
mod connection;

pub use author::Author;
pub use book::Book;
pub use connection::{AuthorConnection, AuthorEdge, BookConnection, BookEdge, Connection, PageInfo};
