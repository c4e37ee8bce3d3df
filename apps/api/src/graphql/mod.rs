//! GraphQL schema and resolvers for Bookshelf
//!
//! This module contains the async-graphql schema including:
//! - Query resolvers for books and authors, plain and paginated
//! - Type definitions for books, authors, and their connections
//! - Request-scoped loaders that batch relation lookups

pub mod loaders;
pub mod pagination;
pub mod query;
pub mod schema;
pub mod types;

pub use loaders::RequestLoaders;
pub use schema::{build_schema, BookshelfSchema, SchemaBuilder};
