//! Bookshelf API library
//!
//! This module exposes the core API components for use in integration tests
//! and by the server binary.

pub mod catalog;
pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use catalog::Catalog;
pub use error::{ApiError, ApiResult};
pub use graphql::{build_schema, BookshelfSchema, RequestLoaders, SchemaBuilder};
