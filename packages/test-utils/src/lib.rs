//! Shared test utilities for Bookshelf workspace
//!
//! This crate provides fixtures for exercising loaders and pagination without
//! the seed catalog or the GraphQL layer.
//!
//! # Fixtures
//!
//! - [`Item`] / [`numbered_items`] - Ordered sequences with predictable ids
//! - [`Primary`] / [`Secondary`] / [`FixtureCatalog`] - Two cross-referencing entity kinds
//! - [`RecordingBatchFn`] - Bulk-fetch function that records every call and can
//!   be told to break its contract
//!
//! # Example
//!
//! ```rust,ignore
//! use bookshelf_test_utils::{FixtureCatalog, RecordingBatchFn};
//!
//! #[tokio::test]
//! async fn test_with_fixtures() {
//!     let (primaries, secondaries) = FixtureCatalog::new()
//!         .primary("a", &["b1", "b2"])
//!         .secondary("b1", &["a"])
//!         .build();
//!
//!     let fetch = RecordingBatchFn::new([("k1", 1)]);
//!     // Hand fetch.clone() to a BatchLoader, inspect fetch.calls() afterwards
//! }
//! ```

mod catalog;
mod recording;
mod sequence;

pub use catalog::{FixtureCatalog, Primary, Secondary};
pub use recording::{Misbehavior, RecordingBatchFn};
pub use sequence::{numbered_items, Item};
