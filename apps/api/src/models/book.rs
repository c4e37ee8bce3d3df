//! Book record

use bookshelf_dataloader::{Entity, Node};
use serde::Serialize;

/// Book record from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique book identifier
    pub id: String,

    /// Book title
    pub title: String,

    /// ISBN-13, when known
    pub isbn: Option<String>,

    /// Year of first publication, when known
    pub published_year: Option<i32>,

    /// Authors of this book, in credit order
    pub author_ids: Vec<String>,
}

impl Node for Book {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Book {
    const KIND: &'static str = "Book";

    fn related_ids(&self) -> &[String] {
        &self.author_ids
    }
}
