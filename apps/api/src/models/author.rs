//! Author record

use bookshelf_dataloader::{Entity, Node};
use serde::Serialize;

/// Author record from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Unique author identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Short biography
    pub bio: Option<String>,

    /// Books by this author, in bibliography order
    pub book_ids: Vec<String>,
}

impl Node for Author {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Author {
    const KIND: &'static str = "Author";

    fn related_ids(&self) -> &[String] {
        &self.book_ids
    }
}
