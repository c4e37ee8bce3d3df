//! Ordered sequences for pagination tests

use bookshelf_dataloader::Node;

/// A sequence element with an id and a label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub label: String,
}

impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.to_uppercase(),
            id,
        }
    }
}

impl Node for Item {
    fn id(&self) -> &str {
        &self.id
    }
}

/// `count` items with ids `{prefix}-1` through `{prefix}-{count}`, in order
pub fn numbered_items(prefix: &str, count: usize) -> Vec<Item> {
    (1..=count).map(|i| Item::new(format!("{prefix}-{i}"))).collect()
}
