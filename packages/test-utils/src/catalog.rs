//! Cross-referencing fixture entities
//!
//! [`Primary`] and [`Secondary`] mirror a two-kind catalog (books and authors)
//! without any scalar payload, so relation tests can build exactly the
//! references, duplicates, and dangling ids they need.

use std::sync::Arc;

use bookshelf_dataloader::{Entity, MemoryStore, Node};

/// Fixture entity of the primary kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Primary {
    pub id: String,
    pub related: Vec<String>,
}

/// Fixture entity of the secondary kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secondary {
    pub id: String,
    pub related: Vec<String>,
}

impl Node for Primary {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Primary {
    const KIND: &'static str = "Primary";

    fn related_ids(&self) -> &[String] {
        &self.related
    }
}

impl Node for Secondary {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Secondary {
    const KIND: &'static str = "Secondary";

    fn related_ids(&self) -> &[String] {
        &self.related
    }
}

fn owned(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

/// Builder for a pair of stores referencing each other
#[derive(Debug, Default)]
pub struct FixtureCatalog {
    primaries: Vec<Primary>,
    secondaries: Vec<Secondary>,
}

impl FixtureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primary entity referencing `related` secondaries
    pub fn primary(mut self, id: &str, related: &[&str]) -> Self {
        self.primaries.push(Primary {
            id: id.to_string(),
            related: owned(related),
        });
        self
    }

    /// Add a secondary entity referencing `related` primaries
    pub fn secondary(mut self, id: &str, related: &[&str]) -> Self {
        self.secondaries.push(Secondary {
            id: id.to_string(),
            related: owned(related),
        });
        self
    }

    /// Drop a secondary entity, leaving any references to it dangling
    pub fn without_secondary(mut self, id: &str) -> Self {
        self.secondaries.retain(|s| s.id != id);
        self
    }

    pub fn build(self) -> (Arc<MemoryStore<Primary>>, Arc<MemoryStore<Secondary>>) {
        (
            Arc::new(MemoryStore::new(self.primaries)),
            Arc::new(MemoryStore::new(self.secondaries)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_dataloader::EntityStore;

    #[test]
    fn test_build_catalog() {
        let (primaries, secondaries) = FixtureCatalog::new()
            .primary("a", &["b1", "b2"])
            .secondary("b1", &["a"])
            .secondary("b2", &["a"])
            .build();

        assert_eq!(primaries.len(), 1);
        assert_eq!(secondaries.len(), 2);
        assert_eq!(primaries.get("a").unwrap().related_ids(), ["b1", "b2"]);
    }

    #[test]
    fn test_without_secondary() {
        let (_, secondaries) = FixtureCatalog::new()
            .secondary("b1", &[])
            .secondary("b2", &[])
            .without_secondary("b2")
            .build();

        assert!(secondaries.get("b2").is_none());
        assert!(secondaries.get("b1").is_some());
    }
}
