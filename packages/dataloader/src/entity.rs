//! Entity model and the store contract loaders fetch through

use std::collections::HashMap;
use std::sync::Arc;

/// Anything addressable by an opaque string id
///
/// Paginated sequences are made of nodes; the id is what cursors point at.
pub trait Node {
    fn id(&self) -> &str;
}

impl<T: Node + ?Sized> Node for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: Node + ?Sized> Node for Arc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

/// An entity holding references to entities of the opposite kind
pub trait Entity: Node + Send + Sync + 'static {
    /// Kind name, used as the parent type of nested cursor scopes
    const KIND: &'static str;

    /// Ids of related entities, in source order (duplicates allowed)
    fn related_ids(&self) -> &[String];
}

/// Point lookups by id into an immutable collection of one entity kind
pub trait EntityStore: Send + Sync + 'static {
    type Entity: Entity;

    /// Look up an entity, `None` if absent
    fn get(&self, id: &str) -> Option<Arc<Self::Entity>>;
}

impl<S: EntityStore> EntityStore for Arc<S> {
    type Entity = S::Entity;

    fn get(&self, id: &str) -> Option<Arc<Self::Entity>> {
        (**self).get(id)
    }
}

/// Ordered, immutable in-memory entity store
///
/// Entities keep their insertion order for listing and are indexed by id for
/// point lookups. Stores outlive requests and are shared behind an `Arc`.
#[derive(Debug)]
pub struct MemoryStore<E> {
    entities: Vec<Arc<E>>,
    index: HashMap<String, usize>,
}

impl<E: Entity> MemoryStore<E> {
    /// Build a store from entities in listing order
    ///
    /// If an id appears more than once only the first entity is kept.
    pub fn new(entities: impl IntoIterator<Item = E>) -> Self {
        let mut store = Self {
            entities: Vec::new(),
            index: HashMap::new(),
        };

        for entity in entities {
            if store.index.contains_key(entity.id()) {
                tracing::warn!(kind = E::KIND, id = entity.id(), "Duplicate entity id, keeping first");
                continue;
            }
            store
                .index
                .insert(entity.id().to_string(), store.entities.len());
            store.entities.push(Arc::new(entity));
        }

        store
    }

    /// All entities in listing order
    pub fn all(&self) -> &[Arc<E>] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<E: Entity> EntityStore for MemoryStore<E> {
    type Entity = E;

    fn get(&self, id: &str) -> Option<Arc<E>> {
        self.index.get(id).map(|&pos| Arc::clone(&self.entities[pos]))
    }
}
