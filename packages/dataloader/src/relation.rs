//! Entity and relation loaders over an [`EntityStore`]
//!
//! There are two kinds of loaders:
//! - [`EntityLoader`]: one entity by id, `None` when absent
//! - [`RelationLoader`]: every entity of the opposite kind referenced by an
//!   owner entity, empty when the owner is absent

use std::sync::Arc;

use crate::batch::{BatchFn, BatchLoader, BatchResult, LoaderOptions, LoaderStats};
use crate::entity::{Entity, EntityStore, Node};
use crate::error::Result;

/// Bulk point lookup against one store
pub struct PointLookup<S> {
    store: S,
}

impl<S: EntityStore> PointLookup<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: EntityStore> BatchFn<String> for PointLookup<S> {
    type Value = Arc<S::Entity>;

    async fn load(&self, keys: &[String]) -> BatchResult<String, Self::Value> {
        Ok(keys
            .iter()
            .map(|id| (id.clone(), self.store.get(id)))
            .collect())
    }
}

/// Bulk relation lookup: owners in one store, related entities in another
pub struct RelationLookup<O, T> {
    owners: O,
    targets: T,
}

impl<O: EntityStore, T: EntityStore> RelationLookup<O, T> {
    pub fn new(owners: O, targets: T) -> Self {
        Self { owners, targets }
    }

    fn related(&self, owner_id: &str) -> Vec<Arc<T::Entity>> {
        let Some(owner) = self.owners.get(owner_id) else {
            return Vec::new();
        };

        owner
            .related_ids()
            .iter()
            .filter_map(|id| {
                let target = self.targets.get(id);
                if target.is_none() {
                    tracing::trace!(
                        owner = owner_id,
                        owner_kind = <O::Entity as Entity>::KIND,
                        target = %id,
                        target_kind = <T::Entity as Entity>::KIND,
                        "Dropping dangling reference"
                    );
                }
                target
            })
            .collect()
    }
}

impl<O: EntityStore, T: EntityStore> BatchFn<String> for RelationLookup<O, T> {
    type Value = Vec<Arc<T::Entity>>;

    async fn load(&self, keys: &[String]) -> BatchResult<String, Self::Value> {
        Ok(keys
            .iter()
            .map(|id| (id.clone(), Some(self.related(id))))
            .collect())
    }
}

/// Request-scoped loader for entities by id
pub struct EntityLoader<S: EntityStore> {
    loader: BatchLoader<String, PointLookup<S>>,
}

impl<S: EntityStore> Clone for EntityLoader<S> {
    fn clone(&self) -> Self {
        Self {
            loader: self.loader.clone(),
        }
    }
}

impl<S: EntityStore> EntityLoader<S> {
    pub fn new(name: &'static str, store: S, options: LoaderOptions) -> Self {
        Self {
            loader: BatchLoader::new(name, PointLookup::new(store), options),
        }
    }

    /// Load one entity; absent ids resolve to `None`
    pub async fn load_one(&self, id: &str) -> Result<Option<Arc<S::Entity>>> {
        self.loader.load_one(id.to_string()).await
    }

    /// Load several entities in the order given
    pub async fn load_many<I>(&self, ids: I) -> Vec<Result<Option<Arc<S::Entity>>>>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.loader.load_many(ids.into_iter().map(Into::into)).await
    }

    /// Cache an entity already in hand so later loads skip the store
    pub fn prime(&self, entity: Arc<S::Entity>) {
        self.loader.prime(entity.id().to_string(), entity);
    }

    pub fn stats(&self) -> LoaderStats {
        self.loader.stats()
    }
}

/// Request-scoped loader for the related entities of an owner
pub struct RelationLoader<O: EntityStore, T: EntityStore> {
    loader: BatchLoader<String, RelationLookup<O, T>>,
}

impl<O: EntityStore, T: EntityStore> Clone for RelationLoader<O, T> {
    fn clone(&self) -> Self {
        Self {
            loader: self.loader.clone(),
        }
    }
}

impl<O: EntityStore, T: EntityStore> RelationLoader<O, T> {
    pub fn new(name: &'static str, owners: O, targets: T, options: LoaderOptions) -> Self {
        Self {
            loader: BatchLoader::new(name, RelationLookup::new(owners, targets), options),
        }
    }

    /// Load the entities related to `owner_id`, in the owner's reference order
    pub async fn load_one(&self, owner_id: &str) -> Result<Vec<Arc<T::Entity>>> {
        Ok(self
            .loader
            .load_one(owner_id.to_string())
            .await?
            .unwrap_or_default())
    }

    /// Load relations for several owners in the order given
    pub async fn load_many<I>(&self, owner_ids: I) -> Vec<Result<Vec<Arc<T::Entity>>>>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.loader
            .load_many(owner_ids.into_iter().map(Into::into))
            .await
            .into_iter()
            .map(|result| result.map(Option::unwrap_or_default))
            .collect()
    }

    pub fn stats(&self) -> LoaderStats {
        self.loader.stats()
    }
}
