//! Entity store port: the in-process entity registry.

use std::sync::Arc;

use hamock_domain::entity::Entity;

/// Keyed collection of entities, seeded once and mutated in place.
///
/// The set of keys is fixed for the lifetime of the store: there is no
/// insert or delete. Implementations must make each
/// [`apply_mutation`](Self::apply_mutation) atomic with respect to readers of
/// the same entity.
///
/// Methods are synchronous on purpose: the mutation path never awaits.
pub trait EntityStore {
    /// Every entity, in seed order.
    fn get_all(&self) -> Vec<Entity>;

    /// Exact-key lookup.
    fn get(&self, entity_id: &str) -> Option<Entity>;

    /// Run `mutator` with exclusive access to the entity stored under
    /// `entity_id`.
    ///
    /// Returns `false` without calling `mutator` when the key is absent; a
    /// missing key is not an error.
    fn apply_mutation<F>(&self, entity_id: &str, mutator: F) -> bool
    where
        F: FnOnce(&mut Entity);

    /// Number of entities held.
    fn len(&self) -> usize;

    /// Whether the store holds no entity at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: EntityStore> EntityStore for Arc<T> {
    fn get_all(&self) -> Vec<Entity> {
        (**self).get_all()
    }

    fn get(&self, entity_id: &str) -> Option<Entity> {
        (**self).get(entity_id)
    }

    fn apply_mutation<F>(&self, entity_id: &str, mutator: F) -> bool
    where
        F: FnOnce(&mut Entity),
    {
        (**self).apply_mutation(entity_id, mutator)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
