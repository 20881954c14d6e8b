//! State service: read-side use-cases over the entity store.

use hamock_domain::entity::Entity;
use hamock_domain::error::{MockError, NotFoundError};

use crate::ports::EntityStore;

/// Application service for listing and looking up entity states.
pub struct StateService<S> {
    store: S,
}

impl<S: EntityStore> StateService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Every entity, in seed order.
    pub fn list_states(&self) -> Vec<Entity> {
        self.store.get_all()
    }

    /// Look up an entity by its `entity_id`, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::NotFound`] when no entity with `entity_id` exists.
    pub fn get_state(&self, entity_id: &str) -> Result<Entity, MockError> {
        self.store.get(entity_id).ok_or_else(|| {
            NotFoundError {
                entity: "Entity",
                id: entity_id.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{VecStore, seed};

    fn make_service() -> StateService<VecStore> {
        StateService::new(VecStore::new(seed()))
    }

    #[test]
    fn should_list_all_entities_in_seed_order() {
        let ids: Vec<String> = make_service()
            .list_states()
            .into_iter()
            .map(|e| e.entity_id)
            .collect();
        assert_eq!(
            ids,
            ["light.living_room", "switch.kitchen", "sensor.temperature_living"]
        );
    }

    #[test]
    fn should_get_entity_by_id() {
        let entity = make_service().get_state("switch.kitchen").unwrap();
        assert_eq!(entity.entity_id, "switch.kitchen");
    }

    #[test]
    fn should_return_not_found_when_entity_missing() {
        let result = make_service().get_state("non.existent");
        match result {
            Err(MockError::NotFound(err)) => {
                assert_eq!(err.id, "non.existent");
                assert_eq!(err.to_string(), "Entity non.existent not found");
            }
            other => panic!("expected not found, got {other:?}"),
        }
    }
}
