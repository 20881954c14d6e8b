//! `Vec`-backed implementation of [`EntityStore`].

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use hamock_app::ports::EntityStore;
use hamock_domain::entity::Entity;
use hamock_domain::error::{MockError, ValidationError};

/// Entity registry kept in memory.
///
/// Entities live in a `Vec` in seed order. The key index is computed once
/// in [`seeded`](Self::seeded) and never changes afterwards, since the store
/// has no insert or delete. One `RwLock` guards all entities: mutations are
/// cheap and the entity count is small.
#[derive(Debug)]
pub struct InMemoryEntityStore {
    index: HashMap<String, usize>,
    entities: RwLock<Vec<Entity>>,
}

impl InMemoryEntityStore {
    /// Build a store from seed data, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::Validation`] if a seed entity breaks an entity
    /// invariant or if two entities share an `entity_id`.
    pub fn seeded(entities: Vec<Entity>) -> Result<Self, MockError> {
        let mut index = HashMap::with_capacity(entities.len());
        for (position, entity) in entities.iter().enumerate() {
            entity.validate()?;
            if index.insert(entity.entity_id.clone(), position).is_some() {
                return Err(ValidationError::DuplicateEntityId(entity.entity_id.clone()).into());
            }
        }
        tracing::debug!(count = entities.len(), "entity store seeded");
        Ok(Self {
            index,
            entities: RwLock::new(entities),
        })
    }
}

impl EntityStore for InMemoryEntityStore {
    fn get_all(&self) -> Vec<Entity> {
        self.entities
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn get(&self, entity_id: &str) -> Option<Entity> {
        let position = *self.index.get(entity_id)?;
        self.entities
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(position)
            .cloned()
    }

    fn apply_mutation<F>(&self, entity_id: &str, mutator: F) -> bool
    where
        F: FnOnce(&mut Entity),
    {
        let Some(&position) = self.index.get(entity_id) else {
            return false;
        };
        let mut entities = self
            .entities
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        match entities.get_mut(position) {
            Some(entity) => {
                mutator(entity);
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamock_domain::entity::EntityState;
    use serde_json::json;
    use std::sync::Arc;

    fn entity(entity_id: &str, name: &str) -> Entity {
        Entity::builder()
            .entity_id(entity_id)
            .friendly_name(name)
            .state("off")
            .build()
            .unwrap()
    }

    fn make_store() -> InMemoryEntityStore {
        InMemoryEntityStore::seeded(vec![
            entity("switch.kitchen", "Kitchen Switch"),
            entity("light.living_room", "Living Room"),
            entity("light.bedroom", "Bedroom"),
        ])
        .unwrap()
    }

    #[test]
    fn should_list_entities_in_seed_order() {
        let ids: Vec<String> = make_store()
            .get_all()
            .into_iter()
            .map(|e| e.entity_id)
            .collect();
        assert_eq!(ids, ["switch.kitchen", "light.living_room", "light.bedroom"]);
    }

    #[test]
    fn should_get_entity_by_exact_key() {
        let store = make_store();
        assert_eq!(
            store.get("light.bedroom").unwrap().friendly_name(),
            Some("Bedroom")
        );
        assert!(store.get("light.Bedroom").is_none());
        assert!(store.get("light").is_none());
    }

    #[test]
    fn should_apply_mutation_in_place() {
        let store = make_store();
        let applied = store.apply_mutation("light.living_room", |e| {
            e.state = EntityState::On;
            e.set_attribute("brightness", json!(200));
        });

        assert!(applied);
        let entity = store.get("light.living_room").unwrap();
        assert_eq!(entity.state, EntityState::On);
        assert_eq!(entity.get_attribute("brightness"), Some(&json!(200)));
    }

    #[test]
    fn should_not_call_mutator_for_missing_key() {
        let store = make_store();
        let before = store.get_all();
        let mut called = false;

        let applied = store.apply_mutation("light.attic", |_| called = true);

        assert!(!applied);
        assert!(!called);
        assert_eq!(store.get_all(), before);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn should_reject_duplicate_entity_ids() {
        let result = InMemoryEntityStore::seeded(vec![
            entity("light.bedroom", "Bedroom"),
            entity("light.bedroom", "Bedroom again"),
        ]);
        assert!(matches!(
            result,
            Err(MockError::Validation(ValidationError::DuplicateEntityId(id))) if id == "light.bedroom"
        ));
    }

    #[test]
    fn should_reject_invalid_seed_entity() {
        let mut bad = entity("light.bedroom", "Bedroom");
        bad.attributes.clear();
        let result = InMemoryEntityStore::seeded(vec![bad]);
        assert!(matches!(
            result,
            Err(MockError::Validation(ValidationError::MissingFriendlyName(_)))
        ));
    }

    #[test]
    fn should_report_empty_store() {
        let store = InMemoryEntityStore::seeded(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn should_serialize_concurrent_mutations() {
        let store = Arc::new(make_store());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        store.apply_mutation("light.living_room", |e| {
                            let n = e
                                .get_attribute("counter")
                                .and_then(serde_json::Value::as_u64)
                                .unwrap_or(0);
                            e.set_attribute("counter", json!(n + 1));
                            e.set_attribute("last_writer", json!(i));
                        });
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let entity = store.get("light.living_room").unwrap();
        assert_eq!(entity.get_attribute("counter"), Some(&json!(800)));
    }
}
