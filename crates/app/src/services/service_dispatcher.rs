//! Service dispatcher: validates service calls and applies them to the store.

use serde_json::Value;

use hamock_domain::entity::Context;
use hamock_domain::error::MockError;
use hamock_domain::service::{ServiceAction, ServiceCall, ServiceResponse, validate_service_call};
use hamock_domain::time::now;

use crate::ports::{EntityStore, IdGenerator};

/// Application service that turns `(domain, service, payload)` into a state
/// transition on one entity.
///
/// Every accepted call gets a fresh context, even when nothing matches: an
/// unknown `(domain, service)` pair or an unknown entity is a silent no-op.
pub struct ServiceDispatcher<S, G> {
    store: S,
    ids: G,
}

impl<S, G> ServiceDispatcher<S, G>
where
    S: EntityStore,
    G: IdGenerator,
{
    /// Create a dispatcher over `store`, minting context ids with `ids`.
    pub fn new(store: S, ids: G) -> Self {
        Self { store, ids }
    }

    /// Validate a raw call, then dispatch it.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::Validation`] when the payload is not an object or
    /// lacks a non-empty string `entity_id`.
    pub fn call_service(
        &self,
        domain: &str,
        service: &str,
        payload: Option<Value>,
    ) -> Result<ServiceResponse, MockError> {
        let call = validate_service_call(domain, service, payload)?;
        Ok(self.dispatch(&call))
    }

    /// Apply an already validated call.
    pub fn dispatch(&self, call: &ServiceCall) -> ServiceResponse {
        let context = Context::new(self.ids.next_id());
        let action = ServiceAction::resolve(call);

        if action.is_handled() {
            let applied = self.store.apply_mutation(call.entity_id(), |entity| {
                action.apply(entity, now(), &context);
            });
            if applied {
                tracing::debug!(
                    domain = call.domain(),
                    service = call.service(),
                    entity_id = call.entity_id(),
                    context_id = %context.id,
                    "service call applied"
                );
            } else {
                tracing::debug!(
                    domain = call.domain(),
                    service = call.service(),
                    entity_id = call.entity_id(),
                    "service call targets unknown entity, ignoring"
                );
            }
        } else {
            tracing::debug!(
                domain = call.domain(),
                service = call.service(),
                entity_id = call.entity_id(),
                "unhandled service, ignoring"
            );
        }

        ServiceResponse { context }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::SequentialIdGenerator;
    use crate::services::testing::{VecStore, seed};
    use hamock_domain::entity::EntityState;
    use hamock_domain::error::ValidationError;
    use serde_json::json;
    use std::sync::Arc;

    fn make_dispatcher() -> (
        ServiceDispatcher<Arc<VecStore>, SequentialIdGenerator>,
        Arc<VecStore>,
    ) {
        let store = Arc::new(VecStore::new(seed()));
        let dispatcher = ServiceDispatcher::new(Arc::clone(&store), SequentialIdGenerator::default());
        (dispatcher, store)
    }

    #[test]
    fn should_turn_light_on() {
        let (dispatcher, store) = make_dispatcher();
        dispatcher
            .call_service("light", "turn_on", Some(json!({"entity_id": "light.living_room"})))
            .unwrap();

        let entity = store.get("light.living_room").unwrap();
        assert_eq!(entity.state, EntityState::On);
        assert_eq!(entity.get_attribute("brightness"), Some(&json!(255)));
    }

    #[test]
    fn should_return_fresh_context_and_stamp_it_on_entity() {
        let (dispatcher, store) = make_dispatcher();
        let response = dispatcher
            .call_service("switch", "turn_on", Some(json!({"entity_id": "switch.kitchen"})))
            .unwrap();

        assert_eq!(response.context.id.as_str(), "test-uuid-0");
        assert!(response.context.user_id.is_none());
        assert!(response.context.parent_id.is_none());
        assert_eq!(store.get("switch.kitchen").unwrap().context, response.context);
    }

    #[test]
    fn should_toggle_switch_symmetrically() {
        let (dispatcher, store) = make_dispatcher();
        let payload = json!({"entity_id": "switch.kitchen"});

        dispatcher
            .call_service("switch", "turn_on", Some(payload.clone()))
            .unwrap();
        assert_eq!(store.get("switch.kitchen").unwrap().state, EntityState::On);

        dispatcher
            .call_service("switch", "turn_off", Some(payload))
            .unwrap();
        assert_eq!(store.get("switch.kitchen").unwrap().state, EntityState::Off);
    }

    #[test]
    fn should_advance_last_updated_when_turned_on_twice() {
        let (dispatcher, store) = make_dispatcher();
        let payload = json!({"entity_id": "light.living_room"});

        dispatcher
            .call_service("light", "turn_on", Some(payload.clone()))
            .unwrap();
        let first = store.get("light.living_room").unwrap();
        dispatcher
            .call_service("light", "turn_on", Some(payload))
            .unwrap();
        let second = store.get("light.living_room").unwrap();

        assert_eq!(first.state, EntityState::On);
        assert_eq!(second.state, EntityState::On);
        assert!(second.last_updated >= first.last_updated);
        assert!(second.last_changed >= first.last_changed);
        assert_ne!(first.context.id, second.context.id);
    }

    #[test]
    fn should_accept_unknown_entity_without_mutating_store() {
        let (dispatcher, store) = make_dispatcher();
        let before = store.get_all();

        let response = dispatcher
            .call_service("light", "turn_on", Some(json!({"entity_id": "light.attic"})))
            .unwrap();

        assert_eq!(response.context.id.as_str(), "test-uuid-0");
        assert_eq!(store.get_all(), before);
    }

    #[test]
    fn should_accept_unhandled_service_without_mutating_store() {
        let (dispatcher, store) = make_dispatcher();
        let before = store.get_all();

        let result = dispatcher.call_service(
            "light",
            "toggle",
            Some(json!({"entity_id": "light.living_room"})),
        );

        assert!(result.is_ok());
        assert_eq!(store.get_all(), before);
    }

    #[test]
    fn should_reject_missing_entity_id_without_consuming_an_id() {
        let (dispatcher, _store) = make_dispatcher();
        let result = dispatcher.call_service("light", "turn_on", Some(json!({})));
        assert!(matches!(
            result,
            Err(MockError::Validation(ValidationError::MissingEntityId))
        ));

        let response = dispatcher
            .call_service("light", "turn_off", Some(json!({"entity_id": "light.living_room"})))
            .unwrap();
        assert_eq!(response.context.id.as_str(), "test-uuid-0");
    }
}
