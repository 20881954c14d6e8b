//! Shared fixtures for handler tests.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use hamock_app::id_generator::SequentialIdGenerator;
use hamock_app::ports::{EntityStore, IdGenerator};
use hamock_app::services::service_dispatcher::ServiceDispatcher;
use hamock_app::services::state_service::StateService;
use hamock_domain::entity::Entity;
use hamock_domain::system_config::SystemConfig;

use crate::home_assistant::HomeAssistantApp;
use crate::mock_app::MockApp;
use crate::state::AppState;

pub(crate) struct StubStore {
    entities: Mutex<Vec<Entity>>,
}

impl EntityStore for StubStore {
    fn get_all(&self) -> Vec<Entity> {
        self.entities.lock().unwrap().clone()
    }

    fn get(&self, entity_id: &str) -> Option<Entity> {
        self.entities
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.entity_id == entity_id)
            .cloned()
    }

    fn apply_mutation<F>(&self, entity_id: &str, mutator: F) -> bool
    where
        F: FnOnce(&mut Entity),
    {
        let mut entities = self.entities.lock().unwrap();
        match entities.iter_mut().find(|e| e.entity_id == entity_id) {
            Some(entity) => {
                mutator(entity);
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.entities.lock().unwrap().len()
    }
}

pub(crate) type TestState = AppState<Arc<StubStore>, SequentialIdGenerator>;

pub(crate) fn test_state() -> TestState {
    test_state_with(SequentialIdGenerator::default())
}

/// Same two-entity store, minting context ids with `ids`.
pub(crate) fn test_state_with<G>(ids: G) -> AppState<Arc<StubStore>, G>
where
    G: IdGenerator + Send + Sync + 'static,
{
    let ts = "2024-01-15T10:00:00Z".parse().unwrap();
    let entities = vec![
        Entity::builder()
            .entity_id("light.living_room")
            .friendly_name("Living Room")
            .state("off")
            .attribute("brightness", 255)
            .timestamp(ts)
            .context_id("01J4A2B3C4D5E6F7G8H9I0J1")
            .build()
            .unwrap(),
        Entity::builder()
            .entity_id("switch.kitchen")
            .friendly_name("Kitchen Switch")
            .state("off")
            .timestamp(ts)
            .context_id("01J4A2B3C4D5E6F7G8H9I0J3")
            .build()
            .unwrap(),
    ];
    let store = Arc::new(StubStore {
        entities: Mutex::new(entities),
    });

    AppState::new(
        StateService::new(Arc::clone(&store)),
        ServiceDispatcher::new(store, ids),
        SystemConfig::default(),
    )
}

/// Home Assistant routes over a fresh two-entity store.
pub(crate) fn test_app() -> Router {
    HomeAssistantApp::new(test_state()).routes()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub(crate) async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub(crate) async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, &body.to_string()).await
}

pub(crate) async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}
