//! Shared application state for axum handlers.

use std::sync::Arc;

use hamock_app::ports::{EntityStore, IdGenerator};
use hamock_app::services::service_dispatcher::ServiceDispatcher;
use hamock_app::services::state_service::StateService;
use hamock_domain::system_config::SystemConfig;

/// Application state shared across all axum handlers.
///
/// Generic over the entity store and id generator to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<S, G> {
    /// Read-side entity use-cases.
    pub state_service: Arc<StateService<S>>,
    /// Service call validation and dispatch.
    pub dispatcher: Arc<ServiceDispatcher<S, G>>,
    /// Static hub metadata.
    pub system_config: Arc<SystemConfig>,
}

impl<S, G> Clone for AppState<S, G> {
    fn clone(&self) -> Self {
        Self {
            state_service: Arc::clone(&self.state_service),
            dispatcher: Arc::clone(&self.dispatcher),
            system_config: Arc::clone(&self.system_config),
        }
    }
}

impl<S, G> AppState<S, G>
where
    S: EntityStore + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        state_service: StateService<S>,
        dispatcher: ServiceDispatcher<S, G>,
        system_config: SystemConfig,
    ) -> Self {
        Self {
            state_service: Arc::new(state_service),
            dispatcher: Arc::new(dispatcher),
            system_config: Arc::new(system_config),
        }
    }
}
