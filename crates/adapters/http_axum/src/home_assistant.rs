//! Home Assistant mock app.

use axum::Router;

use hamock_app::ports::{EntityStore, IdGenerator};

use crate::mock_app::MockApp;
use crate::state::AppState;

/// Mounts the Home Assistant REST API under `/api`.
pub struct HomeAssistantApp<S, G> {
    state: AppState<S, G>,
}

impl<S, G> HomeAssistantApp<S, G> {
    pub const NAME: &'static str = "home-assistant";
    pub const BASE_PATH: &'static str = "/api";

    pub fn new(state: AppState<S, G>) -> Self {
        Self { state }
    }
}

impl<S, G> MockApp for HomeAssistantApp<S, G>
where
    S: EntityStore + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        Self::NAME
    }

    fn version(&self) -> &str {
        &self.state.system_config.version
    }

    fn base_path(&self) -> &str {
        Self::BASE_PATH
    }

    fn routes(&self) -> Router {
        Router::new()
            .nest(Self::BASE_PATH, crate::api::routes())
            .with_state(self.state.clone())
    }
}
