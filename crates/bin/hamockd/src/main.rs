//! # hamockd: mock hub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (`hamock.toml`, env vars)
//! - Initialize `tracing`
//! - Load seed entities (built-in home or a JSON file) into the in-memory store
//! - Construct application services, injecting the store and id generator
//! - Register the mock apps on the server
//! - Bind to a TCP port and serve until Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use hamock_adapter_http_axum::home_assistant::HomeAssistantApp;
use hamock_adapter_http_axum::server::MockServer;
use hamock_adapter_http_axum::state::AppState;
use hamock_adapter_storage_memory::InMemoryEntityStore;
use hamock_app::id_generator::RandomIdGenerator;
use hamock_app::ports::EntityStore;
use hamock_app::services::service_dispatcher::ServiceDispatcher;
use hamock_app::services::state_service::StateService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(config.log_filter())?)
        .init();

    // Store
    let entities = hamock_adapter_fixtures::load(config.fixtures.states_path.as_deref())?;
    let store = Arc::new(InMemoryEntityStore::seeded(entities)?);
    tracing::info!(count = store.len(), "entity store ready");

    // Services
    let state_service = StateService::new(Arc::clone(&store));
    let dispatcher = ServiceDispatcher::new(store, RandomIdGenerator);

    // HTTP
    let state = AppState::new(state_service, dispatcher, config.system_config());
    let mut server = MockServer::new(config.request_logging());
    server.register_app(&HomeAssistantApp::new(state));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    server.serve(listener).await?;

    tracing::info!("hamockd stopped");
    Ok(())
}
