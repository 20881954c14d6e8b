//! Mock server: merges registered mock apps into a single router and serves it.

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::mock_app::MockApp;

/// Identity of a registered mock app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub base_path: String,
}

/// Hosts any number of [`MockApp`]s on one listener.
///
/// Every response carries permissive CORS headers. When `request_logging` is
/// on, each request/response pair is traced through [`TraceLayer`].
#[derive(Default)]
pub struct MockServer {
    router: Router,
    apps: Vec<AppInfo>,
    request_logging: bool,
}

impl MockServer {
    #[must_use]
    pub fn new(request_logging: bool) -> Self {
        Self {
            request_logging,
            ..Self::default()
        }
    }

    /// Merge the app's routes into the server.
    ///
    /// # Panics
    ///
    /// Panics if one of the app's routes overlaps an already registered one.
    pub fn register_app(&mut self, app: &impl MockApp) -> &mut Self {
        let router = std::mem::take(&mut self.router);
        self.router = router.merge(app.routes());
        self.apps.push(AppInfo {
            name: app.name().to_string(),
            version: app.version().to_string(),
            base_path: app.base_path().to_string(),
        });
        tracing::debug!(name = app.name(), base_path = app.base_path(), "registered mock app");
        self
    }

    /// Registered apps, in registration order.
    #[must_use]
    pub fn apps(&self) -> &[AppInfo] {
        &self.apps
    }

    /// Distinct base paths, in registration order.
    #[must_use]
    pub fn base_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = Vec::with_capacity(self.apps.len());
        for app in &self.apps {
            if !paths.contains(&app.base_path.as_str()) {
                paths.push(&app.base_path);
            }
        }
        paths
    }

    /// Finish the server into a plain router with middleware applied.
    #[must_use]
    pub fn into_router(self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let router = self.router.layer(cors);
        if self.request_logging {
            router.layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
        } else {
            router
        }
    }

    /// Serve on `listener` until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the listener fails.
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        for app in &self.apps {
            tracing::info!(name = %app.name, version = %app.version, "mock app ready");
        }
        tracing::info!(base_paths = ?self.base_paths(), "mounted base paths");
        tracing::info!(addr = %listener.local_addr()?, "mock server listening");

        axum::serve(listener, self.into_router())
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
