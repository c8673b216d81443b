//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all route groups
//! - Register one schema route group per enabled component
//! - Wire up the middleware pipeline (tracing, request ID, timeout,
//!   limits, security, API version header, metrics)
//! - Run the server with graceful shutdown

use axum::extract::{DefaultBodyLimit, State};
use axum::routing::get;
use axum::{middleware, Json, Router};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::lifecycle::signals;
use crate::observability::metrics;
use crate::openapi::{self, SchemaError, SchemaState};
use crate::security::{self, AllowedHosts};
use crate::versioning::{self, VersionResolver};

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Build the server from a validated configuration.
    ///
    /// Fails when a component's schema document cannot be loaded or
    /// falls below the minimum supported document version.
    pub fn new(config: AppConfig) -> Result<Self, SchemaError> {
        let router = Self::build_router(&config)?;
        Ok(Self { router, config })
    }

    /// Build the Axum router with all route groups and middleware.
    fn build_router(config: &AppConfig) -> Result<Router, SchemaError> {
        let index = Arc::new(ServiceIndex::from_config(config));
        let mut router = Router::new()
            .route("/", get(service_index))
            .route("/health", get(health))
            .with_state(index);

        for component in config.components.iter().filter(|c| c.enabled) {
            let document = Arc::new(openapi::document_for(component)?);
            let schema_routes = Router::new()
                .route("/schema/{filename}", get(openapi::schema_document))
                .with_state(SchemaState { document });
            router = router.nest(
                &config.service.prefixed(&component.base_path),
                schema_routes,
            );
        }

        let resolver = Arc::new(VersionResolver::from_config(config));
        tracing::debug!(mappings = resolver.len(), "compiled version table");

        // Innermost stage: the version header wraps handler responses.
        router = router.layer(middleware::from_fn_with_state(
            resolver,
            versioning::version_headers,
        ));

        let allowed = AllowedHosts::new(&config.security.allowed_hosts);
        router = router.layer(middleware::from_fn_with_state(
            allowed,
            security::enforce_allowed_hosts,
        ));

        // Security headers wrap host rejections as well.
        if config.security.enable_headers {
            router = security::headers::apply(router);
        }

        if config.observability.metrics_enabled {
            router = router.layer(middleware::from_fn(metrics::track_requests));
        }

        // Outer stack, first entry outermost.
        router = router.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.timeouts.request_secs,
                )))
                .layer(DefaultBodyLimit::max(config.security.max_body_size)),
        );

        Ok(router)
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown.recv() => {},
                    _ = signals::shutdown_signal() => {},
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Service summary returned from the index endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceIndex {
    service: String,
    environment: String,
    components: Vec<ComponentSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComponentSummary {
    name: String,
    base_path: String,
    api_version: String,
    schema: String,
}

impl ServiceIndex {
    fn from_config(config: &AppConfig) -> Self {
        let components = config
            .components
            .iter()
            .filter(|c| c.enabled)
            .map(|c| {
                let base_path = config.service.prefixed(&c.base_path);
                ComponentSummary {
                    name: c.name.clone(),
                    api_version: c.api_version.to_string(),
                    schema: format!("{base_path}/schema/openapi.json"),
                    base_path,
                }
            })
            .collect();

        Self {
            service: config.service.name.clone(),
            environment: config.service.environment.clone(),
            components,
        }
    }
}

async fn service_index(State(index): State<Arc<ServiceIndex>>) -> Json<ServiceIndex> {
    Json((*index).clone())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
