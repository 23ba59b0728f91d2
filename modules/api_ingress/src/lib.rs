use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{middleware::from_fn, response::Json, routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};

pub mod config;
pub mod problem;
pub mod request_id;
pub mod web;

pub use config::ApiIngressConfig;

/// HTTP host: owns the middleware stack, the health endpoints and the
/// optional OpenAPI document; feature modules contribute their routes.
#[derive(Debug, Clone, Default)]
pub struct ApiIngress {
    config: ApiIngressConfig,
    request_timeout: Option<Duration>,
}

impl ApiIngress {
    pub fn new(config: ApiIngressConfig) -> Self {
        Self {
            config,
            request_timeout: None,
        }
    }

    /// Handler timeout; `None` leaves requests unbounded.
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn config(&self) -> &ApiIngressConfig {
        &self.config
    }

    /// Build the final router around the module `routes`.
    pub fn build_router(
        &self,
        routes: Router,
        openapi: Option<utoipa::openapi::OpenApi>,
    ) -> Result<Router> {
        let mut router = Router::new()
            .route("/", get(web::health_check))
            .route("/health", get(web::health_check))
            .merge(routes)
            .fallback(web::route_not_found);

        if self.config.enable_docs {
            if let Some(doc) = openapi {
                // Serialize once, serve the same JSON on every request
                let doc = Arc::new(
                    serde_json::to_value(&doc).context("Failed to serialize OpenAPI document")?,
                );
                router = router.route(
                    "/openapi.json",
                    get(move || {
                        let doc = doc.clone();
                        async move { Json((*doc).clone()) }
                    }),
                );
            }
        }

        // Layers are added innermost first; the request id layers end up
        // outermost so every inner layer and handler sees the header.
        router = router.layer(RequestBodyLimitLayer::new(self.config.body_limit_bytes));

        if self.config.cors_enabled {
            router = router.layer(CorsLayer::permissive());
        }

        if let Some(timeout) = self.request_timeout {
            router = router.layer(TimeoutLayer::new(timeout));
        }

        let x_request_id = request_id::header();
        router = router
            .layer(from_fn(request_id::push_req_id_to_extensions))
            .layer(request_id::create_trace_layer())
            .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
            .layer(SetRequestIdLayer::new(x_request_id, request_id::MakeReqId));

        Ok(router)
    }
}

/// Bind `addr` and serve `router` until `shutdown` resolves.
pub async fn serve<F>(router: Router, addr: &str, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = addr
        .parse()
        .with_context(|| format!("Invalid bind address '{addr}'"))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("HTTP server bound on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown.await;
            tracing::info!("HTTP server shutting down gracefully");
        })
        .await
        .context("HTTP server failed")
}
