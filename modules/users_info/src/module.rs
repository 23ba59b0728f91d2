use std::sync::Arc;

use axum::Router;
use tracing::{debug, info};
use utoipa::OpenApi;

use crate::api::rest::{openapi::UsersApiDoc, routes};
use crate::config::UsersInfoConfig;
use crate::contract::client::UsersInfoApi;
use crate::domain::repo::UsersRepository;
use crate::domain::service::{Service, ServiceConfig};
use crate::gateways::local::UsersInfoLocalClient;
use crate::infra::storage::memory_repo::InMemoryUsersRepository;

/// The users_info module: owns the domain service and exposes it as REST
/// routes and as an in-process client.
#[derive(Clone)]
pub struct UsersInfo {
    service: Arc<Service>,
}

impl UsersInfo {
    /// Wire the module over a fresh in-memory repository.
    pub fn new(cfg: UsersInfoConfig) -> anyhow::Result<Self> {
        Self::with_repository(cfg, Arc::new(InMemoryUsersRepository::new()))
    }

    pub fn with_repository(
        cfg: UsersInfoConfig,
        repo: Arc<dyn UsersRepository>,
    ) -> anyhow::Result<Self> {
        info!("Initializing users_info module");
        debug!("Loaded users_info config: {:?}", cfg);

        let service_config = ServiceConfig::try_from(cfg)?;
        let service = Service::new(repo, service_config);

        Ok(Self {
            service: Arc::new(service),
        })
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Local in-process client for other modules.
    pub fn client(&self) -> Arc<dyn UsersInfoApi> {
        Arc::new(UsersInfoLocalClient::new(self.service.clone()))
    }

    /// Register the REST routes onto `router`.
    pub fn register_rest(&self, router: Router) -> Router {
        info!("Registering users_info REST routes");
        routes::register_routes(router, self.service.clone())
    }

    pub fn openapi() -> utoipa::openapi::OpenApi {
        UsersApiDoc::openapi()
    }
}
