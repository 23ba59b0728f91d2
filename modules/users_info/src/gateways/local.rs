use async_trait::async_trait;
use std::sync::Arc;

use crate::contract::{
    client::UsersInfoApi,
    error::UsersInfoError,
    model::{NewUser, User, UserPatch},
};
use crate::domain::{error::DomainError, service::Service};

/// Local implementation of the UsersInfoApi trait that delegates to the domain service
pub struct UsersInfoLocalClient {
    service: Arc<Service>,
}

impl UsersInfoLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UsersInfoApi for UsersInfoLocalClient {
    async fn get_user(&self, id: &str) -> anyhow::Result<User> {
        self.service.get_user(id).map_err(map_domain_error_to_anyhow)
    }

    async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.service.list_users())
    }

    async fn create_user(&self, new_user: NewUser) -> anyhow::Result<User> {
        self.service
            .create_user(new_user)
            .map_err(map_domain_error_to_anyhow)
    }

    async fn update_user(&self, id: &str, patch: UserPatch) -> anyhow::Result<User> {
        self.service
            .update_user(id, patch)
            .map_err(map_domain_error_to_anyhow)
    }

    async fn delete_user(&self, id: &str) -> anyhow::Result<User> {
        self.service.delete_user(id).map_err(map_domain_error_to_anyhow)
    }
}

/// Map domain errors to contract errors wrapped in anyhow
fn map_domain_error_to_anyhow(domain_error: DomainError) -> anyhow::Error {
    let contract_error = match domain_error {
        DomainError::UserNotFound { id } => UsersInfoError::not_found(id),
        DomainError::Validation { errors } => UsersInfoError::validation(errors),
        DomainError::IdGeneration { .. } => UsersInfoError::internal(),
    };

    anyhow::Error::new(contract_error)
}
