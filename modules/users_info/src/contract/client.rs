use async_trait::async_trait;

use crate::contract::model::{NewUser, User, UserPatch};

/// Public API trait for the users_info module that other modules can use.
///
/// Errors are `anyhow` wrappers around [`UsersInfoError`](crate::contract::error::UsersInfoError).
#[async_trait]
pub trait UsersInfoApi: Send + Sync {
    /// Get a user by ID
    async fn get_user(&self, id: &str) -> anyhow::Result<User>;

    /// List every user; order is unspecified
    async fn list_users(&self) -> anyhow::Result<Vec<User>>;

    /// Validate and create a new user
    async fn create_user(&self, new_user: NewUser) -> anyhow::Result<User>;

    /// Update a user with partial data
    async fn update_user(&self, id: &str, patch: UserPatch) -> anyhow::Result<User>;

    /// Delete a user by ID, returning the removed record
    async fn delete_user(&self, id: &str) -> anyhow::Result<User>;
}
