use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::contract::model::{User, UserPatch};
use crate::domain::error::DomainError;
use crate::domain::id::{IdGenerator, UuidV4Generator};
use crate::domain::repo::UsersRepository;

/// Process-lifetime user store.
///
/// The map is shared by every request handler, so all access goes through
/// one `RwLock`; `update` holds the write guard across its read-merge-write.
pub struct InMemoryUsersRepository {
    users: RwLock<HashMap<String, User>>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for InMemoryUsersRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUsersRepository {
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidV4Generator))
    }

    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            ids,
        }
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

fn merge_field(current: &mut String, supplied: Option<&String>) {
    if let Some(value) = supplied.filter(|v| !v.is_empty()) {
        current.clone_from(value);
    }
}

impl UsersRepository for InMemoryUsersRepository {
    fn find_all(&self) -> Vec<User> {
        self.users.read().values().cloned().collect()
    }

    fn find_by_id(&self, id: &str) -> Result<User, DomainError> {
        self.users
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    fn insert(&self, first_name: &str, last_name: &str, bio: &str) -> Result<User, DomainError> {
        let id = self
            .ids
            .generate()
            .map_err(|e| DomainError::id_generation(e.to_string()))?;

        let user = User {
            id: id.clone(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            bio: bio.to_string(),
        };

        match self.users.write().entry(id) {
            Entry::Occupied(e) => Err(DomainError::id_generation(format!(
                "generated id {} is already in use",
                e.key()
            ))),
            Entry::Vacant(e) => Ok(e.insert(user).clone()),
        }
    }

    fn update(&self, id: &str, patch: &UserPatch) -> Result<User, DomainError> {
        let mut users = self.users.write();
        let user = users
            .get_mut(id)
            .ok_or_else(|| DomainError::user_not_found(id))?;

        merge_field(&mut user.first_name, patch.first_name.as_ref());
        merge_field(&mut user.last_name, patch.last_name.as_ref());
        merge_field(&mut user.bio, patch.bio.as_ref());

        Ok(user.clone())
    }

    fn delete(&self, id: &str) -> Result<User, DomainError> {
        self.users
            .write()
            .remove(id)
            .ok_or_else(|| DomainError::user_not_found(id))
    }
}
