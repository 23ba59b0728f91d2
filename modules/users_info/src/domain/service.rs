//! Users domain service: input validation in front of the repository port.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::contract::model::{NewUser, User, UserPatch};
use crate::domain::error::DomainError;
use crate::domain::repo::UsersRepository;
use crate::domain::validator::{max_chars, min_chars, not_blank, Validator};

pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const BIO: &str = "bio";

const BLANK_MESSAGE: &str = "this field cannot be blank";

/// Domain service: validates request input and drives the repository.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
    config: ServiceConfig,
}

/// Length bounds (inclusive, in characters after trimming)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub name_min_chars: usize,
    pub name_max_chars: usize,
    pub bio_min_chars: usize,
    pub bio_max_chars: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name_min_chars: 2,
            name_max_chars: 20,
            bio_min_chars: 20,
            bio_max_chars: 450,
        }
    }
}

impl Service {
    pub fn new(repo: Arc<dyn UsersRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    #[instrument(name = "users_info.service.list_users", skip(self))]
    pub fn list_users(&self) -> Vec<User> {
        let users = self.repo.find_all();
        debug!("Listed {} users", users.len());
        users
    }

    #[instrument(name = "users_info.service.get_user", skip(self), fields(user_id = %id))]
    pub fn get_user(&self, id: &str) -> Result<User, DomainError> {
        debug!("Getting user by id");
        self.repo.find_by_id(id)
    }

    #[instrument(name = "users_info.service.create_user", skip(self, new_user))]
    pub fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Creating new user");

        self.validate_new_user(&new_user).finish()?;

        let user = self
            .repo
            .insert(&new_user.first_name, &new_user.last_name, &new_user.bio)?;

        info!("Successfully created user with id={}", user.id);
        Ok(user)
    }

    #[instrument(name = "users_info.service.update_user", skip(self, patch), fields(user_id = %id))]
    pub fn update_user(&self, id: &str, patch: UserPatch) -> Result<User, DomainError> {
        info!("Updating user");

        let patch = supplied_fields(patch);
        self.validate_user_patch(&patch).finish()?;

        let user = self.repo.update(id, &patch)?;
        info!("Successfully updated user");
        Ok(user)
    }

    #[instrument(name = "users_info.service.delete_user", skip(self), fields(user_id = %id))]
    pub fn delete_user(&self, id: &str) -> Result<User, DomainError> {
        info!("Deleting user");
        let user = self.repo.delete(id)?;
        info!("Successfully deleted user");
        Ok(user)
    }

    // --- validation ---

    /// Create: every field is required, blank-checked and then length-checked.
    pub fn validate_new_user(&self, new_user: &NewUser) -> Validator {
        let mut v = Validator::new();

        v.check_field(not_blank(&new_user.first_name), FIRST_NAME, BLANK_MESSAGE);
        v.check_field(not_blank(&new_user.last_name), LAST_NAME, BLANK_MESSAGE);
        v.check_field(not_blank(&new_user.bio), BIO, BLANK_MESSAGE);

        self.check_name(&mut v, FIRST_NAME, &new_user.first_name);
        self.check_name(&mut v, LAST_NAME, &new_user.last_name);
        self.check_bio(&mut v, &new_user.bio);

        v
    }

    /// Update: only supplied (non-blank) fields are length-checked.
    pub fn validate_user_patch(&self, patch: &UserPatch) -> Validator {
        let mut v = Validator::new();

        if let Some(first_name) = patch.first_name.as_deref().filter(|s| not_blank(s)) {
            self.check_name(&mut v, FIRST_NAME, first_name);
        }
        if let Some(last_name) = patch.last_name.as_deref().filter(|s| not_blank(s)) {
            self.check_name(&mut v, LAST_NAME, last_name);
        }
        if let Some(bio) = patch.bio.as_deref().filter(|s| not_blank(s)) {
            self.check_bio(&mut v, bio);
        }

        v
    }

    fn check_name(&self, v: &mut Validator, field: &str, value: &str) {
        let (min, max) = (self.config.name_min_chars, self.config.name_max_chars);
        v.check_field(
            min_chars(value, min) && max_chars(value, max),
            field,
            length_message(field, min, max),
        );
    }

    fn check_bio(&self, v: &mut Validator, bio: &str) {
        let (min, max) = (self.config.bio_min_chars, self.config.bio_max_chars);
        v.check_field(
            min_chars(bio, min) && max_chars(bio, max),
            BIO,
            length_message(BIO, min, max),
        );
    }
}

fn length_message(field: &str, min: usize, max: usize) -> String {
    format!("{field} must be at least {min} chars long and at most {max} chars")
}

/// Blank patch fields count as "not supplied".
fn supplied_fields(patch: UserPatch) -> UserPatch {
    let keep = |v: Option<String>| v.filter(|s| not_blank(s));
    UserPatch {
        first_name: keep(patch.first_name),
        last_name: keep(patch.last_name),
        bio: keep(patch.bio),
    }
}
