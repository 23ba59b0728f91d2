use crate::contract::model::{User, UserPatch};
use crate::domain::error::DomainError;

/// Port for the domain layer: storage of user records keyed by id.
///
/// Implementations own the records and hand out clones. Every operation is
/// a single synchronous step; nothing here validates input.
pub trait UsersRepository: Send + Sync {
    /// Every stored record, in no particular order.
    fn find_all(&self) -> Vec<User>;
    fn find_by_id(&self, id: &str) -> Result<User, DomainError>;
    /// Generate an id, store the record and return it.
    fn insert(&self, first_name: &str, last_name: &str, bio: &str) -> Result<User, DomainError>;
    /// Overwrite the fields of `patch` that are present and non-empty.
    fn update(&self, id: &str, patch: &UserPatch) -> Result<User, DomainError>;
    /// Remove the record, returning it as it was just before removal.
    fn delete(&self, id: &str) -> Result<User, DomainError>;
}
