use thiserror::Error;

use crate::domain::validator::FieldErrors;

/// Domain-specific errors using thiserror
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("user with id: {id} not found")]
    UserNotFound { id: String },

    #[error("validation failed: {}", field_list(errors))]
    Validation { errors: FieldErrors },

    #[error("id generation failed: {message}")]
    IdGeneration { message: String },
}

fn field_list(errors: &FieldErrors) -> String {
    errors.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
}

impl DomainError {
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::UserNotFound { id: id.into() }
    }

    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation { errors }
    }

    pub fn id_generation(message: impl Into<String>) -> Self {
        Self::IdGeneration {
            message: message.into(),
        }
    }
}
