use std::collections::BTreeMap;

use thiserror::Error;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsersInfoError {
    #[error("User not found: {id}")]
    NotFound { id: String },

    #[error("Validation error on {} field(s)", errors.len())]
    Validation {
        errors: BTreeMap<String, Vec<String>>,
    },

    #[error("Internal error")]
    Internal,
}

impl UsersInfoError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn validation(errors: BTreeMap<String, Vec<String>>) -> Self {
        Self::Validation { errors }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}
