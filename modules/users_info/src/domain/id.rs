use thiserror::Error;

#[derive(Debug, Error)]
#[error("identifier source unavailable: {0}")]
pub struct IdGenerationError(pub String);

/// Source of record identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Result<String, IdGenerationError>;
}

/// Random v4 UUIDs in canonical hyphenated form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn generate(&self) -> Result<String, IdGenerationError> {
        Ok(uuid::Uuid::new_v4().hyphenated().to_string())
    }
}
