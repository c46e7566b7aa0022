use catalog_admin_types::RecordId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} #{id} not found")]
    NotFound { entity: &'static str, id: RecordId },
    #[error("invalid `{field}`: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: RecordId) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}
