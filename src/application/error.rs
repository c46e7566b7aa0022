use thiserror::Error;

use crate::domain::error::DomainError;
use crate::infra::error::InfraError;
use crate::infra::http::ApiError;

use super::session::AuthError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("no form is open")]
    NoOpenForm,
    #[error("a submission is already in progress")]
    Busy,
}

impl AppError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Domain(DomainError::Validation { .. }))
    }
}
