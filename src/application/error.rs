// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Stable wire code carried alongside the message in error responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) | Self::Domain(DomainError::NotFound(_)) => "DATA_NOT_FOUND",
            Self::Validation(_) | Self::Domain(DomainError::Validation(_)) => "INVALID_PARAMETER",
            Self::Infrastructure(_) | Self::Domain(DomainError::Persistence(_)) => "SERVER_ERROR",
        }
    }
}
