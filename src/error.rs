use size_guard_shared_kernel::{DomainError, InfrastructureError, PresentationError, SizeGuardError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] SizeGuardError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfrastructureError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "yaml")]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<PresentationError> for AppError {
    fn from(err: PresentationError) -> Self {
        Self::Core(err.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
