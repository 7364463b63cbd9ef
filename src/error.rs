use thiserror::Error;

/// Failures a use case cannot express as validation data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UseCaseError {
    #[error("failed to persist user: {0}")]
    Persistence(String),

    #[error("internal error: {0}")]
    Internal(String),
}
