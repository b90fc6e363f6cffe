use thiserror::Error;

/// Failures surfaced by the use cases. The message of every variant is what
/// ends up in the `error` field of the HTTP response.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
