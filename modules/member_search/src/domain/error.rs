use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Page(#[from] search_core::Error),

    #[error("database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
