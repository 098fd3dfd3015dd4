use thiserror::Error;

/// Failure modes of a paged search.
///
/// `InvalidRequest` is raised before any data-source contact. `DataAccess`
/// wraps whatever the fetch or count side of a [`crate::PageSource`]
/// returned, unchanged; it is never retried and never downgraded to an
/// empty page.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid page request: {reason}")]
    InvalidRequest { reason: String },

    #[error("data access failed: {0}")]
    DataAccess(#[from] anyhow::Error),
}

impl Error {
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }
}
